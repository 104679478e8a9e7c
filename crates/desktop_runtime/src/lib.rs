pub mod apps;
pub mod components;
pub mod config;
pub mod controller;
pub mod geometry;
mod host;
pub mod model;
pub mod reducer;
pub mod registry;
mod runtime_context;
pub mod shell;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::{ConfigError, ShellConfig, SpawnRegion};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction};
pub use registry::WindowRegistry;
pub use window_manager::{BrowserJitter, SpawnJitter, WindowManager};
