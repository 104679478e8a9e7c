//! Shared contract types between the desktop window manager runtime and hosted apps.
//!
//! A hosted app is an opaque panel: the runtime hands it a [`AppMountContext`] and places the
//! returned view inside the window frame. Apps never see window geometry and must fill whatever
//! frame they are given. Deployment-specific settings reach an app through its launch params.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::borrow::Cow;

use leptos::View;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stable identifier for a runtime-managed window.
pub type WindowRuntimeId = u64;

/// Identifies which catalog entry a window hosts (for example `notepad`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppKind(Cow<'static, str>);

impl AppKind {
    /// Creates a kind from a static catalog identifier.
    pub const fn from_static(raw: &'static str) -> Self {
        Self(Cow::Borrowed(raw))
    }

    /// Creates a kind from an owned string, typically user or URL supplied.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(Cow::Owned(raw.into()))
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AppKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for AppKind {
    fn from(raw: &'static str) -> Self {
        Self::from_static(raw)
    }
}

/// Context passed to an app module when its view is mounted into a window.
#[derive(Debug, Clone, PartialEq)]
pub struct AppMountContext {
    /// Kind of the app being mounted.
    pub app_kind: AppKind,
    /// Stable runtime window id.
    pub window_id: WindowRuntimeId,
    /// Shell-configured parameters for this app kind, `Value::Null` when none are set.
    pub launch_params: Value,
}

/// Mount function signature for app modules.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mountable app module descriptor used by the runtime catalog.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

/// Returns the DOM id used for an app's root element inside a window.
pub fn window_content_dom_id(window_id: WindowRuntimeId) -> String {
    format!("window-content-{window_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_and_owned_kinds_compare_equal() {
        assert_eq!(AppKind::from_static("notepad"), AppKind::new("notepad"));
        assert_ne!(AppKind::from("notepad"), AppKind::new("calculator"));
    }

    #[test]
    fn kind_displays_raw_identifier() {
        assert_eq!(AppKind::new("gemini").to_string(), "gemini");
    }

    #[test]
    fn content_dom_id_is_window_scoped() {
        assert_eq!(window_content_dom_id(7), "window-content-7");
    }
}
