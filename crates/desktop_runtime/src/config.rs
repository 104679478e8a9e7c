//! Shell configuration: taskbar band, spawn region, z-index base and per-app launch params.

use std::collections::BTreeMap;

use leptos::logging;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::model::Viewport;

pub const DEFAULT_TASKBAR_HEIGHT: i32 = 40;
pub const DEFAULT_FIRST_Z_INDEX: u32 = 10;

/// Region new windows are scattered over so successive windows do not overlap exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnRegion {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl Default for SpawnRegion {
    fn default() -> Self {
        Self {
            x_min: 50,
            x_max: 250,
            y_min: 50,
            y_max: 150,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub taskbar_height: i32,
    pub spawn_region: SpawnRegion,
    pub first_z_index: u32,
    /// Used when the browser viewport cannot be measured.
    pub fallback_viewport: Viewport,
    /// Opaque parameters handed to each window of the keyed app kind when it mounts.
    pub app_params: BTreeMap<String, Value>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            taskbar_height: DEFAULT_TASKBAR_HEIGHT,
            spawn_region: SpawnRegion::default(),
            first_z_index: DEFAULT_FIRST_Z_INDEX,
            fallback_viewport: Viewport::new(1024, 768),
            app_params: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid shell config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("taskbar height must be non-negative, got {0}")]
    NegativeTaskbar(i32),
    #[error("spawn region is inverted: x {x_min}..{x_max}, y {y_min}..{y_max}")]
    InvertedSpawnRegion {
        x_min: i32,
        x_max: i32,
        y_min: i32,
        y_max: i32,
    },
    #[error("fallback viewport must be positive, got {width}x{height}")]
    EmptyViewport { width: i32, height: i32 },
}

impl ShellConfig {
    /// Parses and validates a JSON document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed JSON or out-of-range values.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`Self::from_json_str`] but logs a warning and falls back to defaults on failure.
    pub fn load_or_default(raw: &str) -> Self {
        match Self::from_json_str(raw) {
            Ok(config) => config,
            Err(err) => {
                logging::warn!("shell config rejected, using defaults: {err}");
                Self::default()
            }
        }
    }

    pub fn launch_params(&self, kind: &str) -> Value {
        self.app_params.get(kind).cloned().unwrap_or(Value::Null)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.taskbar_height < 0 {
            return Err(ConfigError::NegativeTaskbar(self.taskbar_height));
        }
        let region = self.spawn_region;
        if region.x_min > region.x_max || region.y_min > region.y_max {
            return Err(ConfigError::InvertedSpawnRegion {
                x_min: region.x_min,
                x_max: region.x_max,
                y_min: region.y_min,
                y_max: region.y_max,
            });
        }
        let fallback = self.fallback_viewport;
        if fallback.width <= 0 || fallback.height <= 0 {
            return Err(ConfigError::EmptyViewport {
                width: fallback.width,
                height: fallback.height,
            });
        }
        Ok(())
    }
}
