//! Centralized startup configuration with TOML preset support.
//!
//! All tweakable settings (drag sensitivity, damping, rotation style,
//! camera projection, zoom bounds) are consolidated here. Options
//! serialize to/from TOML; `#[serde(default)]` on every section means a
//! partial file overriding a single field works correctly.

mod camera;
mod interaction;

use std::path::Path;

pub use camera::CameraOptions;
pub use interaction::InteractionOptions;
use serde::{Deserialize, Serialize};

use crate::error::OrbisError;

/// Top-level options container.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default,
)]
#[serde(default)]
pub struct Options {
    /// Drag-rotation tuning.
    pub interaction: InteractionOptions,
    /// Camera projection and zoom parameters.
    pub camera: CameraOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`OrbisError::Io`] if the file cannot be read and
    /// [`OrbisError::OptionsParse`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, OrbisError> {
        let content = std::fs::read_to_string(path).map_err(OrbisError::Io)?;
        toml::from_str(&content)
            .map_err(|e| OrbisError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`OrbisError::OptionsParse`] on serialization failure and
    /// [`OrbisError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), OrbisError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrbisError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrbisError::Io)?;
        }
        std::fs::write(path, content).map_err(OrbisError::Io)
    }
}
