//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading reconciliation
//! settings from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::ReferenceWindow;

use super::types::ReconcilerConfig;

/// Loads and provides access to the reconciliation configuration.
///
/// The `ConfigLoader` reads `reconciliation.yaml` from a directory and
/// validates the configured reference window up front.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── reconciliation.yaml   # reference window dates
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// let window = loader.window();
/// # Ok::<(), leave_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader {
    window: ReferenceWindow,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `reconciliation.yaml` is missing
    /// - the file contains invalid YAML
    /// - the configured window has its start after its end
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config_path = path.as_ref().join("reconciliation.yaml");
        let config = Self::load_yaml::<ReconcilerConfig>(&config_path)?;
        Ok(Self {
            window: config.reference_window()?,
        })
    }

    /// Builds a loader from the built-in default configuration.
    pub fn with_defaults() -> Self {
        let window = ReconcilerConfig::default()
            .reference_window()
            .expect("default window is valid");
        Self { window }
    }

    /// The validated reference window.
    pub fn window(&self) -> ReferenceWindow {
        self.window
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::with_defaults()
    }
}
