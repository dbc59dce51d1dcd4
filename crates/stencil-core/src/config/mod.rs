//! Configuration management for Stencil.
//!
//! Configuration is loaded from the platform config directory with defaults
//! that reproduce the classic `./stock` + `./template` → `./hasil` layout.

mod batch;
mod types;
mod validate;

pub use batch::{BatchConfig, PipelineKind};
pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for Stencil.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input and output folders
    pub paths: PathsConfig,

    /// Input filtering policies per role
    pub inputs: InputsConfig,

    /// Resource limits
    pub limits: LimitsConfig,

    /// Output encoding settings
    pub encoding: EncodingConfig,

    /// Random template selection
    pub random: RandomConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.stencil.stencil/config.toml
    /// - Linux: ~/.config/stencil/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\stencil\config\config.toml
    ///
    /// Falls back to ~/.stencil/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "stencil", "stencil")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".stencil").join("config.toml")
            })
    }

    /// Resolved stock folder (with ~ expansion).
    pub fn stock_dir(&self) -> PathBuf {
        expand(&self.paths.stock_dir)
    }

    /// Resolved template folder (with ~ expansion).
    pub fn template_dir(&self) -> PathBuf {
        expand(&self.paths.template_dir)
    }

    /// Resolved output folder (with ~ expansion).
    pub fn output_dir(&self) -> PathBuf {
        expand(&self.paths.output_dir)
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

fn expand(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    let expanded = shellexpand::tilde(&path_str);
    PathBuf::from(expanded.into_owned())
}
