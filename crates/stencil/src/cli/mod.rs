//! Command handlers.

pub mod config;
pub mod run;

use std::path::Path;

use stencil_core::{Config, ConfigError};

/// Load the config from `path` if given, otherwise from the default location.
///
/// A file that does not exist yet yields the defaults, as with the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) if path.exists() => Config::load_from(path),
        Some(_) => Ok(Config::default()),
        None => Config::load(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_explicit_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.encoding.jpeg_quality, 75);
    }

    #[test]
    fn explicit_file_is_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[encoding]\njpeg_quality = 0\n").unwrap();
        assert!(load_config(Some(&path)).is_err());
    }
}
