//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::{Config, FilterKind};

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, path) in [
            ("paths.stock_dir", &self.paths.stock_dir),
            ("paths.template_dir", &self.paths.template_dir),
            ("paths.output_dir", &self.paths.output_dir),
        ] {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must not be empty"
                )));
            }
        }
        if self.inputs.stock_filter == FilterKind::Extension
            && self.inputs.stock_extensions.is_empty()
        {
            return Err(ConfigError::ValidationError(
                "inputs.stock_extensions must not be empty when stock_filter = \"extension\""
                    .into(),
            ));
        }
        if self.inputs.template_filter == FilterKind::Extension
            && self.inputs.template_extensions.is_empty()
        {
            return Err(ConfigError::ValidationError(
                "inputs.template_extensions must not be empty when template_filter = \"extension\""
                    .into(),
            ));
        }
        if self.limits.max_file_size_mb == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_file_size_mb must be > 0".into(),
            ));
        }
        if self.limits.max_image_dimension == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_image_dimension must be > 0".into(),
            ));
        }
        if !(1..=100).contains(&self.encoding.jpeg_quality) {
            return Err(ConfigError::ValidationError(
                "encoding.jpeg_quality must be between 1 and 100".into(),
            ));
        }
        Ok(())
    }
}
