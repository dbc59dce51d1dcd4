//! Sub-configuration structs with defaults matching the original folder layout.

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Input and output folder locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Folder holding the stock (background) images
    pub stock_dir: PathBuf,

    /// Folder holding the template overlays
    pub template_dir: PathBuf,

    /// Folder receiving composited outputs (created if absent)
    pub output_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            stock_dir: PathBuf::from("./stock"),
            template_dir: PathBuf::from("./template"),
            output_dir: PathBuf::from("./hasil"),
        }
    }
}

/// How files in an input folder qualify for compositing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Probe the image header; accept anything with positive dimensions
    Header,
    /// Accept by file extension only, without reading the file
    Extension,
}

/// Per-role input validation policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputsConfig {
    /// Policy for the stock folder
    pub stock_filter: FilterKind,

    /// Policy for the template folder
    pub template_filter: FilterKind,

    /// Extensions accepted for stock files when `stock_filter = "extension"`
    pub stock_extensions: Vec<String>,

    /// Extensions accepted for templates when `template_filter = "extension"`
    pub template_extensions: Vec<String>,

    /// Match extensions case-insensitively (`T1.PNG` counts as `.png`)
    pub ignore_extension_case: bool,
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            stock_filter: FilterKind::Header,
            template_filter: FilterKind::Extension,
            stock_extensions: ["jpg", "jpeg", "png", "webp", "gif", "bmp", "tiff", "tif"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            template_extensions: vec!["png".to_string()],
            ignore_extension_case: false,
        }
    }
}

/// Resource limits to protect against problematic inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum file size in megabytes
    pub max_file_size_mb: u64,

    /// Maximum image dimension (width or height)
    pub max_image_dimension: u32,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: 100,
            max_image_dimension: 20000,
        }
    }
}

/// Resampling filter used by the stretch transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeFilter {
    Nearest,
    #[default]
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl ResizeFilter {
    /// Parse a filter name (case-insensitive, `_` and `-` interchangeable).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "nearest" => Some(Self::Nearest),
            "triangle" | "bilinear" => Some(Self::Triangle),
            "catmull-rom" | "catmullrom" | "bicubic" => Some(Self::CatmullRom),
            "gaussian" => Some(Self::Gaussian),
            "lanczos3" | "lanczos" => Some(Self::Lanczos3),
            _ => None,
        }
    }

    /// The `image` crate filter this maps to.
    pub fn filter_type(self) -> FilterType {
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Triangle => FilterType::Triangle,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Gaussian => FilterType::Gaussian,
            Self::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Output encoding settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodingConfig {
    /// JPEG quality (1-100) for the random pipeline
    pub jpeg_quality: u8,

    /// Filter for the resize pipeline
    pub resize_filter: ResizeFilter,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: 75,
            resize_filter: ResizeFilter::default(),
        }
    }
}

/// Random template selection settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Fixed seed for reproducible picks; OS entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
