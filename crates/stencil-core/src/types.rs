//! Core data types produced by a compositing run.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One written output image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    /// Output file name (e.g. `crop_a_t1.png`)
    pub file_name: String,

    /// Full path the file was written to
    pub output_path: PathBuf,

    /// Stock image it was built from
    pub stock: PathBuf,

    /// Template drawn on top
    pub template: PathBuf,

    /// Output width in pixels (always the template's width)
    pub width: u32,

    /// Output height in pixels (always the template's height)
    pub height: u32,

    /// "png" or "jpeg"
    pub encoding: String,

    /// Encoded size in bytes
    pub bytes: u64,
}

/// Statistics for a batch run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BatchStats {
    /// Stock images that passed the stock filter
    pub stock_images: usize,

    /// Templates that passed the template filter
    pub templates: usize,

    /// Output files written
    pub written: usize,

    /// Total encoded bytes written
    pub total_bytes: u64,

    /// Wall-clock duration in seconds
    pub total_seconds: f64,

    /// Output files per second
    pub outputs_per_second: f64,
}
