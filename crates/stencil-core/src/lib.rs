//! Stencil Core - batch compositing of stock images with template overlays.
//!
//! Every stock image is fitted to a template's dimensions (center-crop or
//! stretch), the template is alpha-blended on top, and the result is written
//! as PNG or JPEG.
//!
//! # Architecture
//!
//! ```text
//! List stock (header probe) ─┐
//!                            ├→ Pair → Decode → Fit base → Overlay → Encode → Write
//! List templates (.png)     ─┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use stencil_core::{BatchConfig, BatchDriver, Config, PipelineKind};
//!
//! #[tokio::main]
//! async fn main() -> stencil_core::Result<()> {
//!     let config = Config::load()?;
//!     let batch = BatchConfig::for_pipeline(&config, PipelineKind::Crop);
//!     let stats = BatchDriver::new(batch, config.limits).run().await?;
//!     println!("Wrote {} file(s)", stats.written);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use config::{BatchConfig, Config, PipelineKind};
pub use error::{ConfigError, PipelineError, PipelineResult, Result, StencilError};
pub use output::{ManifestFormat, ManifestWriter};
pub use pipeline::{BatchDriver, BatchPlan, ImageClassifier, TemplatePicker};
pub use types::{Artifact, BatchStats};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
