//! Image compositing pipeline components.
//!
//! This module contains all the stages of a compositing run:
//! - **classify**: Header-only check for whether a file is an image
//! - **discovery**: List input folders through per-role filters
//! - **decode**: Load and decode images with size limits
//! - **transform**: Center-crop or stretch a stock image to a template's size
//! - **composite**: Draw the template over the fitted stock and encode
//! - **pairing**: All-pairs or random-one template selection, output naming
//! - **driver**: Orchestrates a full batch run

pub mod classify;
pub mod composite;
pub mod decode;
pub mod discovery;
pub mod driver;
pub mod pairing;
pub mod transform;

// Re-exports for convenient access
pub use classify::ImageClassifier;
pub use composite::{Compositor, EncodedImage, OutputEncoding};
pub use decode::{DecodedImage, ImageDecoder};
pub use discovery::{DiscoveredFile, FileDiscovery, InputFilter};
pub use driver::{BatchDriver, BatchPlan};
pub use pairing::{output_file_name, Pairing, TemplatePicker};
pub use transform::BaseTransform;
