//! Explicit per-run settings handed to the batch driver.

use std::path::PathBuf;

use crate::pipeline::composite::OutputEncoding;
use crate::pipeline::discovery::InputFilter;
use crate::pipeline::pairing::Pairing;
use crate::pipeline::transform::BaseTransform;

use super::Config;

/// The three compositing pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineKind {
    /// Every stock × every template, center-cropped, PNG, `crop_` prefix
    Crop,
    /// Every stock × every template, stretched, PNG, `resize_` prefix
    Resize,
    /// Every stock × one random template, center-cropped, JPEG, no prefix
    Random,
}

impl PipelineKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Crop => "crop",
            Self::Resize => "resize",
            Self::Random => "random",
        }
    }
}

/// Everything a batch run needs, resolved up front.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub stock_dir: PathBuf,
    pub template_dir: PathBuf,
    pub output_dir: PathBuf,
    pub stock_filter: InputFilter,
    pub template_filter: InputFilter,
    pub pairing: Pairing,
    pub transform: BaseTransform,
    pub encoding: OutputEncoding,
    /// Prepended to every output file name
    pub prefix: String,
    /// Seed for the random template pick
    pub seed: Option<u64>,
}

impl BatchConfig {
    /// Build the preset for `kind` from the loaded configuration.
    pub fn for_pipeline(config: &Config, kind: PipelineKind) -> Self {
        let (pairing, transform, encoding, prefix) = match kind {
            PipelineKind::Crop => (
                Pairing::AllPairs,
                BaseTransform::CenterCrop,
                OutputEncoding::Png,
                "crop_",
            ),
            PipelineKind::Resize => (
                Pairing::AllPairs,
                BaseTransform::Stretch {
                    filter: config.encoding.resize_filter.filter_type(),
                },
                OutputEncoding::Png,
                "resize_",
            ),
            PipelineKind::Random => (
                Pairing::RandomOne,
                BaseTransform::CenterCrop,
                OutputEncoding::Jpeg {
                    quality: config.encoding.jpeg_quality,
                },
                "",
            ),
        };

        Self {
            stock_dir: config.stock_dir(),
            template_dir: config.template_dir(),
            output_dir: config.output_dir(),
            stock_filter: InputFilter::from_config(
                config.inputs.stock_filter,
                &config.inputs.stock_extensions,
                config.inputs.ignore_extension_case,
            ),
            template_filter: InputFilter::from_config(
                config.inputs.template_filter,
                &config.inputs.template_extensions,
                config.inputs.ignore_extension_case,
            ),
            pairing,
            transform,
            encoding,
            prefix: prefix.to_string(),
            seed: config.random.seed,
        }
    }
}
