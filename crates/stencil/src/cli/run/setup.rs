//! Run setup: CLI overrides on top of the loaded config.

use stencil_core::{BatchConfig, Config, PipelineKind};

use super::RunArgs;

/// Apply CLI overrides to `config` and resolve the batch settings for `kind`.
pub fn setup_batch(
    kind: PipelineKind,
    args: &RunArgs,
    mut config: Config,
) -> anyhow::Result<(Config, BatchConfig)> {
    apply_overrides(&mut config, args);
    config.validate()?;

    let batch = BatchConfig::for_pipeline(&config, kind);
    Ok((config, batch))
}

/// Copy every flag the user set onto the loaded config.
fn apply_overrides(config: &mut Config, args: &RunArgs) {
    if let Some(stock) = &args.stock {
        config.paths.stock_dir = stock.clone();
    }
    if let Some(template) = &args.template {
        config.paths.template_dir = template.clone();
    }
    if let Some(output) = &args.output {
        config.paths.output_dir = output.clone();
    }
    if let Some(seed) = args.seed {
        config.random.seed = Some(seed);
    }
    if let Some(quality) = args.jpeg_quality {
        config.encoding.jpeg_quality = quality;
    }
    if let Some(filter) = args.filter {
        config.encoding.resize_filter = filter;
    }
}
