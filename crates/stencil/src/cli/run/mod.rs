//! The `stencil crop|resize|random` commands.

mod batch;
mod setup;
pub mod types;

pub use types::ManifestFormat;

use clap::Args;
use std::path::PathBuf;
use stencil_core::config::ResizeFilter;
use stencil_core::{BatchDriver, Config, PipelineError, PipelineKind};

use batch::run_batch;
use setup::setup_batch;

/// Arguments shared by the three pipeline commands.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Stock image folder (overrides `paths.stock_dir`)
    #[arg(long)]
    pub stock: Option<PathBuf>,

    /// Template folder (overrides `paths.template_dir`)
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Output folder (overrides `paths.output_dir`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seed for the random template pick
    #[arg(long)]
    pub seed: Option<u64>,

    /// JPEG quality, 1-100
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub jpeg_quality: Option<u8>,

    /// Resampling filter for the resize pipeline
    #[arg(long, value_parser = parse_filter)]
    pub filter: Option<ResizeFilter>,

    /// Write a manifest of every output file here
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Manifest format
    #[arg(long, value_enum, default_value = "json")]
    pub manifest_format: ManifestFormat,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

fn parse_filter(s: &str) -> Result<ResizeFilter, String> {
    ResizeFilter::parse(s).ok_or_else(|| {
        format!("unknown filter '{s}' (expected nearest, triangle, catmull-rom, gaussian, lanczos3)")
    })
}

/// Execute a pipeline command against an already loaded `config`.
///
/// A template folder with nothing usable is reported and ends the run
/// cleanly; every other failure propagates.
pub async fn execute(kind: PipelineKind, args: RunArgs, config: Config) -> anyhow::Result<()> {
    let (config, batch) = setup_batch(kind, &args, config)?;
    tracing::info!(
        "Running {} pipeline: {:?} + {:?} -> {:?}",
        kind.name(),
        batch.stock_dir,
        batch.template_dir,
        batch.output_dir
    );

    let pairing = batch.pairing;
    let mut driver = BatchDriver::new(batch, config.limits);

    let plan = match driver.plan() {
        Ok(plan) => plan,
        Err(PipelineError::NoTemplates { dir }) => {
            tracing::error!("No templates found in {:?}; nothing to composite", dir);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if plan.stocks.is_empty() {
        tracing::warn!("No stock images found in {:?}", driver.config().stock_dir);
    }

    run_batch(&mut driver, &plan, pairing, &args).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_args_override_nothing() {
        let args = RunArgs::default();
        assert!(args.stock.is_none());
        assert!(args.seed.is_none());
        assert!(args.jpeg_quality.is_none());
        assert_eq!(args.manifest_format, ManifestFormat::Json);
        assert!(!args.no_progress);
    }

    #[test]
    fn parse_filter_accepts_aliases() {
        assert_eq!(parse_filter("lanczos"), Ok(ResizeFilter::Lanczos3));
        assert_eq!(parse_filter("CatmullRom"), Ok(ResizeFilter::CatmullRom));
        assert!(parse_filter("sinc").is_err());
    }

    fn folders(root: &std::path::Path) -> RunArgs {
        RunArgs {
            stock: Some(root.join("stock")),
            template: Some(root.join("template")),
            output: Some(root.join("out")),
            no_progress: true,
            ..RunArgs::default()
        }
    }

    #[tokio::test]
    async fn empty_template_folder_ends_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("stock")).unwrap();
        std::fs::create_dir(dir.path().join("template")).unwrap();

        execute(PipelineKind::Crop, folders(dir.path()), Config::default())
            .await
            .unwrap();

        assert!(dir.path().join("out").is_dir());
    }

    #[tokio::test]
    async fn empty_stock_folder_still_runs_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("stock")).unwrap();
        std::fs::create_dir(dir.path().join("template")).unwrap();
        image::RgbaImage::new(4, 4)
            .save(dir.path().join("template").join("t1.png"))
            .unwrap();

        let manifest = dir.path().join("manifest.json");
        let args = RunArgs {
            manifest: Some(manifest.clone()),
            ..folders(dir.path())
        };
        execute(PipelineKind::Random, args, Config::default())
            .await
            .unwrap();

        // The batch ran to completion: its manifest exists and lists nothing
        let records: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&manifest).unwrap()).unwrap();
        assert_eq!(records, serde_json::json!([]));
        assert_eq!(std::fs::read_dir(dir.path().join("out")).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn missing_stock_folder_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = RunArgs {
            stock: Some(dir.path().join("nope")),
            template: Some(dir.path().join("also-nope")),
            ..folders(dir.path())
        };
        let result = execute(PipelineKind::Resize, args, Config::default()).await;
        assert!(result.is_err());
    }
}
