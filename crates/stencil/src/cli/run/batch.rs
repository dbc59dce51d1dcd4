//! Batch execution: progress bar, optional manifest, and the closing summary.

use std::fs::File;
use std::io::BufWriter;

use indicatif::{ProgressBar, ProgressStyle};
use stencil_core::pipeline::Pairing;
use stencil_core::{BatchDriver, BatchPlan, BatchStats, ManifestWriter, StencilError};

use super::RunArgs;

/// Run a planned batch with progress tracking and an optional manifest.
pub async fn run_batch(
    driver: &mut BatchDriver,
    plan: &BatchPlan,
    pairing: Pairing,
    args: &RunArgs,
) -> anyhow::Result<()> {
    let total = plan.expected_outputs(pairing) as u64;
    let progress = if args.no_progress {
        ProgressBar::hidden()
    } else {
        create_progress_bar(total)
    };

    let mut manifest = match &args.manifest {
        Some(path) => {
            let file = File::create(path)?;
            Some(ManifestWriter::new(
                BufWriter::new(file),
                args.manifest_format.into(),
            ))
        }
        None => None,
    };

    let start_time = std::time::Instant::now();
    let result = driver
        .execute(plan, |artifact| {
            progress.inc(1);
            let elapsed = start_time.elapsed().as_secs_f64();
            if elapsed > 0.0 {
                progress.set_message(format!("{:.1} img/sec", progress.position() as f64 / elapsed));
            }
            if let Some(writer) = manifest.as_mut() {
                writer.record(artifact).map_err(StencilError::Io)?;
            }
            Ok(())
        })
        .await;

    progress.finish_and_clear();

    // The manifest lists whatever was written, even if the run aborted.
    if let Some(writer) = manifest {
        let records = writer.records();
        writer.finish()?;
        if let Some(path) = &args.manifest {
            tracing::info!("Manifest with {} record(s) written to {:?}", records, path);
        }
    }

    let stats = result?;
    print_summary(&stats);
    Ok(())
}

/// Create a progress bar for a compositing run.
fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-");
    pb.set_style(style);
    pb.set_message("starting...");
    pb
}

/// Print a formatted summary table after a run.
fn print_summary(stats: &BatchStats) {
    let mb_written = stats.total_bytes as f64 / 1_000_000.0;

    eprintln!();
    eprintln!("  ====================================");
    eprintln!("               Summary");
    eprintln!("  ====================================");
    eprintln!("    Stock images: {:>8}", stats.stock_images);
    eprintln!("    Templates:    {:>8}", stats.templates);
    eprintln!("    Written:      {:>8}", stats.written);
    eprintln!("  ------------------------------------");
    eprintln!("    Output size:  {:>7.1} MB", mb_written);
    eprintln!("    Duration:     {:>7.1}s", stats.total_seconds);
    eprintln!("    Rate:         {:>7.1} img/sec", stats.outputs_per_second);
    eprintln!("  ====================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use stencil_core::{BatchConfig, Config, PipelineKind};

    fn write_png(path: &std::path::Path, w: u32, h: u32) {
        image::RgbaImage::from_pixel(w, h, image::Rgba([10, 20, 30, 255]))
            .save(path)
            .unwrap();
    }

    #[tokio::test]
    async fn manifest_lists_every_written_file() {
        let dir = tempfile::tempdir().unwrap();
        let stock = dir.path().join("stock");
        let template = dir.path().join("template");
        std::fs::create_dir_all(&stock).unwrap();
        std::fs::create_dir_all(&template).unwrap();
        write_png(&stock.join("a.png"), 8, 6);
        write_png(&template.join("t1.png"), 4, 4);
        write_png(&template.join("t2.png"), 2, 3);

        let mut config = Config::default();
        config.paths.stock_dir = stock;
        config.paths.template_dir = template;
        config.paths.output_dir = dir.path().join("out");

        let batch = BatchConfig::for_pipeline(&config, PipelineKind::Crop);
        let pairing = batch.pairing;
        let mut driver = BatchDriver::new(batch, config.limits);
        let plan = driver.plan().unwrap();

        let manifest_path = dir.path().join("manifest.jsonl");
        let args = RunArgs {
            manifest: Some(manifest_path.clone()),
            manifest_format: super::super::ManifestFormat::Jsonl,
            no_progress: true,
            ..RunArgs::default()
        };
        run_batch(&mut driver, &plan, pairing, &args).await.unwrap();

        let content = std::fs::read_to_string(&manifest_path).unwrap();
        let names: Vec<String> = content
            .lines()
            .map(|line| {
                let value: serde_json::Value = serde_json::from_str(line).unwrap();
                value["file_name"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(names, vec!["crop_a_t1.png", "crop_a_t2.png"]);
    }
}
