//! Batch orchestration: list inputs, pair them, composite, write.

use std::time::Instant;

use crate::config::{BatchConfig, LimitsConfig};
use crate::error::{PipelineError, PipelineResult, Result};
use crate::types::{Artifact, BatchStats};

use super::composite::Compositor;
use super::decode::ImageDecoder;
use super::discovery::{DiscoveredFile, FileDiscovery};
use super::pairing::{output_file_name, Pairing, TemplatePicker};

/// Qualifying inputs for one run.
#[derive(Debug, Clone)]
pub struct BatchPlan {
    pub stocks: Vec<DiscoveredFile>,
    pub templates: Vec<DiscoveredFile>,
}

impl BatchPlan {
    /// Number of files the run will write under `pairing`.
    pub fn expected_outputs(&self, pairing: Pairing) -> usize {
        pairing.expected_outputs(self.stocks.len(), self.templates.len())
    }
}

/// Runs one compositing pipeline over a stock folder and a template folder.
///
/// Work is strictly sequential. The first decode, encode, or write failure
/// aborts the run; outputs written before it are left in place.
pub struct BatchDriver {
    config: BatchConfig,
    decoder: ImageDecoder,
    compositor: Compositor,
    picker: TemplatePicker,
}

impl BatchDriver {
    /// Create a driver. The template picker is seeded from `config.seed`.
    pub fn new(config: BatchConfig, limits: LimitsConfig) -> Self {
        let picker = TemplatePicker::from_seed(config.seed);
        Self {
            compositor: Compositor::new(config.transform, config.encoding),
            decoder: ImageDecoder::new(limits),
            picker,
            config,
        }
    }

    /// Replace the random source used for template picks.
    pub fn with_picker(mut self, picker: TemplatePicker) -> Self {
        self.picker = picker;
        self
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Prepare the output folder and list qualifying inputs.
    ///
    /// Fails with [`PipelineError::NoTemplates`] before anything is
    /// composited when the template folder yields nothing.
    pub fn plan(&self) -> PipelineResult<BatchPlan> {
        let output_dir = &self.config.output_dir;
        std::fs::create_dir_all(output_dir).map_err(|e| PipelineError::Write {
            path: output_dir.clone(),
            source: e,
        })?;

        let stocks = FileDiscovery::list(&self.config.stock_dir, &self.config.stock_filter)?;
        let templates =
            FileDiscovery::list(&self.config.template_dir, &self.config.template_filter)?;

        if templates.is_empty() {
            return Err(PipelineError::NoTemplates {
                dir: self.config.template_dir.clone(),
            });
        }

        tracing::info!(
            "Found {} stock image(s) ({:.1} MB) and {} template(s)",
            stocks.len(),
            FileDiscovery::total_size(&stocks) as f64 / 1_000_000.0,
            templates.len()
        );
        Ok(BatchPlan { stocks, templates })
    }

    /// Composite every planned pair and write the results.
    ///
    /// `on_written` is called after each file lands on disk; an error from it
    /// aborts the run like any pipeline failure.
    pub async fn execute<F>(&mut self, plan: &BatchPlan, mut on_written: F) -> Result<BatchStats>
    where
        F: FnMut(&Artifact) -> Result<()>,
    {
        let start = Instant::now();
        let mut stats = BatchStats {
            stock_images: plan.stocks.len(),
            templates: plan.templates.len(),
            ..BatchStats::default()
        };

        for stock in &plan.stocks {
            let decode_start = Instant::now();
            let base = self.decoder.decode(&stock.path).await?;
            tracing::debug!(
                "Decoded stock {:?} ({}x{}) in {:?}",
                stock.path,
                base.width,
                base.height,
                decode_start.elapsed()
            );

            let chosen = self.picker.select(self.config.pairing, &plan.templates);
            for template in chosen {
                let pair_start = Instant::now();
                let overlay = self.decoder.decode(&template.path).await?;
                tracing::trace!("  Decode template: {:?}", pair_start.elapsed());

                let file_name = output_file_name(
                    &self.config.prefix,
                    &stock.stem,
                    &template.stem,
                    self.config.encoding,
                );

                let composite_start = Instant::now();
                let encoded = self
                    .compositor
                    .composite(&base.image, &overlay.image, &file_name)?;
                tracing::trace!("  Composite + encode: {:?}", composite_start.elapsed());

                let output_path = self.config.output_dir.join(&file_name);
                tokio::fs::write(&output_path, &encoded.bytes)
                    .await
                    .map_err(|e| PipelineError::Write {
                        path: output_path.clone(),
                        source: e,
                    })?;
                tracing::info!("Composited: {}", file_name);

                stats.written += 1;
                stats.total_bytes += encoded.bytes.len() as u64;

                let artifact = Artifact {
                    file_name,
                    output_path,
                    stock: stock.path.clone(),
                    template: template.path.clone(),
                    width: encoded.width,
                    height: encoded.height,
                    encoding: encoded.encoding.name().to_string(),
                    bytes: encoded.bytes.len() as u64,
                };
                on_written(&artifact)?;
            }
        }

        let elapsed = start.elapsed().as_secs_f64();
        stats.total_seconds = elapsed;
        stats.outputs_per_second = if elapsed > 0.0 {
            stats.written as f64 / elapsed
        } else {
            0.0
        };

        tracing::info!("Batch complete: {} output(s) written", stats.written);
        Ok(stats)
    }

    /// Plan and execute in one go.
    pub async fn run(&mut self) -> Result<BatchStats> {
        let plan = self.plan()?;
        self.execute(&plan, |_| Ok(())).await
    }
}
