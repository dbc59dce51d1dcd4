//! Stencil CLI - batch-composite stock images with transparent template overlays.
//!
//! Every stock image is fitted to each template's size and the template is
//! drawn on top. Three pipelines are available:
//!
//! ```bash
//! # Every stock × every template, center-cropped → hasil/crop_<stock>_<template>.png
//! stencil crop
//!
//! # Every stock × every template, stretched → hasil/resize_<stock>_<template>.png
//! stencil resize
//!
//! # Every stock × one random template → hasil/<stock>_<template>.jpg
//! stencil random --seed 42
//!
//! # Custom folders and a JSONL manifest of written files
//! stencil crop --stock ./in --template ./frames --output ./out --manifest out.jsonl --manifest-format jsonl
//!
//! # View configuration
//! stencil config show
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use stencil_core::PipelineKind;

mod cli;
mod logging;

/// Stencil - batch-composite stock images with transparent template overlays.
#[derive(Parser, Debug)]
#[command(name = "stencil")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "STENCIL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Composite every stock image with every template, center-cropping the stock
    Crop(cli::run::RunArgs),

    /// Composite every stock image with every template, stretching the stock
    Resize(cli::run::RunArgs),

    /// Composite every stock image with one random template, as JPEG
    Random(cli::run::RunArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load the config once. Logging falls back to defaults if it is broken;
    // the load error itself surfaces from the command that needs the config.
    let config_path = cli.config.as_deref();
    let loaded = cli::load_config(config_path);
    let logging_config = loaded
        .as_ref()
        .map(|config| config.logging.clone())
        .unwrap_or_default();
    logging::init_from_config(&logging_config, cli.verbose, cli.json_logs);

    tracing::debug!("Stencil v{}", stencil_core::VERSION);

    // Dispatch to the appropriate command handler
    match cli.command {
        Commands::Crop(args) => cli::run::execute(PipelineKind::Crop, args, loaded?).await,
        Commands::Resize(args) => cli::run::execute(PipelineKind::Resize, args, loaded?).await,
        Commands::Random(args) => cli::run::execute(PipelineKind::Random, args, loaded?).await,
        Commands::Config(args) => cli::config::execute(args, config_path, loaded).await,
    }
}
