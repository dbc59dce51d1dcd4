//! Logging initialization and configuration.
//!
//! Uses the `tracing` ecosystem for structured logging with support for
//! both human-readable and JSON output formats.

use stencil_core::config::LoggingConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the logging subsystem.
///
/// # Arguments
///
/// * `default_level` - Level used when `RUST_LOG` is not set.
/// * `json_format` - If true, outputs structured JSON logs; otherwise pretty-printed.
///
/// # Notes
///
/// - Log output goes to stderr, alongside the progress bar
/// - The RUST_LOG environment variable can override the log level
pub fn init(default_level: &str, json_format: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(true),
            )
            .init();
    }
}

/// Initialize logging from the `[logging]` config section.
///
/// `--verbose` raises the level to at least debug; `--json-logs` forces JSON.
pub fn init_from_config(config: &LoggingConfig, verbose_override: bool, json_logs_override: bool) {
    let level = resolve_level(&config.level, verbose_override);
    let json_format = json_logs_override || config.format == "json";
    init(level, json_format);
}

/// Pick the effective default level from config and the verbose flag.
fn resolve_level(configured: &str, verbose: bool) -> &'static str {
    match configured.to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        _ if verbose => "debug",
        "error" => "error",
        "warn" | "warning" => "warn",
        _ => "info",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_to_debug() {
        assert_eq!(resolve_level("info", true), "debug");
        assert_eq!(resolve_level("warn", true), "debug");
    }

    #[test]
    fn verbose_never_lowers_trace() {
        assert_eq!(resolve_level("trace", true), "trace");
    }

    #[test]
    fn configured_level_used_without_verbose() {
        assert_eq!(resolve_level("warn", false), "warn");
        assert_eq!(resolve_level("ERROR", false), "error");
        assert_eq!(resolve_level("bogus", false), "info");
    }
}
