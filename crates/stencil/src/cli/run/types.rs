//! CLI enum types for the pipeline commands.

use clap::ValueEnum;
use stencil_core::ManifestFormat as CoreManifestFormat;

/// Supported manifest formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ManifestFormat {
    /// Single JSON array, written when the run ends
    #[default]
    Json,
    /// One JSON object per line, written as files land
    Jsonl,
}

impl std::fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestFormat::Json => write!(f, "json"),
            ManifestFormat::Jsonl => write!(f, "jsonl"),
        }
    }
}

impl From<ManifestFormat> for CoreManifestFormat {
    fn from(format: ManifestFormat) -> Self {
        match format {
            ManifestFormat::Json => CoreManifestFormat::Json,
            ManifestFormat::Jsonl => CoreManifestFormat::JsonLines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trips_through_core_parser() {
        for format in [ManifestFormat::Json, ManifestFormat::Jsonl] {
            let core = CoreManifestFormat::parse(&format.to_string());
            assert_eq!(core, Some(CoreManifestFormat::from(format)));
        }
    }
}
