//! Input folder listing with per-role filtering.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::FilterKind;
use crate::error::{PipelineError, PipelineResult};

use super::classify::ImageClassifier;

/// How a file qualifies as input for one role (stock or template).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFilter {
    /// Probe the header; keep files with positive dimensions
    Header,
    /// Keep files whose name ends with `.<ext>` for one of the listed extensions
    Extension {
        extensions: Vec<String>,
        ignore_case: bool,
    },
}

impl InputFilter {
    /// Build a filter from its config representation.
    pub fn from_config(kind: FilterKind, extensions: &[String], ignore_case: bool) -> Self {
        match kind {
            FilterKind::Header => Self::Header,
            FilterKind::Extension => Self::Extension {
                extensions: extensions
                    .iter()
                    .map(|ext| {
                        let ext = ext.trim_start_matches('.');
                        if ignore_case {
                            ext.to_lowercase()
                        } else {
                            ext.to_string()
                        }
                    })
                    .collect(),
                ignore_case,
            },
        }
    }

    /// Check whether a file passes this filter.
    pub fn accepts(&self, path: &Path) -> bool {
        match self {
            Self::Header => ImageClassifier::is_image(path),
            Self::Extension {
                extensions,
                ignore_case,
            } => {
                let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
                    return false;
                };
                let name = if *ignore_case {
                    name.to_lowercase()
                } else {
                    name.into_owned()
                };
                extensions
                    .iter()
                    .any(|ext| name.ends_with(&format!(".{ext}")))
            }
        }
    }
}

/// Information about a discovered input file.
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    /// Full path to the file
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
    /// File name without its last extension, used for output naming
    pub stem: String,
}

/// Lists input folders.
pub struct FileDiscovery;

impl FileDiscovery {
    /// List the files directly inside `dir` that pass `filter`.
    ///
    /// Subfolders are not descended into. Results are sorted by path.
    pub fn list(dir: &Path, filter: &InputFilter) -> PipelineResult<Vec<DiscoveredFile>> {
        if !dir.is_dir() {
            return Err(PipelineError::DirectoryNotFound(dir.to_path_buf()));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let entry_path = entry.path();
            if !entry.file_type().is_file() || !filter.accepts(entry_path) {
                continue;
            }
            if let Ok(meta) = entry.metadata() {
                files.push(DiscoveredFile {
                    path: entry_path.to_path_buf(),
                    size: meta.len(),
                    stem: file_stem(entry_path),
                });
            }
        }

        // Sort by path for deterministic ordering
        files.sort_by(|a, b| a.path.cmp(&b.path));
        tracing::debug!("Listed {} file(s) in {:?}", files.len(), dir);
        Ok(files)
    }

    /// Get total size of all discovered files.
    pub fn total_size(files: &[DiscoveredFile]) -> u64 {
        files.iter().map(|f| f.size).sum()
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
