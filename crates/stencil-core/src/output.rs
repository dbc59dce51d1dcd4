//! Run manifest: a JSON or JSON Lines record of every written output.

use std::io::{self, Write};

use crate::types::Artifact;

/// Manifest format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    /// One pretty-printed JSON array, written on `finish`
    Json,
    /// One JSON object per line, written as artifacts arrive
    JsonLines,
}

impl ManifestFormat {
    /// Parse format from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "jsonl" | "jsonlines" | "ndjson" => Some(Self::JsonLines),
            _ => None,
        }
    }
}

/// Records artifacts to a writer.
///
/// JSON Lines output is streamed, so a run that aborts part-way still leaves
/// a manifest of everything written before the failure.
pub struct ManifestWriter<W: Write> {
    writer: W,
    format: ManifestFormat,
    pending: Vec<Artifact>,
    records: usize,
}

impl<W: Write> ManifestWriter<W> {
    pub fn new(writer: W, format: ManifestFormat) -> Self {
        Self {
            writer,
            format,
            pending: Vec::new(),
            records: 0,
        }
    }

    /// Record one written artifact.
    pub fn record(&mut self, artifact: &Artifact) -> io::Result<()> {
        match self.format {
            ManifestFormat::Json => self.pending.push(artifact.clone()),
            ManifestFormat::JsonLines => {
                serde_json::to_writer(&mut self.writer, artifact).map_err(io::Error::other)?;
                writeln!(self.writer)?;
            }
        }
        self.records += 1;
        Ok(())
    }

    /// Number of artifacts recorded so far.
    pub fn records(&self) -> usize {
        self.records
    }

    /// Write any buffered records and flush.
    pub fn finish(mut self) -> io::Result<W> {
        if self.format == ManifestFormat::Json {
            serde_json::to_writer_pretty(&mut self.writer, &self.pending)
                .map_err(io::Error::other)?;
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn artifact(name: &str) -> Artifact {
        Artifact {
            file_name: name.to_string(),
            output_path: PathBuf::from("hasil").join(name),
            stock: PathBuf::from("stock/a.jpg"),
            template: PathBuf::from("template/t1.png"),
            width: 400,
            height: 300,
            encoding: "png".to_string(),
            bytes: 10,
        }
    }

    #[test]
    fn test_jsonl_streams_one_line_per_record() {
        let mut buffer = Vec::new();
        let mut writer = ManifestWriter::new(&mut buffer, ManifestFormat::JsonLines);
        writer.record(&artifact("crop_a_t1.png")).unwrap();
        writer.record(&artifact("crop_a_t2.png")).unwrap();
        assert_eq!(writer.records(), 2);
        writer.finish().unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.trim().split('\n').collect();
        assert_eq!(lines.len(), 2);
        let first: Artifact = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.file_name, "crop_a_t1.png");
    }

    #[test]
    fn test_json_writes_array_on_finish() {
        let mut buffer = Vec::new();
        let mut writer = ManifestWriter::new(&mut buffer, ManifestFormat::Json);
        writer.record(&artifact("a_t1.jpg")).unwrap();
        writer.finish().unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with('['));
        assert!(output.trim().ends_with(']'));
        let parsed: Vec<Artifact> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn test_empty_json_manifest_is_empty_array() {
        let mut buffer = Vec::new();
        ManifestWriter::new(&mut buffer, ManifestFormat::Json)
            .finish()
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().trim(), "[]");
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(ManifestFormat::parse("json"), Some(ManifestFormat::Json));
        assert_eq!(ManifestFormat::parse("jsonl"), Some(ManifestFormat::JsonLines));
        assert_eq!(ManifestFormat::parse("NDJSON"), Some(ManifestFormat::JsonLines));
        assert_eq!(ManifestFormat::parse("csv"), None);
    }
}
