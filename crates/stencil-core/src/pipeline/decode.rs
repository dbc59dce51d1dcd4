//! Image decoding with format detection and size limits.

use image::{DynamicImage, GenericImageView, ImageFormat};
use std::path::Path;

use crate::config::LimitsConfig;
use crate::error::PipelineError;

/// Image decoder with configurable limits.
pub struct ImageDecoder {
    limits: LimitsConfig,
}

/// Result of decoding an image.
pub struct DecodedImage {
    /// The decoded image data
    pub image: DynamicImage,
    /// Detected image format
    pub format: ImageFormat,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Original file size in bytes
    pub file_size: u64,
}

impl ImageDecoder {
    /// Create a new decoder with the given limits.
    pub fn new(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    /// Read and decode an image file.
    ///
    /// The pixel decode runs on the blocking pool so the driver's runtime
    /// stays responsive while large files are processed.
    pub async fn decode(&self, path: &Path) -> Result<DecodedImage, PipelineError> {
        let metadata = match tokio::fs::metadata(path).await {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PipelineError::FileNotFound(path.to_path_buf()));
            }
            Err(e) => {
                return Err(PipelineError::Decode {
                    path: path.to_path_buf(),
                    message: format!("Cannot read metadata: {}", e),
                });
            }
        };

        let max_bytes = self.limits.max_file_size_mb.saturating_mul(1024 * 1024);
        if metadata.len() > max_bytes {
            return Err(PipelineError::FileTooLarge {
                path: path.to_path_buf(),
                size_mb: metadata.len() / (1024 * 1024),
                max_mb: self.limits.max_file_size_mb,
            });
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| PipelineError::Decode {
                path: path.to_path_buf(),
                message: format!("Cannot read file: {}", e),
            })?;

        self.decode_from_bytes(bytes, path).await
    }

    /// Decode an image from an in-memory byte buffer with validation.
    pub async fn decode_from_bytes(
        &self,
        bytes: Vec<u8>,
        path: &Path,
    ) -> Result<DecodedImage, PipelineError> {
        let path_owned = path.to_path_buf();
        let decoded =
            tokio::task::spawn_blocking(move || Self::decode_bytes_sync(bytes, &path_owned))
                .await
                .map_err(|e| PipelineError::Decode {
                    path: path.to_path_buf(),
                    message: format!("Task join error: {}", e),
                })??;

        if decoded.width > self.limits.max_image_dimension
            || decoded.height > self.limits.max_image_dimension
        {
            return Err(PipelineError::ImageTooLarge {
                path: path.to_path_buf(),
                width: decoded.width,
                height: decoded.height,
                max_dim: self.limits.max_image_dimension,
            });
        }
        Ok(decoded)
    }

    /// Synchronous decode from bytes (runs in spawn_blocking).
    fn decode_bytes_sync(bytes: Vec<u8>, path: &Path) -> Result<DecodedImage, PipelineError> {
        use std::io::Cursor;

        let file_size = bytes.len() as u64;
        let cursor = Cursor::new(bytes);
        let reader = image::ImageReader::new(cursor)
            .with_guessed_format()
            .map_err(|e| PipelineError::Decode {
                path: path.to_path_buf(),
                message: format!("Cannot detect image format: {}", e),
            })?;
        let format = match reader.format() {
            Some(f) => f,
            None => ImageFormat::from_path(path).map_err(|_| PipelineError::UnsupportedFormat {
                path: path.to_path_buf(),
                format: path
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or("unknown")
                    .to_string(),
            })?,
        };
        let mut reader = reader;
        reader.set_format(format);
        let image = reader.decode().map_err(|e| PipelineError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let (width, height) = image.dimensions();
        Ok(DecodedImage {
            image,
            format,
            width,
            height,
            file_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
        let path = dir.join(name);
        DynamicImage::new_rgba8(width, height).save(&path).unwrap();
        path
    }

    #[tokio::test]
    async fn test_decode_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "t1.png", 40, 30);

        let decoder = ImageDecoder::new(LimitsConfig::default());
        let decoded = decoder.decode(&path).await.unwrap();
        assert_eq!((decoded.width, decoded.height), (40, 30));
        assert_eq!(decoded.format, ImageFormat::Png);
        assert!(decoded.file_size > 0);
    }

    #[test]
    fn test_format_detected_by_content() {
        let dir = tempfile::tempdir().unwrap();
        let misnamed = dir.path().join("test_misnamed.jpg");
        DynamicImage::new_rgba8(4, 4)
            .save_with_format(&misnamed, ImageFormat::Png)
            .unwrap();

        let bytes = std::fs::read(&misnamed).unwrap();
        let result = ImageDecoder::decode_bytes_sync(bytes, &misnamed).unwrap();
        assert_eq!(result.format, ImageFormat::Png);
    }

    #[tokio::test]
    async fn test_decode_missing_file() {
        let decoder = ImageDecoder::new(LimitsConfig::default());
        let err = decoder
            .decode(Path::new("/nonexistent/stock/a.jpg"))
            .await
            .err()
            .unwrap();
        assert!(matches!(err, PipelineError::FileNotFound(_)));
    }

    #[tokio::test]
    async fn test_decode_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, "not a png at all").unwrap();

        let decoder = ImageDecoder::new(LimitsConfig::default());
        let err = decoder.decode(&path).await.err().unwrap();
        assert!(matches!(err, PipelineError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_decode_with_huge_file_size_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "t1.png", 8, 8);

        let limits = LimitsConfig {
            max_file_size_mb: u64::MAX,
            ..LimitsConfig::default()
        };
        let decoded = ImageDecoder::new(limits).decode(&path).await.unwrap();
        assert_eq!((decoded.width, decoded.height), (8, 8));
    }

    #[tokio::test]
    async fn test_decode_rejects_oversized_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "wide.png", 64, 8);

        let limits = LimitsConfig {
            max_image_dimension: 32,
            ..LimitsConfig::default()
        };
        let err = ImageDecoder::new(limits).decode(&path).await.err().unwrap();
        assert!(matches!(
            err,
            PipelineError::ImageTooLarge {
                width: 64,
                height: 8,
                max_dim: 32,
                ..
            }
        ));
    }
}
