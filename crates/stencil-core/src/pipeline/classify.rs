//! Cheap "is this an image?" check that reads only the header.

use std::path::Path;

/// Decides whether a file is a decodable raster image.
pub struct ImageClassifier;

impl ImageClassifier {
    /// Read the pixel dimensions from the image header, without decoding pixels.
    ///
    /// The format is guessed from the file content first and from the
    /// extension otherwise, so a misnamed file is still recognized.
    /// Returns `None` on any failure.
    pub fn dimensions(path: &Path) -> Option<(u32, u32)> {
        image::ImageReader::open(path)
            .ok()?
            .with_guessed_format()
            .ok()?
            .into_dimensions()
            .ok()
    }

    /// `true` iff the header parses and reports a positive width and height.
    ///
    /// Never fails: unreadable, corrupt, or non-image files map to `false`.
    pub fn is_image(path: &Path) -> bool {
        match Self::dimensions(path) {
            Some((width, height)) => width > 0 && height > 0,
            None => {
                tracing::trace!("Not an image: {:?}", path);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat};

    #[test]
    fn test_png_is_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.png");
        DynamicImage::new_rgba8(40, 30).save(&path).unwrap();

        assert!(ImageClassifier::is_image(&path));
        assert_eq!(ImageClassifier::dimensions(&path), Some((40, 30)));
    }

    #[test]
    fn test_jpeg_with_wrong_extension_is_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.dat");
        DynamicImage::new_rgb8(16, 8)
            .save_with_format(&path, ImageFormat::Jpeg)
            .unwrap();

        assert_eq!(ImageClassifier::dimensions(&path), Some((16, 8)));
    }

    #[test]
    fn test_text_file_is_not_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "shopping list: milk, eggs").unwrap();

        assert!(!ImageClassifier::is_image(&path));
    }

    #[test]
    fn test_text_file_with_image_extension_is_not_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.png");
        std::fs::write(&path, "definitely not a png").unwrap();

        assert!(!ImageClassifier::is_image(&path));
    }

    #[test]
    fn test_truncated_header_is_not_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cut.png");
        // PNG signature with no IHDR chunk
        std::fs::write(&path, [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]).unwrap();

        assert!(!ImageClassifier::is_image(&path));
    }

    #[test]
    fn test_missing_file_is_not_image() {
        assert!(!ImageClassifier::is_image(Path::new("/nonexistent/x.jpg")));
    }
}
