//! Drawing a template over a transformed stock image and encoding the result.

use image::codecs::jpeg::JpegEncoder;
use image::{imageops, DynamicImage, GenericImageView, ImageFormat, Rgba, RgbImage, RgbaImage};
use serde::Serialize;
use std::io::Cursor;

use crate::error::PipelineError;

use super::transform::BaseTransform;

/// Encoding applied to composited canvases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum OutputEncoding {
    /// Lossless RGBA PNG
    Png,
    /// RGB JPEG; transparent areas flatten to black
    Jpeg { quality: u8 },
}

impl OutputEncoding {
    /// File extension for outputs in this encoding.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg { .. } => "jpg",
        }
    }

    /// Short name for logs and manifests.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg { .. } => "jpeg",
        }
    }
}

/// An encoded composite, ready to be written.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub encoding: OutputEncoding,
}

/// Combines a stock image with a template overlay.
pub struct Compositor {
    transform: BaseTransform,
    encoding: OutputEncoding,
}

impl Compositor {
    /// Create a compositor with the given base transform and output encoding.
    pub fn new(transform: BaseTransform, encoding: OutputEncoding) -> Self {
        Self {
            transform,
            encoding,
        }
    }

    /// Build the composited canvas, sized exactly to `overlay`.
    ///
    /// The transformed base replaces the canvas contents, then the overlay is
    /// alpha-blended on top at the origin without scaling.
    pub fn compose(&self, base: &DynamicImage, overlay: &DynamicImage) -> RgbaImage {
        let (width, height) = overlay.dimensions();
        let mut canvas = RgbaImage::new(width, height);

        let fitted = self.transform.apply(base, width, height);
        imageops::replace(&mut canvas, &fitted, 0, 0);
        imageops::overlay(&mut canvas, overlay, 0, 0);

        canvas
    }

    /// Compose and encode. `name` is only used for error context.
    pub fn composite(
        &self,
        base: &DynamicImage,
        overlay: &DynamicImage,
        name: &str,
    ) -> Result<EncodedImage, PipelineError> {
        let canvas = self.compose(base, overlay);
        let (width, height) = canvas.dimensions();
        let bytes = self.encode(canvas, name)?;

        Ok(EncodedImage {
            bytes,
            width,
            height,
            encoding: self.encoding,
        })
    }

    /// Encode a canvas with the configured encoding.
    pub fn encode(&self, canvas: RgbaImage, name: &str) -> Result<Vec<u8>, PipelineError> {
        let encode_err = |e: image::ImageError| PipelineError::Encode {
            name: name.to_string(),
            message: e.to_string(),
        };

        let mut buffer = Cursor::new(Vec::new());
        match self.encoding {
            OutputEncoding::Png => {
                DynamicImage::ImageRgba8(canvas)
                    .write_to(&mut buffer, ImageFormat::Png)
                    .map_err(encode_err)?;
            }
            OutputEncoding::Jpeg { quality } => {
                let rgb = DynamicImage::ImageRgb8(flatten_on_black(&canvas));
                let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
                rgb.write_with_encoder(encoder).map_err(encode_err)?;
            }
        }

        Ok(buffer.into_inner())
    }

    pub fn encoding(&self) -> OutputEncoding {
        self.encoding
    }
}

/// Blend `canvas` over opaque black and drop the alpha channel.
///
/// JPEG has no alpha, so transparent areas come out black and partial
/// coverage is darkened in proportion to its alpha.
pub fn flatten_on_black(canvas: &RgbaImage) -> RgbImage {
    let (width, height) = canvas.dimensions();
    let mut backdrop = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]));
    imageops::overlay(&mut backdrop, canvas, 0, 0);
    DynamicImage::ImageRgba8(backdrop).to_rgb8()
}
