//! Fitting a stock image onto a template's dimensions.

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, RgbaImage};

/// How the stock image is brought to the template's size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseTransform {
    /// Cut a target-sized window out of the middle of the base
    CenterCrop,
    /// Scale the whole base to the target size, ignoring aspect ratio
    Stretch { filter: FilterType },
}

impl BaseTransform {
    /// Produce a `width × height` raster from `base`.
    pub fn apply(&self, base: &DynamicImage, width: u32, height: u32) -> RgbaImage {
        match self {
            Self::CenterCrop => center_crop(base, width, height),
            Self::Stretch { filter } => stretch(base, width, height, *filter),
        }
    }
}

/// Offsets of the centered window, truncated toward zero.
///
/// Negative when the base is smaller than the window on that axis.
pub fn crop_offsets(base_width: u32, base_height: u32, width: u32, height: u32) -> (i64, i64) {
    let crop_x = (i64::from(base_width) - i64::from(width)) / 2;
    let crop_y = (i64::from(base_height) - i64::from(height)) / 2;
    (crop_x, crop_y)
}

/// Extract the centered `width × height` window of `base`.
///
/// Where the window extends past the base (base smaller than the target),
/// those pixels stay fully transparent and the base ends up centered.
pub fn center_crop(base: &DynamicImage, width: u32, height: u32) -> RgbaImage {
    let (base_width, base_height) = base.dimensions();
    let (crop_x, crop_y) = crop_offsets(base_width, base_height, width, height);

    let mut window = RgbaImage::new(width, height);
    // Placing the base at the negated offset maps (crop_x, crop_y) to the origin.
    imageops::replace(&mut window, base, -crop_x, -crop_y);
    window
}

/// Resize `base` to exactly `width × height`.
pub fn stretch(base: &DynamicImage, width: u32, height: u32, filter: FilterType) -> RgbaImage {
    imageops::resize(base, width, height, filter)
}
