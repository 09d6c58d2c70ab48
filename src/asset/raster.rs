//! PNG logo decoding and slot fitting.

use image::{ImageFormat, RgbaImage, imageops::FilterType};
use std::path::Path;

use crate::error::{QrLogoError, Result};

/// Decode PNG bytes into straight-alpha RGBA.
pub fn decode(path: &Path, data: &[u8]) -> Result<RgbaImage> {
    image::load_from_memory_with_format(data, ImageFormat::Png)
        .map(|img| img.to_rgba8())
        .map_err(|e| QrLogoError::AssetParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Resize `img` to exactly `target`×`target`.
///
/// A logo that already matches is returned unchanged.
pub fn fit(img: &RgbaImage, target: u32) -> RgbaImage {
    if img.dimensions() == (target, target) {
        return img.clone();
    }
    if target == 0 || img.width() == 0 || img.height() == 0 {
        return RgbaImage::new(target, target);
    }
    image::imageops::resize(img, target, target, FilterType::Lanczos3)
}
