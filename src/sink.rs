//! # PNG Sink
//!
//! Serializes the final raster as an 8-bit RGBA PNG. The file is created or
//! truncated, and the handle is dropped (closed) on every path out of
//! [`write_png`].

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

use crate::error::{QrLogoError, Result};

/// Write `img` to `path` as PNG.
pub fn write_png(img: &RgbaImage, path: &Path) -> Result<()> {
    let write_err = |message: String| QrLogoError::Write {
        path: path.to_path_buf(),
        message,
    };

    let file = File::create(path).map_err(|e| write_err(e.to_string()))?;
    let mut writer = BufWriter::new(file);

    PngEncoder::new(&mut writer)
        .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgba8)
        .map_err(|e| write_err(e.to_string()))?;

    writer.flush().map_err(|e| write_err(e.to_string()))?;

    debug!(path = %path.display(), width = img.width(), height = img.height(), "wrote png");

    Ok(())
}
