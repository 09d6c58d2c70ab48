//! # Logo Assets
//!
//! Resolves a logo path to an RGBA raster of a requested size.
//!
//! ## Formats
//!
//! | Extension | Variant | Handling |
//! |-----------|---------|----------|
//! | `.png` | [`LogoAsset::Raster`] | decoded with `image`, resized to the slot |
//! | `.svg` | [`LogoAsset::Vector`] | parsed with `usvg`, rasterized with `resvg` |
//!
//! The format is picked from the extension (case-insensitive) before the
//! file is touched, so an unsupported path fails without any I/O.
//!
//! ## Example
//!
//! ```no_run
//! use qrlogo::asset::load_logo;
//!
//! let logo = load_logo("logo.svg".as_ref(), 51)?;
//! assert_eq!(logo.dimensions(), (51, 51));
//! # Ok::<(), qrlogo::QrLogoError>(())
//! ```

pub mod raster;
pub mod vector;

use image::RgbaImage;
use resvg::usvg;
use std::path::Path;
use tracing::debug;

use crate::error::{QrLogoError, Result};

/// Logo container format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoFormat {
    /// PNG bitmap with alpha
    Raster,
    /// SVG path description
    Vector,
}

impl LogoFormat {
    /// Detect the format from `path`'s extension. Does not access the file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "png" => Ok(Self::Raster),
            "svg" => Ok(Self::Vector),
            "" => Err(QrLogoError::UnsupportedFormat(path.display().to_string())),
            other => Err(QrLogoError::UnsupportedFormat(format!(".{other}"))),
        }
    }
}

/// A decoded logo, before it is sized for the slot.
pub enum LogoAsset {
    Raster(RgbaImage),
    Vector(usvg::Tree),
}

impl LogoAsset {
    /// Detect the format, read the file and decode it.
    pub fn open(path: &Path) -> Result<Self> {
        let format = LogoFormat::from_path(path)?;

        let data = std::fs::read(path).map_err(|source| QrLogoError::AssetRead {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), ?format, bytes = data.len(), "read logo");

        match format {
            LogoFormat::Raster => raster::decode(path, &data).map(Self::Raster),
            LogoFormat::Vector => vector::parse(path, &data).map(Self::Vector),
        }
    }

    pub fn format(&self) -> LogoFormat {
        match self {
            Self::Raster(_) => LogoFormat::Raster,
            Self::Vector(_) => LogoFormat::Vector,
        }
    }

    /// Produce a `target`×`target` raster.
    pub fn rasterize(&self, target: u32) -> RgbaImage {
        match self {
            Self::Raster(img) => raster::fit(img, target),
            Self::Vector(tree) => vector::render(tree, target),
        }
    }
}

/// Open the logo at `path` and rasterize it to `target`×`target`.
pub fn load_logo(path: &Path, target: u32) -> Result<RgbaImage> {
    Ok(LogoAsset::open(path)?.rasterize(target))
}
