//! # Generation Pipeline
//!
//! ```text
//! payload ─→ SymbolEncoder ─→ ModuleMatrix ─→ rasterize ─→ QR raster
//!                                                              │
//!                       logo? ─→ load_logo(S/5) ─→ composite ←─┘
//!                                                      │
//!                                                  write_png
//! ```
//!
//! Each stage runs to completion before the next starts, and the first
//! error ends the run. The sink is only reached once the whole raster has
//! been built, so a failed run never leaves a partial output file behind.

use image::RgbaImage;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::asset::load_logo;
use crate::config::{DEFAULT_SIZE, ERROR_CORRECTION, logo_size};
use crate::error::{QrLogoError, Result};
use crate::render::{composite, rasterize};
use crate::sink::write_png;
use crate::symbol::{QrEncoder, SymbolEncoder};

/// Everything needed to produce one QR image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrOptions {
    /// Text to encode, usually a URI
    pub payload: String,
    /// PNG or SVG drawn over the center of the symbol
    pub logo: Option<PathBuf>,
    /// Edge length of the output in pixels
    pub size: u32,
    /// Light modules added around the symbol before scaling
    pub quiet_zone: usize,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            payload: String::new(),
            logo: None,
            size: DEFAULT_SIZE,
            quiet_zone: 0,
        }
    }
}

impl QrOptions {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            ..Default::default()
        }
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn logo(mut self, path: impl Into<PathBuf>) -> Self {
        self.logo = Some(path.into());
        self
    }

    pub fn quiet_zone(mut self, modules: usize) -> Self {
        self.quiet_zone = modules;
        self
    }
}

/// Build the final raster with the default `qrcode`-backed encoder.
pub fn generate(options: &QrOptions) -> Result<RgbaImage> {
    generate_with(&QrEncoder, options)
}

/// Build the final raster with any [`SymbolEncoder`].
pub fn generate_with<E: SymbolEncoder + ?Sized>(
    encoder: &E,
    options: &QrOptions,
) -> Result<RgbaImage> {
    let symbol = encoder.encode(&options.payload, ERROR_CORRECTION)?;

    // Reject an oversized quiet zone before allocating the padded grid
    let scaling = |modules: Option<usize>| QrLogoError::Scaling {
        size: options.size,
        modules: modules
            .and_then(|m| u32::try_from(m).ok())
            .unwrap_or(u32::MAX),
    };
    let modules = symbol.padded_width(options.quiet_zone);
    if modules.is_none_or(|m| m > options.size as usize) {
        return Err(scaling(modules));
    }
    let matrix = symbol
        .with_quiet_zone(options.quiet_zone)
        .ok_or_else(|| scaling(modules))?;

    let qr = rasterize(&matrix, options.size)?;

    let Some(logo_path) = options.logo.as_deref() else {
        return Ok(qr);
    };

    let target = logo_size(options.size);
    debug!(path = %logo_path.display(), target, "loading logo");
    let logo = load_logo(logo_path, target)?;

    Ok(composite(&qr, &logo))
}

/// Generate the image and write it to `output`.
pub fn run(options: &QrOptions, output: &Path) -> Result<()> {
    let img = generate(options)?;
    write_png(&img, output)?;
    info!(path = %output.display(), size = options.size, "saved QR code");
    Ok(())
}
