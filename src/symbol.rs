//! # Symbol Encoder
//!
//! Turns a payload into a [`ModuleMatrix`]. The QR math itself (segment
//! modes, Reed-Solomon, placement, masking) is delegated to the `qrcode`
//! crate behind the [`SymbolEncoder`] trait, so the rest of the pipeline only
//! ever sees a square grid of dark/light modules.
//!
//! ## Example
//!
//! ```
//! use qrlogo::symbol::{ErrorCorrection, QrEncoder, SymbolEncoder};
//!
//! let matrix = QrEncoder.encode("https://example.com", ErrorCorrection::H).unwrap();
//! assert_eq!(matrix.width(), 29); // version 3
//! ```

use qrcode::{EcLevel, QrCode};
use tracing::debug;

use crate::error::{QrLogoError, Result};

/// # QR Error Correction Level
///
/// | Level | Recovery | Best For |
/// |-------|----------|----------|
/// | L | ~7% | Clean environments |
/// | M | ~15% | General use |
/// | Q | ~25% | Industrial use |
/// | H | ~30% | Logo overlays |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCorrection {
    L,
    M,
    Q,
    #[default]
    H,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::L => EcLevel::L,
            ErrorCorrection::M => EcLevel::M,
            ErrorCorrection::Q => EcLevel::Q,
            ErrorCorrection::H => EcLevel::H,
        }
    }
}

/// Square grid of modules, `true` = dark. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    width: usize,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// Build a matrix from row-major modules.
    ///
    /// Returns `None` unless `modules.len() == width * width`.
    pub fn new(width: usize, modules: Vec<bool>) -> Option<Self> {
        (modules.len() == width * width).then_some(Self { width, modules })
    }

    /// Side length in modules.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the module at column `x`, row `y` is dark.
    #[inline]
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.modules[y * self.width + x]
    }

    /// Row-major module slice.
    pub fn modules(&self) -> &[bool] {
        &self.modules
    }

    /// Side length after adding `border` modules on every side, or `None`
    /// on overflow.
    pub fn padded_width(&self, border: usize) -> Option<usize> {
        border.checked_mul(2)?.checked_add(self.width)
    }

    /// Surround the symbol with `border` light modules on every side.
    ///
    /// Returns `None` when the padded grid would not be addressable.
    pub fn with_quiet_zone(&self, border: usize) -> Option<Self> {
        if border == 0 {
            return Some(self.clone());
        }

        let width = self.padded_width(border)?;
        let len = width.checked_mul(width)?;
        let mut modules = vec![false; len];
        for y in 0..self.width {
            let src = &self.modules[y * self.width..(y + 1) * self.width];
            let start = (y + border) * width + border;
            modules[start..start + self.width].copy_from_slice(src);
        }

        Some(Self { width, modules })
    }
}

/// Capability to encode a payload at a given error-correction level.
///
/// The version is chosen by the implementation to fit the payload.
pub trait SymbolEncoder {
    fn encode(&self, payload: &str, level: ErrorCorrection) -> Result<ModuleMatrix>;
}

/// [`SymbolEncoder`] backed by the `qrcode` crate (QR Model 2, versions 1-40).
#[derive(Debug, Clone, Copy, Default)]
pub struct QrEncoder;

impl SymbolEncoder for QrEncoder {
    fn encode(&self, payload: &str, level: ErrorCorrection) -> Result<ModuleMatrix> {
        if payload.is_empty() {
            return Err(QrLogoError::Encoding("payload is empty".to_string()));
        }

        let code = QrCode::with_error_correction_level(payload, level.into())
            .map_err(|e| QrLogoError::Encoding(e.to_string()))?;

        let width = code.width();
        let modules = code
            .to_colors()
            .into_iter()
            .map(|c| c == qrcode::Color::Dark)
            .collect();

        debug!(
            version = ?code.version(),
            modules = width,
            ?level,
            "encoded payload"
        );

        // to_colors() is always width * width
        Ok(ModuleMatrix { width, modules })
    }
}
