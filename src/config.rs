//! # Generator Configuration
//!
//! Defaults and fixed policy shared by the CLI and the pipeline.
//!
//! ## Logo Slot
//!
//! ```text
//! ├──── (S - S/5) / 2 ────┼── S/5 ──┼──── remainder ────┤
//! │        QR modules     │  logo   │     QR modules    │
//! ```
//!
//! For S = 256 the slot is 51px wide and starts at pixel 102.

use crate::symbol::ErrorCorrection;

/// Edge length in pixels when the caller does not pick one.
pub const DEFAULT_SIZE: u32 = 256;

/// Output file name when the caller does not pick one.
pub const DEFAULT_OUTPUT: &str = "qrcode.png";

/// Largest quiet zone the CLI accepts, in modules. ISO 18004 asks for 4.
pub const MAX_QUIET_ZONE: u32 = 64;

/// The logo occupies `1 / LOGO_DIVISOR` of the symbol's edge (20%).
pub const LOGO_DIVISOR: u32 = 5;

/// Error correction is always H: the logo occludes modules and only the
/// highest level reliably survives that.
pub const ERROR_CORRECTION: ErrorCorrection = ErrorCorrection::H;

/// Edge length of the logo slot for a symbol of `size` pixels.
///
/// ```
/// use qrlogo::config::logo_size;
///
/// assert_eq!(logo_size(256), 51);
/// assert_eq!(logo_size(300), 60);
/// assert_eq!(logo_size(4), 0);
/// ```
#[inline]
pub fn logo_size(size: u32) -> u32 {
    size / LOGO_DIVISOR
}
