//! # Logo Compositor
//!
//! Draws a logo raster into the centered slot of a QR raster using
//! Porter-Duff "over" on straight alpha. Opaque logo pixels replace the
//! module underneath; transparent ones leave it untouched.
//!
//! ## Slot Geometry
//!
//! ```text
//! S = 256
//! ┌──────────────────────────────┐
//! │                              │
//! │        (102,102)             │
//! │            ┌─────┐           │
//! │            │ 51  │           │
//! │            └─────┘           │
//! │                              │
//! └──────────────────────────────┘
//! ```
//!
//! The slot side is `S / 5` and its origin is `(S - side) / 2` on both axes.
//! Integer division biases odd remainders one pixel up-left.
//!
//! No decodability check is made: the logo relies on error-correction
//! headroom alone.

use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::config::logo_size;

/// Square region of the QR raster that receives the logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoSlot {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

impl LogoSlot {
    /// Slot for a square symbol with edge `size` pixels.
    pub fn for_size(size: u32) -> Self {
        let side = logo_size(size);
        let offset = (size - side) / 2;
        Self {
            x: offset,
            y: offset,
            size: side,
        }
    }

    /// Whether pixel `(x, y)` of the QR raster lies inside the slot.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.x + self.size && y >= self.y && y < self.y + self.size
    }
}

/// Composite `logo` over the centered slot of `qr`, returning a new image.
///
/// The logo is read from its own origin. Only the top-left
/// `slot.size × slot.size` region of an oversized logo is drawn, and an
/// undersized logo is clamped to its own bounds instead of over-reading.
pub fn composite(qr: &RgbaImage, logo: &RgbaImage) -> RgbaImage {
    let mut out = qr.clone();
    let slot = LogoSlot::for_size(qr.width().min(qr.height()));

    let w = slot.size.min(logo.width());
    let h = slot.size.min(logo.height());
    if (w, h) != (slot.size, slot.size) {
        debug!(
            logo_width = logo.width(),
            logo_height = logo.height(),
            slot = slot.size,
            "logo does not match slot; clamping"
        );
    }

    for dy in 0..h {
        for dx in 0..w {
            let dst = out.get_pixel_mut(slot.x + dx, slot.y + dy);
            *dst = over(*dst, *logo.get_pixel(dx, dy));
        }
    }

    debug!(x = slot.x, y = slot.y, size = slot.size, "composited logo");

    out
}

/// Porter-Duff "over" on straight-alpha pixels, in integer arithmetic.
///
/// Everything is scaled by 255 so an opaque destination stays exactly
/// opaque and an opaque source replaces the destination exactly.
pub fn over(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let sa = u32::from(src[3]);
    let da = u32::from(dst[3]);

    // Alpha times 255: sa * 255 + da * (255 - sa)
    let dst_weight = da * (255 - sa);
    let alpha = sa * 255 + dst_weight;
    if alpha == 0 {
        return Rgba([0, 0, 0, 0]);
    }

    let mut out = [0u8; 4];
    for i in 0..3 {
        let c = u32::from(src[i]) * sa * 255 + u32::from(dst[i]) * dst_weight;
        out[i] = ((c + alpha / 2) / alpha) as u8;
    }
    out[3] = ((alpha + 127) / 255) as u8;
    Rgba(out)
}
