//! # Module Rasterizer
//!
//! Scales a [`ModuleMatrix`] to an exact S×S RGBA raster.
//!
//! ## Proportional Partitioning
//!
//! Pixel coordinate `p` belongs to module `floor(p * N / S)`. Every pixel
//! lands in exactly one module, so the S pixels of a row are covered once
//! with no gaps or overlaps, and every module gets a contiguous run of
//! either `floor(S/N)` or `ceil(S/N)` pixels.
//!
//! ```text
//! S = 7, N = 3
//!
//! pixel:   0   1   2   3   4   5   6
//! module:  0   0   0   1   1   2   2
//!          └── 3 ──┘   └─2─┘   └─2─┘
//! ```
//!
//! When S is a multiple of N every block is exactly S/N pixels. Modules are
//! never blended: QR decoders depend on sharp module edges.

use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::error::{QrLogoError, Result};
use crate::symbol::ModuleMatrix;

/// Opaque black, used for dark modules.
pub const DARK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Opaque white, used for light modules.
pub const LIGHT: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Module index covering pixel `p` of an `size`-pixel edge split into
/// `modules` blocks.
#[inline]
pub fn module_index(p: u32, size: u32, modules: u32) -> usize {
    (u64::from(p) * u64::from(modules) / u64::from(size)) as usize
}

/// Rasterize `matrix` to a `size`×`size` image.
///
/// Fails with [`QrLogoError::Scaling`] when `size` is smaller than the
/// module count.
pub fn rasterize(matrix: &ModuleMatrix, size: u32) -> Result<RgbaImage> {
    let modules = u32::try_from(matrix.width()).unwrap_or(u32::MAX);
    if modules == 0 || size < modules {
        return Err(QrLogoError::Scaling { size, modules });
    }

    // Rows and columns share the same partition
    let index: Vec<usize> = (0..size).map(|p| module_index(p, size, modules)).collect();

    let mut img = RgbaImage::new(size, size);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = if matrix.is_dark(index[x as usize], index[y as usize]) {
            DARK
        } else {
            LIGHT
        };
    }

    debug!(
        size,
        modules,
        exact = size % modules == 0,
        "rasterized module matrix"
    );

    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::{ErrorCorrection, QrEncoder, SymbolEncoder};

    fn checkerboard(width: usize) -> ModuleMatrix {
        let modules = (0..width * width)
            .map(|i| (i % width + i / width) % 2 == 0)
            .collect();
        ModuleMatrix::new(width, modules).unwrap()
    }

    #[test]
    fn test_exact_multiple_blocks_are_sharp() {
        let matrix = QrEncoder.encode("HELLO", ErrorCorrection::H).unwrap();
        let n = matrix.width() as u32;
        let scale = 4;
        let img = rasterize(&matrix, n * scale).unwrap();
        assert_eq!(img.dimensions(), (n * scale, n * scale));

        for (x, y, pixel) in img.enumerate_pixels() {
            let dark = matrix.is_dark((x / scale) as usize, (y / scale) as usize);
            assert_eq!(*pixel, if dark { DARK } else { LIGHT }, "pixel ({x}, {y})");
        }
    }

    #[test]
    fn test_partition_covers_every_pixel_once() {
        for (size, modules) in [(7, 3), (256, 29), (300, 29), (29, 29), (1000, 177)] {
            let mut counts = vec![0u32; modules as usize];
            let mut last = 0;
            for p in 0..size {
                let m = module_index(p, size, modules);
                // Blocks are contiguous and in order
                assert!(m == last || m == last + 1, "gap at pixel {p} for {size}/{modules}");
                last = m;
                counts[m] += 1;
            }
            assert_eq!(last, modules as usize - 1);
            assert_eq!(counts.iter().sum::<u32>(), size);
            let lo = size / modules;
            let hi = size.div_ceil(modules);
            assert!(counts.iter().all(|&c| c == lo || c == hi), "{counts:?}");
        }
    }

    #[test]
    fn test_non_multiple_size() {
        let matrix = checkerboard(3);
        let img = rasterize(&matrix, 7).unwrap();
        assert_eq!(img.dimensions(), (7, 7));
        // Module (0, 0) is dark and covers pixels 0..3
        assert_eq!(*img.get_pixel(2, 2), DARK);
        // Module (1, 0) is light and covers pixels 3..5
        assert_eq!(*img.get_pixel(3, 0), LIGHT);
        assert_eq!(*img.get_pixel(4, 0), LIGHT);
        assert_eq!(*img.get_pixel(5, 0), DARK);
    }

    #[test]
    fn test_only_black_and_white() {
        let matrix = QrEncoder.encode("https://example.com", ErrorCorrection::H).unwrap();
        let img = rasterize(&matrix, 256).unwrap();
        assert!(img.pixels().all(|p| *p == DARK || *p == LIGHT));
    }

    #[test]
    fn test_size_below_module_count() {
        let matrix = QrEncoder.encode("https://example.com", ErrorCorrection::H).unwrap();
        let err = rasterize(&matrix, 10).unwrap_err();
        assert!(matches!(
            err,
            QrLogoError::Scaling {
                size: 10,
                modules: 29
            }
        ));
    }

    #[test]
    fn test_zero_size() {
        let err = rasterize(&checkerboard(3), 0).unwrap_err();
        assert!(matches!(err, QrLogoError::Scaling { size: 0, .. }));
    }
}
