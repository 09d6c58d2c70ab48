//! # SVG Logo Rasterization
//!
//! The SVG is parsed into a `usvg::Tree` and rendered by `resvg`'s
//! antialiasing scan converter. The document's viewport is stretched onto
//! `(0, 0)-(target, target)` with independent x/y scale factors, so the
//! result always fills the slot exactly.
//!
//! `tiny-skia` pixmaps are premultiplied; pixels are demultiplied on the way
//! out so every raster in the pipeline carries straight alpha.

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};
use std::path::Path;
use tracing::debug;

use crate::error::{QrLogoError, Result};

/// Parse SVG bytes.
pub fn parse(path: &Path, data: &[u8]) -> Result<Tree> {
    Tree::from_data(data, &Options::default()).map_err(|e| QrLogoError::AssetParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Rasterize `tree` into a `target`×`target` straight-alpha image.
pub fn render(tree: &Tree, target: u32) -> RgbaImage {
    // Pixmap::new rejects zero-sized surfaces
    let Some(mut pixmap) = Pixmap::new(target, target) else {
        return RgbaImage::new(target, target);
    };

    let size = tree.size();
    let transform = Transform::from_scale(
        target as f32 / size.width(),
        target as f32 / size.height(),
    );
    resvg::render(tree, transform, &mut pixmap.as_mut());

    debug!(
        width = size.width(),
        height = size.height(),
        target,
        "rasterized svg logo"
    );

    let mut img = RgbaImage::new(target, target);
    for (dst, src) in img.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    img
}
