//! # Rendering Module
//!
//! Pixel-level stages of the pipeline.
//!
//! ## Modules
//!
//! - [`modules`]: module matrix to exact-size RGBA raster
//! - [`composite`]: centered "over" blend of the logo
//!
//! ## Usage Example
//!
//! ```
//! use qrlogo::render::{composite, rasterize};
//! use qrlogo::symbol::{ErrorCorrection, QrEncoder, SymbolEncoder};
//! use image::{Rgba, RgbaImage};
//!
//! let matrix = QrEncoder.encode("https://example.com", ErrorCorrection::H).unwrap();
//! let qr = rasterize(&matrix, 300).unwrap();
//!
//! let logo = RgbaImage::from_pixel(60, 60, Rgba([255, 0, 0, 255]));
//! let out = composite(&qr, &logo);
//! assert_eq!(*out.get_pixel(150, 150), Rgba([255, 0, 0, 255]));
//! ```

pub mod composite;
pub mod modules;

pub use composite::{LogoSlot, composite};
pub use modules::rasterize;
