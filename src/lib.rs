//! # qrlogo - QR Codes with a Centered Logo
//!
//! qrlogo encodes a payload (usually a URI) as a QR symbol, scales it to an
//! exact pixel size and optionally stamps a PNG or SVG logo into the middle.
//! It provides:
//!
//! - **Symbol encoding**: error correction fixed at H so the logo can occlude modules
//! - **Rasterization**: sharp block scaling to any size at least as large as the symbol
//! - **Logo loading**: PNG decoding and SVG rasterization to the logo slot
//! - **Compositing**: alpha "over" blending into a centered 20% slot
//!
//! ## Quick Start
//!
//! ```no_run
//! use qrlogo::pipeline::{QrOptions, run};
//!
//! let options = QrOptions::new("https://example.com")
//!     .size(300)
//!     .logo("logo.svg");
//!
//! run(&options, "qrcode.png".as_ref())?;
//! # Ok::<(), qrlogo::QrLogoError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`symbol`] | Payload to module matrix |
//! | [`render`] | Rasterization and compositing |
//! | [`asset`] | Logo loading (PNG / SVG) |
//! | [`sink`] | PNG output |
//! | [`pipeline`] | End-to-end orchestration |
//! | [`config`] | Defaults and policy |
//! | [`error`] | Error types |

pub mod asset;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod sink;
pub mod symbol;

// Re-exports for convenience
pub use error::{QrLogoError, Result};
pub use pipeline::{QrOptions, generate, run};
