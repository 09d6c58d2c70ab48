//! # Error Types
//!
//! This module defines the error type shared by every pipeline stage.
//! Each variant belongs to exactly one stage; nothing is retried or
//! recovered, so the first error ends the run.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for qrlogo operations
#[derive(Debug, Error)]
pub enum QrLogoError {
    /// The payload cannot be represented as a QR symbol at any version
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The requested edge length cannot hold one pixel per module
    #[error("Scaling error: size {size}px is smaller than the {modules}-module symbol")]
    Scaling { size: u32, modules: u32 },

    /// Logo extension is neither PNG nor SVG
    #[error("Unsupported logo format '{0}': use PNG or SVG")]
    UnsupportedFormat(String),

    /// Logo file could not be opened or read
    #[error("Failed to read logo {}: {source}", .path.display())]
    AssetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Logo content was rejected by the decoder or SVG parser
    #[error("Failed to parse logo {}: {message}", .path.display())]
    AssetParse { path: PathBuf, message: String },

    /// Output file could not be created, encoded or flushed
    #[error("Failed to write {}: {message}", .path.display())]
    Write { path: PathBuf, message: String },
}

impl QrLogoError {
    /// Human-readable name of the stage that failed, used by the CLI.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Encoding(_) | Self::Scaling { .. } => "generating QR code",
            Self::UnsupportedFormat(_) | Self::AssetRead { .. } | Self::AssetParse { .. } => {
                "overlaying logo"
            }
            Self::Write { .. } => "saving QR code",
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QrLogoError>;
