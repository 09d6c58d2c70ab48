//! # qrlogo CLI
//!
//! Command-line interface for generating QR code PNGs.
//!
//! ## Usage
//!
//! ```bash
//! # Plain 256x256 QR code written to qrcode.png
//! qrlogo --uri https://example.com
//!
//! # 300px code with an SVG logo in the middle
//! qrlogo --uri https://example.com --size 300 --logo logo.svg --output site.png
//!
//! # Add the standard 4-module margin for print, with debug logging
//! qrlogo --uri https://example.com --quiet-zone 4 -vv
//! ```

use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use qrlogo::{
    QrLogoError,
    config::{DEFAULT_OUTPUT, DEFAULT_SIZE, MAX_QUIET_ZONE},
    pipeline::{self, QrOptions},
};

/// qrlogo - QR code generator with optional center logo
#[derive(Parser, Debug)]
#[command(name = "qrlogo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// URI to encode in the QR code
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    uri: String,

    /// Path to logo image (SVG or PNG) to place in center; empty skips the overlay
    #[arg(long, value_name = "FILE", default_value = "")]
    logo: String,

    /// Output filename
    #[arg(long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Size of QR code in pixels
    #[arg(long, default_value_t = DEFAULT_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    size: u32,

    /// Light border around the symbol, in modules
    #[arg(
        long,
        value_name = "MODULES",
        default_value_t = 0,
        value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_QUIET_ZONE))
    )]
    quiet_zone: u32,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error {}: {}", e.stage(), e);
        std::process::exit(1);
    }

    println!("QR code saved to {}", cli.output.display());
}

impl Cli {
    fn options(&self) -> QrOptions {
        QrOptions {
            payload: self.uri.clone(),
            logo: (!self.logo.is_empty()).then(|| PathBuf::from(&self.logo)),
            size: self.size,
            quiet_zone: self.quiet_zone as usize,
        }
    }
}

fn run(cli: &Cli) -> Result<(), QrLogoError> {
    pipeline::run(&cli.options(), &cli.output)
}

/// Log to stderr. `RUST_LOG` overrides the `-v` level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("qrlogo={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
