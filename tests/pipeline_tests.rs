//! # Pipeline Tests
//!
//! End-to-end checks: generated PNGs are read back from disk and decoded
//! with `rqrr`, an independent QR decoder.

use image::{GrayImage, Luma, Rgba, RgbaImage};
use pretty_assertions::assert_eq;
use qrlogo::QrLogoError;
use qrlogo::pipeline::{QrOptions, generate, run};
use qrlogo::render::LogoSlot;
use std::path::{Path, PathBuf};

const URI: &str = "https://example.com";

/// SVG fixture: red square with a white disc in the middle.
fn svg_logo() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/logo.svg")
}

/// SVG fixture: red disc on a transparent background.
fn transparent_svg_logo() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/badge.svg")
}

/// Decode a raster with rqrr.
///
/// The symbol is rendered edge to edge, so a white margin is added first;
/// detectors need light space around the finder patterns.
fn decode(img: &RgbaImage) -> String {
    let margin = img.width() / 4;
    let side = img.width() + 2 * margin;
    let mut padded = GrayImage::from_pixel(side, side, Luma([255]));
    let gray = image::imageops::grayscale(img);
    image::imageops::overlay(&mut padded, &gray, margin as i64, margin as i64);

    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        side as usize,
        side as usize,
        |x, y| padded.get_pixel(x as u32, y as u32)[0],
    );
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "expected exactly one QR code");
    let (_meta, content) = grids[0].decode().expect("QR decode failed");
    content
}

fn read_png(path: &Path) -> RgbaImage {
    image::open(path).expect("output is not a PNG").to_rgba8()
}

#[test]
fn plain_code_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("qrcode.png");

    run(&QrOptions::new(URI), &output).unwrap();

    let img = read_png(&output);
    assert_eq!(img.dimensions(), (256, 256));
    assert_eq!(decode(&img), URI);
}

#[test]
fn payloads_round_trip_at_several_sizes() {
    let payloads = [
        "HELLO WORLD",
        "0123456789",
        "mailto:someone@example.org?subject=hi",
        "https://example.com/a/much/longer/path?with=query&and=more#fragment",
    ];
    for payload in payloads {
        for size in [200, 256, 333] {
            let img = generate(&QrOptions::new(payload).size(size)).unwrap();
            assert_eq!(img.dimensions(), (size, size));
            assert_eq!(decode(&img), payload, "size {size}");
        }
    }
}

#[test]
fn svg_logo_fills_centered_slot() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("logo.png");
    let options = QrOptions::new(URI).size(300).logo(svg_logo());

    run(&options, &output).unwrap();
    let img = read_png(&output);
    let plain = generate(&QrOptions::new(URI).size(300)).unwrap();

    assert_eq!(img.dimensions(), (300, 300));
    let slot = LogoSlot::for_size(300);
    assert_eq!((slot.x, slot.y, slot.size), (120, 120, 60));

    for (x, y, pixel) in img.enumerate_pixels() {
        if !slot.contains(x, y) {
            assert_eq!(pixel, plain.get_pixel(x, y), "pixel ({x}, {y}) outside slot");
        }
    }

    // Red frame of the logo and its white center
    assert_eq!(*img.get_pixel(121, 121), Rgba([255, 0, 0, 255]));
    assert_eq!(*img.get_pixel(178, 178), Rgba([255, 0, 0, 255]));
    assert_eq!(*img.get_pixel(150, 150), Rgba([255, 255, 255, 255]));
}

#[test]
fn logo_code_still_decodes() {
    let img = generate(&QrOptions::new(URI).size(300).logo(svg_logo())).unwrap();
    assert_eq!(decode(&img), URI);
}

#[test]
fn antialiased_logo_edges_stay_opaque() {
    let img = generate(&QrOptions::new(URI).size(300).logo(transparent_svg_logo())).unwrap();
    let plain = generate(&QrOptions::new(URI).size(300)).unwrap();

    let translucent = img.pixels().filter(|p| p[3] != 255).count();
    assert_eq!(translucent, 0, "non-opaque pixels in output");

    // Slot corners are outside the disc and show the QR modules
    let slot = LogoSlot::for_size(300);
    assert_eq!(img.get_pixel(slot.x, slot.y), plain.get_pixel(slot.x, slot.y));
    assert_eq!(*img.get_pixel(150, 150), Rgba([255, 0, 0, 255]));
    assert_eq!(decode(&img), URI);
}

#[test]
fn png_logo_is_resized_to_slot() {
    let dir = tempfile::tempdir().unwrap();
    let logo = dir.path().join("LOGO.PNG");
    RgbaImage::from_pixel(200, 200, Rgba([0, 0, 255, 255]))
        .save_with_format(&logo, image::ImageFormat::Png)
        .unwrap();

    let img = generate(&QrOptions::new(URI).size(256).logo(&logo)).unwrap();
    let plain = generate(&QrOptions::new(URI).size(256)).unwrap();
    let slot = LogoSlot::for_size(256);

    for (x, y, pixel) in img.enumerate_pixels() {
        if slot.contains(x, y) {
            // Lanczos resampling of a flat color may be off by one
            let [r, g, b, a] = pixel.0;
            assert!(r <= 1 && g <= 1 && b >= 254 && a >= 254, "pixel ({x}, {y}): {pixel:?}");
        } else {
            assert_eq!(pixel, plain.get_pixel(x, y));
        }
    }
}

#[test]
fn too_small_size_is_scaling_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("qrcode.png");

    let err = run(&QrOptions::new(URI).size(10), &output).unwrap_err();

    assert!(
        matches!(err, QrLogoError::Scaling { size: 10, modules: 29 }),
        "{err}"
    );
    assert!(!output.exists());
}

#[test]
fn unsupported_logo_fails_before_io() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("qrcode.png");

    for logo in ["nowhere/logo.gif", "nowhere/logo.bmp", "nowhere/logo.jpg"] {
        let err = run(&QrOptions::new(URI).logo(logo), &output).unwrap_err();
        assert!(matches!(err, QrLogoError::UnsupportedFormat(_)), "{logo}: {err}");
    }
    assert!(!output.exists());
}

#[test]
fn missing_logo_is_read_error() {
    let err = generate(&QrOptions::new(URI).logo("nowhere/logo.svg")).unwrap_err();
    assert!(matches!(err, QrLogoError::AssetRead { .. }), "{err}");
    assert_eq!(err.stage(), "overlaying logo");
}

#[test]
fn oversized_payload_is_encoding_error() {
    let err = generate(&QrOptions::new("x".repeat(4000))).unwrap_err();
    assert!(matches!(err, QrLogoError::Encoding(_)), "{err}");
}

#[test]
fn quiet_zone_keeps_requested_size() {
    let img = generate(&QrOptions::new(URI).size(370).quiet_zone(4)).unwrap();
    assert_eq!(img.dimensions(), (370, 370));
    // 37 modules of 10px: the first four module rings are light
    assert!(img.pixels().take(370 * 40).all(|p| *p == Rgba([255, 255, 255, 255])));
    assert_eq!(decode(&img), URI);
}
