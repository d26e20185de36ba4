#![allow(dead_code)]

use std::sync::Once;

use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
use log::LevelFilter;
use simplelog::{Config, TestLogger};

static START: Once = Once::new();

pub fn init() {
    START.call_once(|| {
        let _ = TestLogger::init(LevelFilter::Trace, Config::default());
    });
}

/// A 24x16 opaque test card with few enough colors to survive gif palette reduction
pub fn test_card() -> DynamicImage {
    let colors = [
        Rgb([0, 0, 0]),
        Rgb([255, 255, 255]),
        Rgb([200, 30, 40]),
        Rgb([20, 180, 60]),
        Rgb([30, 60, 220]),
        Rgb([250, 210, 0]),
    ];
    let image = RgbImage::from_fn(24, 16, |x, y| colors[((x / 4 + y / 4) as usize) % colors.len()]);
    DynamicImage::ImageRgb8(image)
}

/// A 16x16 gradient with varying alpha
pub fn translucent() -> DynamicImage {
    let image = RgbaImage::from_fn(16, 16, |x, y| {
        Rgba([(x * 16) as u8, (y * 16) as u8, 128, (255 - x * 8) as u8])
    });
    DynamicImage::ImageRgba8(image)
}

pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];
