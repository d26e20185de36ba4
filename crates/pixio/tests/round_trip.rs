use image::{GrayAlphaImage, LumaA};
use pixio::{open_image, save_image, DynamicImage};

mod common;

fn round_trip(image: &DynamicImage, token: &str) -> DynamicImage {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join(format!("first.{token}"));
    let second = dir.path().join(format!("second.{token}"));

    save_image(image, &first, token).unwrap();
    let loaded = open_image(&first).unwrap();

    // encode what was decoded once more, as a caller reworking a file would
    save_image(&loaded, &second, token).unwrap();
    open_image(&second).unwrap()
}

fn assert_same_pixels(token: &str) {
    common::init();
    let card = common::test_card();
    let result = round_trip(&card, token);

    assert_eq!((result.width(), result.height()), (card.width(), card.height()));
    assert!(
        result.to_rgb8() == card.to_rgb8(),
        "pixel data changed in {token} round trip"
    );
}

#[test]
fn png() {
    assert_same_pixels("png");
}

#[test]
fn bmp() {
    assert_same_pixels("bmp");
}

#[test]
fn gif() {
    assert_same_pixels("gif");
}

#[test]
fn tiff() {
    assert_same_pixels("tiff");
}

#[test]
fn webp() {
    assert_same_pixels("webp");
}

#[test]
fn jpeg() {
    common::init();
    let card = common::test_card();
    let result = round_trip(&card, "jpeg");

    assert_eq!((result.width(), result.height()), (24, 16));
}

#[test]
fn png_keeps_alpha() {
    common::init();
    let image = common::translucent();
    let result = round_trip(&image, "png");

    assert_eq!(result.to_rgba8(), image.to_rgba8());
}

fn assert_same_alpha(image: &DynamicImage, token: &str) {
    common::init();
    let result = round_trip(image, token);

    assert_eq!((result.width(), result.height()), (image.width(), image.height()));
    assert!(
        result.to_rgba8() == image.to_rgba8(),
        "alpha changed in {token} round trip"
    );
}

#[test]
fn bmp_keeps_alpha() {
    assert_same_alpha(&common::translucent(), "bmp");
}

#[test]
fn tiff_keeps_alpha() {
    assert_same_alpha(&common::translucent(), "tiff");
}

#[test]
fn bmp_keeps_gray_alpha() {
    let gray = GrayAlphaImage::from_fn(4, 2, |x, y| LumaA([(x * 60) as u8, (64 + y * 100) as u8]));
    assert_same_alpha(&DynamicImage::ImageLumaA8(gray), "bmp");
}
