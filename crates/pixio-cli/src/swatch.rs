use image::{DynamicImage, Rgba, RgbaImage};
use pixio::Palette;

/// Lay out the palette left to right, each entry as a `size` x `size` block
///
/// Returns `None` when the strip's dimensions or buffer size don't fit.
pub fn render(palette: &Palette, size: u32) -> Option<DynamicImage> {
    let width = u32::try_from(palette.len()).ok()?.checked_mul(size)?;
    let _buffer_len = (width as usize)
        .checked_mul(size as usize)?
        .checked_mul(4)?;

    let strip = RgbaImage::from_fn(width, size, |x, _| {
        Rgba(palette[(x / size) as usize].channels())
    });
    Some(DynamicImage::ImageRgba8(strip))
}
