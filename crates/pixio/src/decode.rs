use std::{
    fs::File,
    io::{BufRead, BufReader, Seek},
    path::Path,
};

use image::{
    error::{ImageFormatHint, UnsupportedError},
    DynamicImage, ImageError, ImageFormat, ImageReader,
};
use log::debug;

use crate::{Error, Result};

/// Open the file at `path` and decode it
///
/// The format is detected from the file content, the extension is never consulted.
pub fn open_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    open_image_with_format(path).map(|(image, _)| image)
}

/// Like [`open_image`], but also report which format was detected
pub fn open_image_with_format<P: AsRef<Path>>(path: P) -> Result<(DynamicImage, ImageFormat)> {
    let path = path.as_ref();
    debug!("opening {}", path.display());

    // closed when the reader is dropped
    let file = File::open(path)?;
    decode_image(BufReader::new(file))
}

/// Detect the format of an encoded image from its leading bytes and decode it
pub fn decode_image<R: BufRead + Seek>(reader: R) -> Result<(DynamicImage, ImageFormat)> {
    let reader = ImageReader::new(reader).with_guessed_format()?;

    let Some(format) = reader.format() else {
        return Err(Error::Decode(ImageError::Unsupported(
            UnsupportedError::from(ImageFormatHint::Unknown),
        )));
    };
    debug!("detected {format:?} data");

    let image = reader.decode().map_err(Error::Decode)?;
    debug!(
        "decoded {}x{} {:?} image",
        image.width(),
        image.height(),
        image.color()
    );

    Ok((image, format))
}
