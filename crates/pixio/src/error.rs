use image::ImageError;

pub type Result<T> = core::result::Result<T, Error>;

/// Describes an error encountered while opening or saving an image.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file could not be opened, created, read or written
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The byte stream matched no known format or was malformed
    #[error("failed to decode image: {0}")]
    Decode(#[source] ImageError),
    /// The encoder rejected the image or failed while writing it
    #[error("failed to encode image: {0}")]
    Encode(#[source] ImageError),
    /// The format name is reserved but has no encoder yet
    #[error("{0} format is currently unsupported")]
    UnsupportedFormat(&'static str),
    #[error("unknown format name provided: {0:?}")]
    UnknownFormat(String),
}
