//! Open images from disk and save them again in a chosen container format.
//!
//! Decoding and encoding is done by the [`image`] crate, this crate only picks the
//! codec and manages the file. Output formats are selected by name:
//!
//! ```no_run
//! # fn main() -> pixio::Result<()> {
//! let image = pixio::open_image("input.jpg")?;
//! pixio::save_image(&image, "output.png", "png")?;
//! # Ok(())
//! # }
//! ```

pub use image::{DynamicImage, ImageFormat};
pub use pixio_types as types;
pub use pixio_types::{palette, Color, ColorError, Palette};

pub mod decode;
pub mod encode;
mod error;

pub use decode::{decode_image, open_image, open_image_with_format};
pub use encode::{encode_image, save_image, save_image_as, Encode, OutputFormat, Sink};
pub use error::{Error, Result};
