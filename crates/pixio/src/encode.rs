use std::{
    borrow::Cow,
    fmt,
    fs::File,
    io::{BufWriter, Seek, Write},
    path::Path,
    str::FromStr,
};

use image::{
    codecs::{
        bmp::BmpEncoder, gif::GifEncoder, jpeg::JpegEncoder, png::PngEncoder, tiff::TiffEncoder,
        webp::WebPEncoder,
    },
    ColorType, DynamicImage, Frame,
};
use log::{debug, trace};

use crate::{Error, Result};

/// A destination an [`Encode`] implementation can write into
pub trait Sink: Write + Seek {}

impl<T: Write + Seek + ?Sized> Sink for T {}

/// A single output codec
pub trait Encode {
    fn encode(&self, image: &DynamicImage, writer: &mut dyn Sink) -> Result<()>;
}

/// Every format name [`save_image`] knows about
///
/// `Jxl`, `Heif` and `Avif` are recognized but have no encoder,
/// saving with them fails with [`Error::UnsupportedFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Png,
    Jpeg,
    Bmp,
    Gif,
    WebP,
    Tiff,
    Jxl,
    Heif,
    Avif,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 9] = [
        OutputFormat::Png,
        OutputFormat::Jpeg,
        OutputFormat::Bmp,
        OutputFormat::Gif,
        OutputFormat::WebP,
        OutputFormat::Tiff,
        OutputFormat::Jxl,
        OutputFormat::Heif,
        OutputFormat::Avif,
    ];

    /// The name callers pass to [`save_image`]
    pub fn token(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Bmp => "bmp",
            OutputFormat::Gif => "gif",
            OutputFormat::WebP => "webp",
            OutputFormat::Tiff => "tiff",
            OutputFormat::Jxl => "jxl",
            OutputFormat::Heif => "heif",
            OutputFormat::Avif => "avif",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Png => "PNG",
            OutputFormat::Jpeg => "JPEG",
            OutputFormat::Bmp => "BMP",
            OutputFormat::Gif => "GIF",
            OutputFormat::WebP => "WebP",
            OutputFormat::Tiff => "TIFF",
            OutputFormat::Jxl => "JXL",
            OutputFormat::Heif => "HEIF",
            OutputFormat::Avif => "AVIF",
        }
    }

    /// The usual file extension, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            format => format.token(),
        }
    }

    /// Look up the encoder for this format
    pub fn encoder(self) -> Result<&'static dyn Encode> {
        match self {
            OutputFormat::Png => Ok(&PngCodec),
            OutputFormat::Jpeg => Ok(&JpegCodec),
            OutputFormat::Bmp => Ok(&BmpCodec),
            OutputFormat::Gif => Ok(&GifCodec),
            OutputFormat::WebP => Ok(&WebPCodec),
            OutputFormat::Tiff => Ok(&TiffCodec),
            OutputFormat::Jxl | OutputFormat::Heif | OutputFormat::Avif => {
                Err(Error::UnsupportedFormat(self.name()))
            }
        }
    }

    pub fn is_supported(self) -> bool {
        self.encoder().is_ok()
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.token() == token)
            .ok_or_else(|| Error::UnknownFormat(token.to_owned()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Encode `image` and write it to `path`, creating or truncating the file
///
/// The file is created before `token` is looked up, so an unknown or unsupported
/// format name leaves an empty file behind. A failing encoder can leave a partially
/// written file, it is not removed.
pub fn save_image<P: AsRef<Path>>(image: &DynamicImage, path: P, token: &str) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    debug!("saving to {} as {token:?}", path.display());

    let format = token.parse()?;
    write_file(image, file, format)
}

/// Like [`save_image`] with an already parsed format
pub fn save_image_as<P: AsRef<Path>>(
    image: &DynamicImage,
    path: P,
    format: OutputFormat,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    debug!("saving to {} as {format}", path.display());

    write_file(image, file, format)
}

/// Encode `image` into any seekable writer
pub fn encode_image<W: Write + Seek>(
    image: &DynamicImage,
    writer: &mut W,
    format: OutputFormat,
) -> Result<()> {
    let encoder = format.encoder()?;
    debug!(
        "encoding {}x{} {:?} image as {}",
        image.width(),
        image.height(),
        image.color(),
        format.name()
    );
    encoder.encode(image, writer)
}

fn write_file(image: &DynamicImage, file: File, format: OutputFormat) -> Result<()> {
    let mut buf_writer = BufWriter::new(file);

    // on error the writer is dropped here, which closes the file
    encode_image(image, &mut buf_writer, format)?;

    let file = buf_writer
        .into_inner()
        .map_err(|err| Error::Io(err.into_error()))?;
    file.sync_data()?;
    Ok(())
}

/// Convert to `fallback` unless the image already has one of the `accepted` color types
fn with_color<'a>(
    image: &'a DynamicImage,
    accepted: &[ColorType],
    fallback: fn(&DynamicImage) -> DynamicImage,
) -> Cow<'a, DynamicImage> {
    if accepted.contains(&image.color()) {
        Cow::Borrowed(image)
    } else {
        let converted = fallback(image);
        trace!("converted {:?} to {:?}", image.color(), converted.color());
        Cow::Owned(converted)
    }
}

fn to_rgb8(image: &DynamicImage) -> DynamicImage {
    image.to_rgb8().into()
}

fn to_rgba8(image: &DynamicImage) -> DynamicImage {
    image.to_rgba8().into()
}

fn to_rgba16(image: &DynamicImage) -> DynamicImage {
    image.to_rgba16().into()
}

struct PngCodec;

impl Encode for PngCodec {
    fn encode(&self, image: &DynamicImage, writer: &mut dyn Sink) -> Result<()> {
        let image = with_color(
            image,
            &[
                ColorType::L8,
                ColorType::La8,
                ColorType::Rgb8,
                ColorType::Rgba8,
                ColorType::L16,
                ColorType::La16,
                ColorType::Rgb16,
                ColorType::Rgba16,
            ],
            to_rgba16,
        );
        image
            .write_with_encoder(PngEncoder::new(writer))
            .map_err(Error::Encode)
    }
}

struct JpegCodec;

impl Encode for JpegCodec {
    fn encode(&self, image: &DynamicImage, writer: &mut dyn Sink) -> Result<()> {
        // no alpha in jpeg
        let image = with_color(image, &[ColorType::L8, ColorType::Rgb8], to_rgb8);
        image
            .write_with_encoder(JpegEncoder::new(writer))
            .map_err(Error::Encode)
    }
}

struct BmpCodec;

impl Encode for BmpCodec {
    fn encode(&self, image: &DynamicImage, mut writer: &mut dyn Sink) -> Result<()> {
        let image = with_color(
            image,
            // the encoder drops the alpha of La8, so gray+alpha goes through Rgba8
            &[ColorType::L8, ColorType::Rgb8, ColorType::Rgba8],
            to_rgba8,
        );
        image
            .write_with_encoder(BmpEncoder::new(&mut writer))
            .map_err(Error::Encode)
    }
}

struct GifCodec;

impl Encode for GifCodec {
    fn encode(&self, image: &DynamicImage, writer: &mut dyn Sink) -> Result<()> {
        // the encoder reduces to a 256 color palette itself
        let mut encoder = GifEncoder::new(writer);
        encoder
            .encode_frame(Frame::new(image.to_rgba8()))
            .map_err(Error::Encode)
    }
}

struct WebPCodec;

impl Encode for WebPCodec {
    fn encode(&self, image: &DynamicImage, writer: &mut dyn Sink) -> Result<()> {
        let image = with_color(image, &[ColorType::Rgb8, ColorType::Rgba8], to_rgba8);
        image
            .write_with_encoder(WebPEncoder::new_lossless(writer))
            .map_err(Error::Encode)
    }
}

struct TiffCodec;

impl Encode for TiffCodec {
    fn encode(&self, image: &DynamicImage, writer: &mut dyn Sink) -> Result<()> {
        let image = with_color(
            image,
            &[
                ColorType::L8,
                ColorType::Rgb8,
                ColorType::Rgba8,
                ColorType::L16,
                ColorType::Rgb16,
                ColorType::Rgba16,
            ],
            to_rgba8,
        );
        image
            .write_with_encoder(TiffEncoder::new(writer))
            .map_err(Error::Encode)
    }
}
