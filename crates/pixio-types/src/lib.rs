#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::{ops::Deref, str::FromStr};

/// The character every hexadecimal color code has to start with
pub const HEX_PREFIX: char = '#';

/// Errors produced while turning text or loose channel values into a [`Color`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("color code isn't prefixed with hash (#) character")]
    MissingHash,
    #[error("provided hexadecimal code has an invalid length: {0}")]
    InvalidLength(usize),
    #[error("color channel value in color code isn't a valid hexadecimal number")]
    InvalidDigit,
    #[error("provided color channel list contains invalid amount of values: {0}")]
    ChannelCount(usize),
    #[error("color channel value {0} is outside the (0, 255) range")]
    ChannelRange(i64),
    #[error("a color channel in provided list isn't an integer")]
    InvalidChannel,
}

/// A single straight-alpha RGBA color
///
/// Every channel is a full `u8`, so any value that can be stored is in range.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// A Color with all channels set to 0
    pub const TRANSPARENT: Self = Color::rgba(0, 0, 0, 0);

    pub const BLACK: Self = Color::rgb(0, 0, 0);

    pub const WHITE: Self = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create a Color from its channels, stored as given
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// The channels in `[r, g, b, a]` order
    pub const fn channels(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Parse a `#`-prefixed hexadecimal color code
    ///
    /// Accepts 3, 6 or 8 digits after the prefix. In the 3 digit form every single
    /// digit is taken as the channel value itself, so `#fff` is `(15, 15, 15)`.
    /// Codes without an alpha channel are fully opaque.
    pub fn from_hex(code: &str) -> Result<Self, ColorError> {
        let Some(digits) = code.strip_prefix(HEX_PREFIX) else {
            return Err(ColorError::MissingHash);
        };
        let digits = digits.trim_start_matches(HEX_PREFIX);

        let width = match digits.chars().count() {
            3 => 1,
            6 | 8 => 2,
            len => return Err(ColorError::InvalidLength(len)),
        };

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit);
        }

        let mut channels = [255; 4];
        for (channel, chunk) in channels.iter_mut().zip(digits.as_bytes().chunks(width)) {
            *channel = chunk.iter().fold(0, |acc, &digit| acc * 16 + hex_value(digit));
        }

        Ok(channels.into())
    }

    /// Build a Color from a list of 3 (RGB) or 4 (RGBA) channel values
    pub fn from_channels(channels: &[i64]) -> Result<Self, ColorError> {
        if !matches!(channels.len(), 3 | 4) {
            return Err(ColorError::ChannelCount(channels.len()));
        }

        let mut rgba = [255; 4];
        for (slot, &value) in rgba.iter_mut().zip(channels) {
            *slot = u8::try_from(value).map_err(|_| ColorError::ChannelRange(value))?;
        }

        Ok(rgba.into())
    }
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => unreachable!("digits are checked before conversion"),
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        color.channels()
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Either a hexadecimal code (`#deadbeef`) or a comma separated channel list (`0,0,0,255`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with(HEX_PREFIX) {
            return Self::from_hex(s);
        }

        let channels = s
            .split(',')
            .map(|channel| channel.trim().parse::<i64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ColorError::InvalidChannel)?;

        Self::from_channels(&channels)
    }
}

/// An ordered list of colors, addressed by palette index
///
/// Order is kept exactly as given and duplicates are allowed.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new<I: IntoIterator<Item = Color>>(colors: I) -> Self {
        Self {
            colors: colors.into_iter().collect(),
        }
    }

    /// Parse every entry with [`Color::from_str`], stopping at the first invalid one
    pub fn parse<'a, I>(entries: I) -> Result<Self, ColorError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        entries.into_iter().map(str::parse::<Color>).collect()
    }

    pub fn push(&mut self, color: Color) {
        self.colors.push(color);
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }

    pub fn into_vec(self) -> Vec<Color> {
        self.colors
    }
}

impl Deref for Palette {
    type Target = [Color];

    fn deref(&self) -> &Self::Target {
        &self.colors
    }
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self {
        Self { colors }
    }
}

impl FromIterator<Color> for Palette {
    fn from_iter<T: IntoIterator<Item = Color>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl IntoIterator for Palette {
    type Item = Color;

    type IntoIter = alloc::vec::IntoIter<Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;

    type IntoIter = core::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

/// Create a [`Palette`] from any number of colors, in the order given
///
/// ```
/// use pixio_types::{palette, Color};
///
/// let bw = palette![Color::BLACK, Color::WHITE];
/// assert_eq!(bw.len(), 2);
/// assert!(palette![].is_empty());
/// ```
#[macro_export]
macro_rules! palette {
    ($($color:expr),* $(,)?) => {
        $crate::Palette::new([$($color),*])
    };
}
