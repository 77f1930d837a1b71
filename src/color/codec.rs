//! Canonical color keys for skin pixels
//!
//! Every pixel of a skin is reduced to either the transparent sentinel or an
//! opaque `#rrggbb` key. Partial alpha is not distinguished from full opacity:
//! the skin format only cares whether a pixel is drawn at all.

use crate::io::configuration::TRANSPARENT_KEY;
use image::Rgba;
use std::fmt;
use std::str::FromStr;

/// An 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array in `[r, g, b]` order
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Sum of absolute per-channel differences
    pub fn l1_distance(self, other: Self) -> u32 {
        self.channels()
            .iter()
            .zip(other.channels().iter())
            .map(|(&a, &b)| u32::from(a.abs_diff(b)))
            .sum()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode(self.channels()))
    }
}

/// Lookup key for a skin pixel
///
/// Orders `Transparent` before every opaque color, and opaque colors in the
/// same order as their `#rrggbb` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorKey {
    /// Pixel with zero alpha; never assigned a block
    Transparent,
    /// Any pixel with non-zero alpha
    Opaque(Rgb),
}

impl ColorKey {
    /// Numeric color behind an opaque key
    pub const fn rgb(self) -> Option<Rgb> {
        match self {
            Self::Transparent => None,
            Self::Opaque(rgb) => Some(rgb),
        }
    }

    /// Check for the transparent sentinel
    pub const fn is_transparent(self) -> bool {
        matches!(self, Self::Transparent)
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transparent => f.write_str(TRANSPARENT_KEY),
            Self::Opaque(rgb) => fmt::Display::fmt(rgb, f),
        }
    }
}

/// Text that is neither `transparent` nor a `#rrggbb` color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorKeyParseError {
    /// The rejected text
    pub input: String,
}

impl fmt::Display for ColorKeyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not a color key (expected '#rrggbb' or '{TRANSPARENT_KEY}')",
            self.input
        )
    }
}

impl std::error::Error for ColorKeyParseError {}

impl FromStr for ColorKey {
    type Err = ColorKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == TRANSPARENT_KEY {
            return Ok(Self::Transparent);
        }

        let reject = || ColorKeyParseError {
            input: s.to_string(),
        };

        let digits = s.strip_prefix('#').ok_or_else(reject)?;
        let mut channels = [0u8; 3];
        hex::decode_to_slice(digits, &mut channels)
            .ok()
            .ok_or_else(reject)?;
        Ok(Self::Opaque(Rgb::from(channels)))
    }
}

/// Encode a pixel as its color key
///
/// Zero alpha maps to [`ColorKey::Transparent`] regardless of the color
/// channels; every other alpha value is treated as fully opaque.
pub const fn encode(pixel: Rgba<u8>) -> ColorKey {
    let [r, g, b, a] = pixel.0;
    if a == 0 {
        ColorKey::Transparent
    } else {
        ColorKey::Opaque(Rgb::new(r, g, b))
    }
}
