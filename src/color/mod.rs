/// Pixel to color key conversion
pub mod codec;

pub use codec::{ColorKey, ColorKeyParseError, Rgb, encode};
