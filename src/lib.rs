//! Pixel-art skin to block mosaic conversion
//!
//! Each pixel of a 64×64 character skin is replaced by a 16×16 block texture.
//! Blocks are assigned per color through a palette, which is either written by
//! hand from a generated template or matched automatically against the average
//! colors of a block library.

#![forbid(unsafe_code)]

/// Palette construction and closest-block matching
pub mod algorithm;
/// Representative colors of block textures
pub mod analysis;
/// Pixel color keys
pub mod color;
/// Input/output operations and error handling
pub mod io;
/// Mosaic rendering and block texture loading
pub mod spatial;

pub use io::error::{MosaicError, Result};
