//! Mosaic layout and block texture loading
//!
//! This module contains spatial-related functionality including:
//! - Placement of block textures on the mosaic canvas
//! - Block texture sources, with optional caching

/// Block texture sources
pub mod loader;
/// Skin to mosaic rendering
pub mod mosaic;

pub use mosaic::MosaicRenderer;
