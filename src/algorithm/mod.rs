//! Palette construction from skin colors

/// Manual and automatic palette proposals
pub mod builder;
/// Closest-block search by color distance
pub mod matcher;
/// Color to block assignments and their JSON form
pub mod palette;

pub use palette::Palette;
