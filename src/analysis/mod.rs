//! Block texture analysis

/// Representative color extraction
pub mod averager;
/// Block identifiers and the representative color table
pub mod table;

pub use table::{RepresentativeColorTable, TileColor, TileId};
