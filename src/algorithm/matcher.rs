//! Closest-block search by L1 color distance
//!
//! Entries are scanned in table order and the running best is only replaced
//! on a strictly smaller distance, so among equally close blocks the one
//! inserted first wins.

use crate::analysis::table::{RepresentativeColorTable, TileId};
use crate::color::Rgb;
use crate::io::error::{MosaicError, Result};

/// Result of a closest-block search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    /// Winning block
    pub tile: &'a TileId,
    /// L1 distance between the target and the block's representative color
    pub distance: u32,
}

/// Find the block whose representative color is closest to `target`
///
/// Unusable blocks take part with their out-of-range sentinel, so they are
/// only returned when the table holds nothing else.
///
/// # Errors
///
/// Returns [`MosaicError::EmptyTileLibrary`] if the table has no entries
pub fn closest(target: Rgb, table: &RepresentativeColorTable) -> Result<Match<'_>> {
    let mut best: Option<Match<'_>> = None;

    for (tile, color) in table.iter() {
        let distance = color.distance(target);
        if best.is_none_or(|current| distance < current.distance) {
            best = Some(Match { tile, distance });
        }
    }

    let found = best.ok_or(MosaicError::EmptyTileLibrary)?;
    if table.usable_count() == 0 {
        log::warn!(
            "No usable block for {target}; falling back to unusable block '{}'",
            found.tile
        );
    }
    Ok(found)
}
