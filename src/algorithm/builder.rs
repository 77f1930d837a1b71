//! Palette proposals for a skin
//!
//! Manual mode assigns the placeholder block to every color so the palette
//! can be filled in by hand; automatic mode asks the matcher for the closest
//! block per color.

use crate::algorithm::matcher::closest;
use crate::algorithm::palette::Palette;
use crate::analysis::table::{RepresentativeColorTable, TileId};
use crate::color::{Rgb, encode};
use crate::io::configuration::PLACEHOLDER_TILE;
use crate::io::error::Result;
use crate::spatial::mosaic::validate_source;
use image::RgbaImage;
use std::collections::BTreeSet;

/// Distinct opaque colors of a skin
///
/// Transparent pixels are dropped whatever their color channels hold.
pub fn distinct_colors(source: &RgbaImage) -> BTreeSet<Rgb> {
    source
        .pixels()
        .filter_map(|&pixel| encode(pixel).rgb())
        .collect()
}

/// Assign the placeholder block to every opaque color of the skin
///
/// # Errors
///
/// Returns an error if the skin is not 64×64
pub fn build_manual(source: &RgbaImage) -> Result<Palette> {
    validate_source(source)?;

    let palette: Palette = distinct_colors(source)
        .into_iter()
        .map(|rgb| (rgb, TileId::new(PLACEHOLDER_TILE)))
        .collect();

    log::info!(
        "Prepared manual palette with {} colors set to '{PLACEHOLDER_TILE}'",
        palette.len()
    );
    Ok(palette)
}

/// Assign the closest block to every opaque color of the skin
///
/// # Errors
///
/// Returns an error if:
/// - The skin is not 64×64
/// - The table is empty while the skin has at least one opaque color
pub fn build_automatic(source: &RgbaImage, table: &RepresentativeColorTable) -> Result<Palette> {
    validate_source(source)?;

    let mut palette = Palette::new();
    for rgb in distinct_colors(source) {
        let found = closest(rgb, table)?;
        log::debug!(
            "Color {rgb} -> '{}' (distance {})",
            found.tile,
            found.distance
        );
        palette.insert(rgb, found.tile.clone());
    }

    log::info!(
        "Matched {} colors against {} blocks",
        palette.len(),
        table.len()
    );
    Ok(palette)
}
