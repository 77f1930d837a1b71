//! Representative color extraction for block textures
//!
//! A block's representative color is the pixel-count weighted mean of every
//! distinct color in the texture. Opacity only gates usability: a block needs
//! at least one fully opaque pixel to be usable, but once it qualifies, its
//! transparent pixels still contribute their channel values to the mean.
//! Means are rounded half-to-even with exact integer arithmetic.

use crate::analysis::table::{RepresentativeColorTable, TileColor, TileId};
use crate::color::Rgb;
use crate::io::configuration::{OPAQUE_ALPHA, TILE_SIZE};
use crate::io::error::Result;
use crate::io::image::{list_files, open_rgba};
use crate::io::progress::ProgressReporter;
use image::RgbaImage;
use std::collections::BTreeMap;
use std::path::Path;

/// Distinct RGBA values of an image with their pixel counts
pub fn color_counts(image: &RgbaImage) -> BTreeMap<[u8; 4], u64> {
    let mut counts = BTreeMap::new();
    for pixel in image.pixels() {
        *counts.entry(pixel.0).or_insert(0) += 1;
    }
    counts
}

/// Divide and round to the nearest integer, ties to the even neighbour
pub const fn round_half_even(numerator: u64, denominator: u64) -> u64 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    let twice = remainder * 2;
    if twice > denominator || (twice == denominator && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}

/// Compute the representative color of one block texture
pub fn compute_representative(tile: &RgbaImage) -> TileColor {
    let counts = color_counts(tile);

    if !counts.keys().any(|&[_, _, _, a]| a == OPAQUE_ALPHA) {
        return TileColor::Unusable;
    }

    let mut sums = [0u64; 3];
    let mut total = 0u64;
    for (&[r, g, b, _], &count) in &counts {
        for (sum, channel) in sums.iter_mut().zip([r, g, b]) {
            *sum += count * u64::from(channel);
        }
        total += count;
    }

    // A weighted mean of u8 channels never exceeds 255
    let [r, g, b] = sums.map(|sum| round_half_even(sum, total).min(255) as u8);
    TileColor::Usable(Rgb::new(r, g, b))
}

/// Builds representative color tables from block directories
#[derive(Debug, Clone, Copy, Default)]
pub struct TileAverager {
    show_progress: bool,
}

impl TileAverager {
    /// Create an averager without progress display
    pub const fn new() -> Self {
        Self {
            show_progress: false,
        }
    }

    /// Enable or disable the progress bar
    #[must_use]
    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Average every block texture in `directory` with the given extension
    ///
    /// Files are visited in sorted path order, which becomes the table order.
    /// When two files share a stem only the first one is kept, and textures
    /// that are not 16×16 are recorded as unusable.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The directory cannot be read
    /// - Any matching file cannot be decoded as an image
    pub fn build_table(
        &self,
        directory: &Path,
        extension: &str,
    ) -> Result<RepresentativeColorTable> {
        let files = list_files(directory, extension)?;
        let progress = ProgressReporter::new(self.show_progress, files.len() as u64, "Averaging");

        let mut table = RepresentativeColorTable::new();
        for path in &files {
            let tile = TileId::from_path(path);
            progress.set_message(tile.as_str());
            progress.inc();

            if table.get(&tile).is_some() {
                log::warn!(
                    "Skipping '{}': block '{tile}' was already read from another file",
                    path.display()
                );
                continue;
            }

            let texture = open_rgba(path)?;
            let (width, height) = texture.dimensions();
            let color = if (width, height) == (TILE_SIZE, TILE_SIZE) {
                let color = compute_representative(&texture);
                match color {
                    TileColor::Usable(rgb) => log::debug!("Block '{tile}' averages to {rgb}"),
                    TileColor::Unusable => {
                        log::warn!(
                            "Block '{tile}' has no fully opaque pixel and will never match"
                        );
                    }
                }
                color
            } else {
                log::warn!(
                    "Block '{tile}' is {width}x{height} instead of {TILE_SIZE}x{TILE_SIZE} \
                     and will never match"
                );
                TileColor::Unusable
            };

            table.insert(tile, color);
        }
        progress.finish();

        log::info!(
            "Averaged {} blocks from '{}' ({} usable)",
            table.len(),
            directory.display(),
            table.usable_count()
        );
        Ok(table)
    }
}

/// Average every block texture in `directory` without progress display
///
/// # Errors
///
/// Returns an error if the directory cannot be read or a block fails to load
pub fn build_table(directory: &Path, extension: &str) -> Result<RepresentativeColorTable> {
    TileAverager::new().build_table(directory, extension)
}
