//! Mosaic rendering: one block texture per skin pixel
//!
//! The skin is walked row by row; every opaque pixel is looked up in the
//! palette and the assigned block is pasted at sixteen times the pixel
//! coordinates. Transparent pixels leave the canvas untouched.

use crate::algorithm::palette::Palette;
use crate::analysis::table::TileId;
use crate::color::encode;
use crate::io::configuration::{CANVAS_SIZE, SOURCE_SIZE, TILE_SIZE};
use crate::io::error::{MosaicError, Result, invalid_source};
use crate::io::image::paste;
use crate::io::progress::ProgressReporter;
use crate::spatial::loader::TileLoader;
use image::{Rgba, RgbaImage};

/// Reject skins that are not exactly 64×64
///
/// # Errors
///
/// Returns [`MosaicError::InvalidSourceData`] naming the actual dimensions
pub fn validate_source(source: &RgbaImage) -> Result<()> {
    let (width, height) = source.dimensions();
    if (width, height) == (SOURCE_SIZE, SOURCE_SIZE) {
        Ok(())
    } else {
        Err(invalid_source(&format!(
            "skin is {width}x{height}, expected {SOURCE_SIZE}x{SOURCE_SIZE}"
        )))
    }
}

fn validate_tile(tile: &TileId, texture: &RgbaImage) -> Result<()> {
    let (width, height) = texture.dimensions();
    if (width, height) == (TILE_SIZE, TILE_SIZE) {
        Ok(())
    } else {
        Err(MosaicError::InvalidTile {
            tile: tile.clone(),
            reason: format!("texture is {width}x{height}, expected {TILE_SIZE}x{TILE_SIZE}"),
        })
    }
}

/// Canvas offset of the block standing for source pixel `(x, y)`
pub const fn tile_origin(x: u32, y: u32) -> (u32, u32) {
    (x * TILE_SIZE, y * TILE_SIZE)
}

/// Fully transparent canvas of the mosaic size
pub fn blank_canvas() -> RgbaImage {
    RgbaImage::new(CANVAS_SIZE, CANVAS_SIZE)
}

/// Renders skins into block mosaics
#[derive(Debug, Clone, Copy, Default)]
pub struct MosaicRenderer {
    show_progress: bool,
}

impl MosaicRenderer {
    /// Create a renderer without progress display
    pub const fn new() -> Self {
        Self {
            show_progress: false,
        }
    }

    /// Enable or disable the per-row progress bar
    #[must_use]
    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Paste the assigned block for every opaque pixel of `source`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The skin is not 64×64
    /// - An opaque color has no palette entry
    /// - A block texture fails to load or is not 16×16
    pub fn render<L: TileLoader>(
        &self,
        source: &RgbaImage,
        palette: &Palette,
        loader: &mut L,
    ) -> Result<RgbaImage> {
        validate_source(source)?;

        let progress =
            ProgressReporter::new(self.show_progress, u64::from(SOURCE_SIZE), "Rendering");
        let mut canvas = blank_canvas();
        let mut pasted = 0usize;

        for y in 0..SOURCE_SIZE {
            for x in 0..SOURCE_SIZE {
                let pixel = source
                    .get_pixel_checked(x, y)
                    .copied()
                    .unwrap_or(Rgba([0, 0, 0, 0]));
                let key = encode(pixel);
                if key.is_transparent() {
                    continue;
                }

                let tile = palette
                    .lookup(key)
                    .ok_or(MosaicError::PaletteEntryMissing {
                        color: key,
                        position: (x, y),
                    })?;

                let texture = loader.load(tile)?;
                validate_tile(tile, &texture)?;
                paste(&mut canvas, &texture, tile_origin(x, y));
                pasted += 1;
            }
            progress.inc();
        }
        progress.finish();

        log::info!("Rendered mosaic with {pasted} blocks");
        Ok(canvas)
    }
}

/// Render a mosaic without progress display
///
/// # Errors
///
/// Returns an error under the same conditions as [`MosaicRenderer::render`]
pub fn render<L: TileLoader>(
    source: &RgbaImage,
    palette: &Palette,
    loader: &mut L,
) -> Result<RgbaImage> {
    MosaicRenderer::new().render(source, palette, loader)
}
