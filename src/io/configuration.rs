//! Mosaic geometry constants and runtime configuration defaults

// Source skin geometry
/// Width and height of a source skin in pixels
pub const SOURCE_SIZE: u32 = 64;

/// Width and height of a single block texture in pixels
pub const TILE_SIZE: u32 = 16;

/// Width and height of the rendered mosaic in pixels
pub const CANVAS_SIZE: u32 = SOURCE_SIZE * TILE_SIZE;

// Palette conventions
/// Block identifier written by manual preparation, meant to be replaced by hand
pub const PLACEHOLDER_TILE: &str = "block";

/// Textual key for fully transparent pixels
pub const TRANSPARENT_KEY: &str = "transparent";

// Far outside 0..=255 so an unusable block can never win a distance comparison
/// Persisted channel values marking a block without any opaque pixel
pub const UNUSABLE_SENTINEL: [u16; 3] = [1000, 1000, 1000];

/// Alpha value a pixel must carry to count as fully opaque
pub const OPAQUE_ALPHA: u8 = 255;

// Default values for configurable paths
/// Palette store file name
pub const DEFAULT_PALETTE_FILE: &str = "colors.json";

/// Representative color table file name
pub const DEFAULT_TABLE_FILE: &str = "block_colors.json";

/// Directory holding block textures
pub const DEFAULT_BLOCKS_DIR: &str = "blocks";

/// File extension of block textures
pub const DEFAULT_TILE_EXTENSION: &str = "png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
