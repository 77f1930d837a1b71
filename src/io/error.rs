//! Error types and path context for mosaic operations

use crate::analysis::table::TileId;
use crate::color::ColorKey;
use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Failed to load a skin or block image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Persisted palette or color table does not have the expected shape
    MalformedStore {
        /// Where the store lives (file path, or a label for in-memory stores)
        path: PathBuf,
        /// What is wrong with the content
        reason: String,
    },

    /// A skin pixel's color has no block assigned in the palette
    PaletteEntryMissing {
        /// Key of the unassigned color
        color: ColorKey,
        /// Source pixel (x, y) carrying the color
        position: (u32, u32),
    },

    /// Closest-block lookup against a table with no entries
    EmptyTileLibrary,

    /// Source skin doesn't meet the renderer's requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// A block texture cannot be pasted into the mosaic
    InvalidTile {
        /// Identifier of the offending block
        tile: TileId,
        /// Description of the problem
        reason: String,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::MalformedStore { path, reason } => {
                write!(f, "Malformed store '{}': {reason}", path.display())
            }
            Self::PaletteEntryMissing { color, position } => {
                write!(
                    f,
                    "No block assigned to color {color} (pixel {}, {})",
                    position.0, position.1
                )
            }
            Self::EmptyTileLibrary => {
                write!(f, "No blocks available to match against")
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidTile { tile, reason } => {
                write!(f, "Invalid block '{tile}': {reason}")
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Attaches the path and operation to bare I/O failures
pub trait WithPath<T> {
    /// Wrap an I/O error as [`MosaicError::FileSystem`]
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| MosaicError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create a malformed store error
pub fn malformed_store(path: &Path, reason: &impl ToString) -> MosaicError {
    MosaicError::MalformedStore {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Create an invalid source data error
pub fn invalid_source(reason: &impl ToString) -> MosaicError {
    MosaicError::InvalidSourceData {
        reason: reason.to_string(),
    }
}
