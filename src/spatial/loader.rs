//! Block texture sources for the mosaic renderer

use crate::analysis::table::TileId;
use crate::io::error::Result;
use crate::io::image::{list_files, open_rgba};
use image::RgbaImage;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Provides the texture for a block identifier
pub trait TileLoader {
    /// Load the texture of `tile`
    ///
    /// # Errors
    ///
    /// Returns an error if the texture cannot be found or decoded
    fn load(&mut self, tile: &TileId) -> Result<RgbaImage>;
}

/// Reads block textures from a directory on every request
///
/// Identifiers resolve against the directory listing the same way the table
/// builder scans it: the extension matches regardless of case, and when two
/// files share a stem the first in sorted order wins. Identifiers missing
/// from the listing fall back to `<directory>/<tile>.<extension>`.
#[derive(Debug, Clone)]
pub struct DirectoryTileLoader {
    directory: PathBuf,
    extension: String,
    index: Option<HashMap<TileId, PathBuf>>,
}

fn index_directory(directory: &Path, extension: &str) -> HashMap<TileId, PathBuf> {
    let mut index = HashMap::new();
    match list_files(directory, extension) {
        Ok(files) => {
            for path in files {
                index.entry(TileId::from_path(&path)).or_insert(path);
            }
        }
        Err(err) => log::debug!("Block directory not indexed: {err}"),
    }
    index
}

impl DirectoryTileLoader {
    /// Create a loader for textures stored in `directory`
    pub fn new(directory: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            extension: extension.into(),
            index: None,
        }
    }

    /// Directory holding the textures
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Conventional path of `tile`, with the extension as configured
    pub fn path_for(&self, tile: &TileId) -> PathBuf {
        self.directory
            .join(format!("{}.{}", tile.as_str(), self.extension))
    }

    /// File the texture of `tile` is actually read from
    ///
    /// The directory is listed once, on the first call.
    pub fn resolve(&mut self, tile: &TileId) -> PathBuf {
        let index = self
            .index
            .get_or_insert_with(|| index_directory(&self.directory, &self.extension));
        let found = index.get(tile).cloned();
        found.unwrap_or_else(|| self.path_for(tile))
    }
}

impl TileLoader for DirectoryTileLoader {
    fn load(&mut self, tile: &TileId) -> Result<RgbaImage> {
        let path = self.resolve(tile);
        open_rgba(&path)
    }
}

/// Memoises decoded textures of another loader
///
/// Failed loads are not cached, so a later request retries the inner loader.
#[derive(Debug)]
pub struct CachedTileLoader<L> {
    inner: L,
    cache: HashMap<TileId, RgbaImage>,
}

impl<L: TileLoader> CachedTileLoader<L> {
    /// Wrap `inner` with an empty cache
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            cache: HashMap::new(),
        }
    }

    /// Number of distinct textures decoded so far
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    /// Give back the wrapped loader, dropping the cache
    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<L: TileLoader> TileLoader for CachedTileLoader<L> {
    fn load(&mut self, tile: &TileId) -> Result<RgbaImage> {
        if let Some(texture) = self.cache.get(tile) {
            return Ok(texture.clone());
        }

        let texture = self.inner.load(tile)?;
        self.cache.insert(tile.clone(), texture.clone());
        Ok(texture)
    }
}
