//! Raster loading, saving and pasting for skins, blocks and mosaics

use crate::io::error::{MosaicError, Result, WithPath};
use image::{RgbaImage, imageops};
use std::path::{Path, PathBuf};

/// Load any supported image and convert it to 8-bit RGBA
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn open_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgba8())
}

/// Save an RGBA image, creating the parent directory when needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn save_rgba(img: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    img.save(path).map_err(|e| MosaicError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Copy `src` into `dest` with its top-left corner at `offset`
///
/// Every channel is replaced, alpha included; nothing is blended. Parts of
/// `src` falling outside `dest` are clipped.
pub fn paste(dest: &mut RgbaImage, src: &RgbaImage, offset: (u32, u32)) {
    imageops::replace(dest, src, i64::from(offset.0), i64::from(offset.1));
}

/// List the files in `directory` whose extension matches, sorted by path
///
/// The extension comparison ignores ASCII case.
///
/// # Errors
///
/// Returns an error if the directory or one of its entries cannot be read
pub fn list_files(directory: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(directory).with_path(directory, "read directory")? {
        let path = entry.with_path(directory, "read directory entry")?.path();
        let matches = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
