//! JSON persistence for palettes and representative color tables
//!
//! Both stores write pretty-printed JSON with two-space indentation. Parse
//! failures and shape mismatches surface as [`MosaicError::MalformedStore`];
//! a missing or unreadable file is a file system error.

use crate::io::error::{MosaicError, Result, WithPath, malformed_store};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Load and save one persisted value
pub trait Store<T> {
    /// Read the stored value
    ///
    /// # Errors
    ///
    /// Returns an error if the content is missing, unreadable or malformed
    fn load(&self) -> Result<T>;

    /// Replace the stored value
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized or written
    fn save(&mut self, value: &T) -> Result<()>;
}

fn to_json<T: Serialize>(value: &T, location: &Path) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| malformed_store(location, &e))
}

fn from_json<T: DeserializeOwned>(text: &str, location: &Path) -> Result<T> {
    serde_json::from_str(text).map_err(|e| malformed_store(location, &e))
}

/// Value stored as a JSON file at an explicit path
#[derive(Debug, Clone)]
pub struct JsonFileStore<T> {
    path: PathBuf,
    marker: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    /// Create a store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            marker: PhantomData,
        }
    }

    /// File backing the store
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T: Serialize + DeserializeOwned> Store<T> for JsonFileStore<T> {
    fn load(&self) -> Result<T> {
        let text = std::fs::read_to_string(&self.path).with_path(&self.path, "read store")?;
        let value = from_json(&text, &self.path)?;
        log::debug!("Loaded store '{}'", self.path.display());
        Ok(value)
    }

    fn save(&mut self, value: &T) -> Result<()> {
        let mut text = to_json(value, &self.path)?;
        text.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
        }
        std::fs::write(&self.path, text).with_path(&self.path, "write store")?;
        log::debug!("Saved store '{}'", self.path.display());
        Ok(())
    }
}

/// Value stored as JSON text in memory
///
/// Goes through the same serialization as [`JsonFileStore`], without touching
/// the filesystem.
#[derive(Debug, Clone)]
pub struct MemoryStore<T> {
    label: PathBuf,
    text: Option<String>,
    marker: PhantomData<fn() -> T>,
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            label: PathBuf::from("<memory>"),
            text: None,
            marker: PhantomData,
        }
    }

    /// Create a store preloaded with raw JSON text
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new()
        }
    }

    /// Raw JSON text currently held
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl<T: Serialize + DeserializeOwned> Store<T> for MemoryStore<T> {
    fn load(&self) -> Result<T> {
        let text = self
            .text
            .as_deref()
            .ok_or_else(|| MosaicError::FileSystem {
                path: self.label.clone(),
                operation: "read store",
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "nothing saved yet"),
            })?;
        from_json(text, &self.label)
    }

    fn save(&mut self, value: &T) -> Result<()> {
        self.text = Some(to_json(value, &self.label)?);
        Ok(())
    }
}
