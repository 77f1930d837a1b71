//! Block identifiers and the insertion-ordered representative color table
//!
//! Table order is significant: the closest-block search keeps the first entry
//! reaching the minimum distance, so the table must iterate in a stable order
//! and its persisted form must reload in the same order it was written.

use crate::color::Rgb;
use crate::io::configuration::UNUSABLE_SENTINEL;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::Path;

/// Name of a block texture, its file stem without extension
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(String);

impl TileId {
    /// Create an identifier from a file stem
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Identifier of the texture stored at `path`
    pub fn from_path(path: &Path) -> Self {
        Self::new(path.file_stem().unwrap_or_default().to_string_lossy())
    }

    /// Identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TileId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Representative color of one block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileColor {
    /// Average color of a block with at least one fully opaque pixel
    Usable(Rgb),
    /// Block without any fully opaque pixel
    Unusable,
}

impl TileColor {
    /// Channel values used for distance comparisons
    ///
    /// Unusable blocks take the out-of-range sentinel, which keeps them behind
    /// every usable block for any target.
    pub fn channels(self) -> [u16; 3] {
        match self {
            Self::Usable(rgb) => rgb.channels().map(u16::from),
            Self::Unusable => UNUSABLE_SENTINEL,
        }
    }

    /// L1 distance from `target`
    pub fn distance(self, target: Rgb) -> u32 {
        self.channels()
            .iter()
            .zip(target.channels().iter())
            .map(|(&channel, &wanted)| u32::from(channel.abs_diff(u16::from(wanted))))
            .sum()
    }

    /// Check whether the block can be a sensible match
    pub const fn is_usable(self) -> bool {
        matches!(self, Self::Usable(_))
    }
}

impl Serialize for TileColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.channels().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TileColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let channels: [i64; 3] = Deserialize::deserialize(deserializer)?;
        if channels == UNUSABLE_SENTINEL.map(i64::from) {
            return Ok(Self::Unusable);
        }

        let mut rgb = [0u8; 3];
        for (slot, value) in rgb.iter_mut().zip(channels) {
            *slot = u8::try_from(value).map_err(|err| {
                <D::Error as de::Error>::custom(format!(
                    "channel {value} out of range in {channels:?}: {err}"
                ))
            })?;
        }
        Ok(Self::Usable(Rgb::from(rgb)))
    }
}

/// Block identifier to representative color, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepresentativeColorTable {
    entries: Vec<(TileId, TileColor)>,
}

impl RepresentativeColorTable {
    /// Create an empty table
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a block, or replace the color of a known block in place
    pub fn insert(&mut self, tile: TileId, color: TileColor) {
        if let Some(entry) = self.entries.iter_mut().find(|(id, _)| *id == tile) {
            entry.1 = color;
        } else {
            self.entries.push((tile, color));
        }
    }

    /// Color recorded for `tile`
    pub fn get(&self, tile: &TileId) -> Option<TileColor> {
        self.entries
            .iter()
            .find(|(id, _)| id == tile)
            .map(|&(_, color)| color)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&TileId, TileColor)> {
        self.entries.iter().map(|(id, color)| (id, *color))
    }

    /// Number of blocks in the table
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table has no blocks
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of blocks with a usable color
    pub fn usable_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, color)| color.is_usable())
            .count()
    }
}

impl FromIterator<(TileId, TileColor)> for RepresentativeColorTable {
    fn from_iter<I: IntoIterator<Item = (TileId, TileColor)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (tile, color) in iter {
            table.insert(tile, color);
        }
        table
    }
}

impl Serialize for RepresentativeColorTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (tile, color) in &self.entries {
            map.serialize_entry(tile, color)?;
        }
        map.end()
    }
}

struct TableVisitor;

impl<'de> Visitor<'de> for TableVisitor {
    type Value = RepresentativeColorTable;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map of block names to [r, g, b] arrays")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = RepresentativeColorTable::new();
        while let Some((tile, color)) = access.next_entry::<TileId, TileColor>()? {
            if table.get(&tile).is_some() {
                return Err(de::Error::custom(format!("duplicate block '{tile}'")));
            }
            table.insert(tile, color);
        }
        Ok(table)
    }
}

impl<'de> Deserialize<'de> for RepresentativeColorTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TableVisitor)
    }
}
