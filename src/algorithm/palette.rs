//! Skin color to block assignments
//!
//! Persisted as a JSON object of `"#rrggbb": "block"` pairs so the file can be
//! edited by hand between preparation and rendering.

use crate::analysis::table::TileId;
use crate::color::{ColorKey, Rgb};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

/// Mapping from opaque skin colors to block identifiers
///
/// The transparent sentinel is never a key: transparent pixels are skipped
/// during rendering and need no block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    assignments: BTreeMap<Rgb, TileId>,
}

impl Palette {
    /// Create an empty palette
    pub const fn new() -> Self {
        Self {
            assignments: BTreeMap::new(),
        }
    }

    /// Assign `tile` to `color`, returning the previous assignment
    pub fn insert(&mut self, color: Rgb, tile: TileId) -> Option<TileId> {
        self.assignments.insert(color, tile)
    }

    /// Block assigned to an opaque color
    pub fn get(&self, color: Rgb) -> Option<&TileId> {
        self.assignments.get(&color)
    }

    /// Block assigned to a color key; always `None` for transparent keys
    pub fn lookup(&self, key: ColorKey) -> Option<&TileId> {
        key.rgb().and_then(|rgb| self.get(rgb))
    }

    /// Assignments in ascending color order
    pub fn iter(&self) -> impl Iterator<Item = (Rgb, &TileId)> {
        self.assignments.iter().map(|(&rgb, tile)| (rgb, tile))
    }

    /// Number of assigned colors
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Check whether no color is assigned
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl FromIterator<(Rgb, TileId)> for Palette {
    fn from_iter<I: IntoIterator<Item = (Rgb, TileId)>>(iter: I) -> Self {
        Self {
            assignments: iter.into_iter().collect(),
        }
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.assignments.len()))?;
        for (rgb, tile) in &self.assignments {
            map.serialize_entry(&rgb.to_string(), tile)?;
        }
        map.end()
    }
}

struct PaletteVisitor;

impl<'de> Visitor<'de> for PaletteVisitor {
    type Value = Palette;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map of '#rrggbb' colors to block names")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut assignments = BTreeMap::new();
        while let Some((key, tile)) = access.next_entry::<String, TileId>()? {
            let parsed = key
                .parse::<ColorKey>()
                .map_err(<A::Error as de::Error>::custom)?;
            let color = match parsed {
                ColorKey::Opaque(rgb) => rgb,
                ColorKey::Transparent => {
                    log::warn!("Ignoring palette entry for transparent pixels ('{tile}')");
                    continue;
                }
            };

            match assignments.entry(color) {
                Entry::Vacant(slot) => {
                    slot.insert(tile);
                }
                Entry::Occupied(_) => {
                    return Err(de::Error::custom(format!(
                        "color {color} is assigned more than once"
                    )));
                }
            }
        }
        Ok(Palette { assignments })
    }
}

impl<'de> Deserialize<'de> for Palette {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PaletteVisitor)
    }
}
