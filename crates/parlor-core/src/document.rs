//! The JSON shape rooms and worlds are loaded from.
//!
//! ```json
//! {
//!   "name": "The First Room",
//!   "description": "a dusty study",
//!   "items": [{ "name": "key", "description": "a gold key", "traits": ["takeable"] }],
//!   "relationships": [{ "kind": "has", "source": "room", "target": "key" }]
//! }
//! ```
//!
//! `relationship` is accepted in place of `kind` and wins when both are
//! given. Items may name the item that unlocks them with `"key"`.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{LoadError, LoadResult};
use crate::item::{Item, ItemRegistry};
use crate::relationship::Relationship;
use crate::room::{ROOM_ITEM, Room};

/// A room as written in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDocument {
    /// The room's name.
    pub name: String,
    /// The room's description, attached to the synthetic room item.
    pub description: String,
    /// Items in the room.
    #[serde(default)]
    pub items: Vec<Item>,
    /// Relationships between items, in fact order.
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

/// Several independent rooms in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldDocument {
    /// Optional name of the world.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The rooms, in order.
    pub rooms: Vec<RoomDocument>,
}

/// Read and parse a JSON document from disk.
pub(crate) fn read_document<T: DeserializeOwned>(path: &Path) -> LoadResult<T> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

impl Room {
    /// Build a room from a parsed document.
    pub fn from_document(doc: RoomDocument) -> LoadResult<Self> {
        let mut items = ItemRegistry::new();
        for item in doc.items {
            let name = item.name().to_string();
            if items.add(item).is_some() {
                log::warn!("room \"{}\": duplicate item [{name}], keeping the last", doc.name);
            }
        }
        Self::new(doc.name, doc.description, items, doc.relationships)
    }

    /// Parse a room from a JSON string.
    pub fn from_json(json: &str) -> LoadResult<Self> {
        Self::from_document(serde_json::from_str(json)?)
    }

    /// Load a room from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> LoadResult<Self> {
        let path = path.as_ref();
        log::debug!("loading room from {}", path.display());
        Self::from_document(read_document(path)?)
    }

    /// Capture the room's current state as a document.
    ///
    /// Items appear sorted by name; the synthetic room item is left out.
    /// Reloading the document reproduces the same facts. The event log is
    /// not part of the document.
    pub fn to_document(&self) -> RoomDocument {
        let mut items: Vec<Item> = self
            .items()
            .iter()
            .filter(|item| item.name() != ROOM_ITEM)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.name().cmp(b.name()));

        RoomDocument {
            name: self.name().to_string(),
            description: self.description().to_string(),
            items,
            relationships: self.relationships().to_vec(),
        }
    }
}
