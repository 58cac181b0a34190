use std::path::Path;

use crate::document::{WorldDocument, read_document};
use crate::error::{LoadError, LoadResult};
use crate::room::Room;

/// A set of independent rooms loaded from one document.
///
/// Rooms keep their own items, relationships and event logs; nothing links
/// one room to another.
#[derive(Debug, Clone, Default)]
pub struct World {
    name: Option<String>,
    rooms: Vec<Room>,
}

impl World {
    /// Build a world from already constructed rooms.
    pub fn new(name: Option<String>, rooms: Vec<Room>) -> Self {
        Self { name, rooms }
    }

    /// Build a world from a parsed document. Fails on the first bad room.
    pub fn from_document(doc: WorldDocument) -> LoadResult<Self> {
        let rooms = doc
            .rooms
            .into_iter()
            .map(Room::from_document)
            .collect::<LoadResult<Vec<_>>>()?;
        Ok(Self::new(doc.name, rooms))
    }

    /// Parse a world from a JSON string.
    pub fn from_json(json: &str) -> LoadResult<Self> {
        Self::from_document(serde_json::from_str(json)?)
    }

    /// Load a world from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> LoadResult<Self> {
        let path = path.as_ref();
        log::debug!("loading world from {}", path.display());
        Self::from_document(read_document(path)?)
    }

    /// The world's name, if the document gave one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// All rooms, in document order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Room names, in document order.
    pub fn room_names(&self) -> impl Iterator<Item = &str> {
        self.rooms.iter().map(Room::name)
    }

    /// Find a room by name.
    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.name() == name)
    }

    /// Find a room by name for executing commands.
    pub fn room_mut(&mut self, name: &str) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.name() == name)
    }

    /// Take one room out of the world.
    pub fn into_room(self, name: &str) -> LoadResult<Room> {
        self.rooms
            .into_iter()
            .find(|r| r.name() == name)
            .ok_or_else(|| LoadError::UnknownRoom(name.to_string()))
    }
}
