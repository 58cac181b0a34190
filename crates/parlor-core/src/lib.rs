//! Core rule engine for parlor: items built from traits, relationships
//! between them, and rooms that derive facts and execute commands.
//!
//! A [`Room`] owns its items and the relationships that connect them. Callers
//! issue [`Command`]s through [`Room::execute`], read the resulting
//! [`Event`] log, and ask [`Room::facts`] for a fresh description of the room
//! at any time. Rooms are loaded from JSON (see [`document`]) or built
//! programmatically.
//!
//! Everything here is synchronous and single-threaded. A room belongs to one
//! session at a time.

/// Commands callers issue against a room.
pub mod command;
/// The JSON document shape for rooms and worlds.
pub mod document;
/// Error types used throughout the crate.
pub mod error;
/// Events recorded when commands succeed.
pub mod event;
/// Items, their derived predicates and actions, and the item registry.
pub mod item;
/// Relationship edges between items.
pub mod relationship;
/// Rooms: fact derivation and command execution.
pub mod room;
/// The closed vocabulary of item traits.
pub mod traits;
/// Several rooms loaded together.
pub mod world;

/// Re-export command types.
pub use command::Command;
/// Re-export document types.
pub use document::{RoomDocument, WorldDocument};
/// Re-export error types.
pub use error::{ActionError, ActionResult, LoadError, LoadResult};
/// Re-export event types.
pub use event::Event;
/// Re-export item types.
pub use item::{Item, ItemRegistry};
/// Re-export relationship types.
pub use relationship::{Relationship, RelationshipKind};
/// Re-export room types.
pub use room::{ROOM_ITEM, Room};
/// Re-export trait types.
pub use traits::{Trait, TraitSet};
/// Re-export world types.
pub use world::World;
