use std::collections::HashMap;

use log::{debug, trace, warn};

use crate::command::Command;
use crate::error::{ActionError, ActionResult, LoadError, LoadResult};
use crate::event::Event;
use crate::item::{Item, ItemRegistry};
use crate::relationship::{Relationship, RelationshipKind};

/// Name of the synthetic item standing for the room itself.
///
/// It carries the room's description and is the default root of
/// [`Room::facts`].
pub const ROOM_ITEM: &str = "room";

/// A room: its items, the relationships between them, and the log of what
/// has happened so far.
///
/// Items and relationships are fixed at construction. Afterwards only item
/// trait sets change, and only through [`Room::execute`].
#[derive(Debug, Clone)]
pub struct Room {
    name: String,
    description: String,
    items: ItemRegistry,
    relationships: Vec<Relationship>,
    events: Vec<Event>,
    // Reserved for player-held items.
    inventory: Vec<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
}

impl Room {
    /// Build a room from its items and relationships.
    ///
    /// Inserts the synthetic [`ROOM_ITEM`] (replacing any item of that name)
    /// and rejects a relationship graph that loops back on itself. Names the
    /// registry does not know are accepted and resolved lazily.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        mut items: ItemRegistry,
        relationships: Vec<Relationship>,
    ) -> LoadResult<Self> {
        let name = name.into();
        let description = description.into();

        let room_item = Item::new(ROOM_ITEM).with_description(description.clone());
        if items.add(room_item).is_some() {
            warn!("room \"{name}\": item named \"{ROOM_ITEM}\" replaced by the room itself");
        }

        for rel in &relationships {
            for end in [&rel.source, &rel.target] {
                if !items.contains(end) {
                    warn!("room \"{name}\": relationship \"{}\" names unknown item [{end}]", rel.fact());
                }
            }
        }

        let room = Self {
            name,
            description,
            items,
            relationships,
            events: Vec::new(),
            inventory: Vec::new(),
        };

        if let Some(item) = room.find_cycle() {
            return Err(LoadError::Cycle {
                item: item.to_string(),
            });
        }

        Ok(room)
    }

    // -----------------------------------------------------------------------
    // Introspection
    // -----------------------------------------------------------------------

    /// The room's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The room's description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Look up an item by name.
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    /// The registry of all items, including the synthetic room item.
    pub fn items(&self) -> &ItemRegistry {
        &self.items
    }

    /// All relationships, in the order they were given.
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Every event recorded so far, oldest first.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Items held by the player. Always empty for now.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    // -----------------------------------------------------------------------
    // Facts
    // -----------------------------------------------------------------------

    /// Describe the whole room, starting from [`ROOM_ITEM`].
    pub fn facts(&self) -> Vec<String> {
        self.facts_from(ROOM_ITEM)
    }

    /// Describe `root` and everything reachable from it.
    ///
    /// Walks `has` and `contains` edges depth-first in relationship order.
    /// A closed item hides its `contains` edges and everything behind them.
    /// `supports` edges are not walked.
    pub fn facts_from(&self, root: &str) -> Vec<String> {
        let mut facts = Vec::new();
        self.describe(root, &mut facts);
        trace!("room \"{}\": {} facts from [{root}]", self.name, facts.len());
        facts
    }

    fn describe(&self, name: &str, facts: &mut Vec<String>) {
        let Some(item) = self.items.get(name) else {
            warn!("room \"{}\": cannot describe unknown item [{name}]", self.name);
            return;
        };

        facts.push(format!(
            "The [{name}] can be described as '{}'",
            item.description().unwrap_or_default()
        ));
        if item.is_closed() {
            facts.push(format!("The [{name}] is closed"));
        }
        if item.is_open() {
            facts.push(format!("The [{name}] is open"));
        }
        if item.is_locked() {
            facts.push(format!("The [{name}] is locked"));
        }

        let mut children: Vec<&str> = Vec::new();
        for rel in self.relationships.iter().filter(|r| r.source == name) {
            let visible = match rel.kind {
                RelationshipKind::Has => true,
                RelationshipKind::Contains => !item.is_closed(),
                RelationshipKind::Supports => false,
            };
            if !visible {
                continue;
            }
            facts.push(rel.fact());
            if !children.contains(&rel.target.as_str()) {
                children.push(&rel.target);
            }
        }

        for child in children {
            self.describe(child, facts);
        }
    }

    /// Returns an item on a `has`/`contains` cycle, if there is one.
    fn find_cycle(&self) -> Option<&str> {
        let mut marks: HashMap<&str, Mark> = HashMap::new();
        self.relationships
            .iter()
            .find_map(|rel| self.visit(&rel.source, &mut marks))
    }

    fn visit<'a>(&'a self, node: &'a str, marks: &mut HashMap<&'a str, Mark>) -> Option<&'a str> {
        match marks.get(node) {
            Some(Mark::Visiting) => return Some(node),
            Some(Mark::Done) => return None,
            None => {}
        }
        marks.insert(node, Mark::Visiting);
        let found = self
            .relationships
            .iter()
            .filter(|rel| rel.source == node && rel.is_structural())
            .find_map(|rel| self.visit(&rel.target, marks));
        if found.is_none() {
            marks.insert(node, Mark::Done);
        }
        found
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Execute a command and record its event on success.
    ///
    /// Failures are returned to the caller and leave the event log untouched.
    pub fn execute(&mut self, command: Command) -> ActionResult<Event> {
        let result = self.apply(&command);
        match &result {
            Ok(event) => debug!("room \"{}\": {command} -> {event}", self.name),
            Err(err) => debug!("room \"{}\": {command} failed: {err}", self.name),
        }
        self.record(result.iter().cloned());
        result
    }

    fn apply(&mut self, command: &Command) -> ActionResult<Event> {
        match command {
            Command::Open { target } => self.resolve_mut(target)?.open(),
            Command::Close { target } => self.resolve_mut(target)?.close(),
            Command::Take { target } => self.resolve_mut(target)?.take(),
            Command::Unlock { target, using } => {
                if !self.items.contains(target) {
                    return Err(ActionError::UnknownTarget(target.clone()));
                }
                if !self.items.contains(using) {
                    return Err(ActionError::UnknownTarget(using.clone()));
                }
                self.resolve_mut(target)?.unlock(using)
            }
        }
    }

    fn resolve_mut(&mut self, name: &str) -> ActionResult<&mut Item> {
        self.items
            .get_mut(name)
            .ok_or_else(|| ActionError::UnknownTarget(name.to_string()))
    }

    fn record(&mut self, events: impl IntoIterator<Item = Event>) {
        self.events.extend(events);
    }
}
