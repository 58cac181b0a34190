pub mod check;
pub mod facts;
pub mod items;
pub mod play;
pub mod run;

use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use parlor_core::{ActionResult, Event, ROOM_ITEM, Room, World};

/// Load a room from a room file, or pick one out of a world file.
///
/// A file whose top-level object has a `rooms` array is a world. Without
/// `room`, the world's first room is used.
fn load_room(file: &Path, room: Option<&str>) -> Result<Room, String> {
    let text = std::fs::read_to_string(file)
        .map_err(|e| format!("cannot read {}: {e}", file.display()))?;
    let value: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| format!("{}: {e}", file.display()))?;

    let is_world = value.get("rooms").is_some_and(serde_json::Value::is_array);
    if !is_world {
        let loaded = Room::from_json(&text).map_err(|e| format!("{}: {e}", file.display()))?;
        return match room {
            Some(name) if name != loaded.name() => Err(format!("room not found: \"{name}\"")),
            _ => Ok(loaded),
        };
    }

    let world = World::from_json(&text).map_err(|e| format!("{}: {e}", file.display()))?;
    match room {
        Some(name) => world.into_room(name).map_err(|e| e.to_string()),
        None => {
            let first = world
                .room_names()
                .next()
                .map(str::to_string)
                .ok_or_else(|| format!("{}: world has no rooms", file.display()))?;
            world.into_room(&first).map_err(|e| e.to_string())
        }
    }
}

/// Print facts, one per line.
fn print_facts(facts: &[String]) {
    for fact in facts {
        println!("  {fact}");
    }
}

/// Print the room's event log.
fn print_events(room: &Room) {
    if room.events().is_empty() {
        println!("  No events.");
        return;
    }
    for (i, event) in room.events().iter().enumerate() {
        println!("  {:>3}. {event}", i + 1);
    }
}

/// Print the outcome of one command.
fn print_outcome(result: &ActionResult<Event>) {
    match result {
        Ok(event) => println!("  {} {event}", "ok:".green()),
        Err(err) => println!("  {} {err}", "error:".red()),
    }
}

/// Print a table of the room's items, sorted by name.
fn print_items(room: &Room) {
    let mut items: Vec<_> = room
        .items()
        .iter()
        .filter(|item| item.name() != ROOM_ITEM)
        .collect();

    if items.is_empty() {
        println!("  No items.");
        return;
    }
    items.sort_by(|a, b| a.name().cmp(b.name()));

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Traits", "Description"]);

    for item in &items {
        let traits = if item.traits().is_empty() {
            "—".to_string()
        } else {
            item.traits().to_string()
        };
        let desc = item.description().unwrap_or("—");
        table.add_row(vec![item.name(), traits.as_str(), desc]);
    }

    println!("{table}");
    println!();
    println!("  {} items", items.len());
}
