//! Item name resolution with fuzzy matching.

use parlor_core::{Command, Room};
use strsim::jaro_winkler;

/// Minimum similarity score for fuzzy matching (0.0-1.0).
const FUZZY_THRESHOLD: f64 = 0.8;

/// Resolve typed text to the name of an item in the room.
///
/// Tries an exact match, then a case-insensitive one, then the closest name
/// above the fuzzy threshold. Returns `None` when nothing is close.
pub fn resolve_item(room: &Room, input: &str) -> Option<String> {
    if room.item(input).is_some() {
        return Some(input.to_string());
    }

    let input_lower = input.to_lowercase();
    let same_case = room
        .items()
        .names()
        .filter(|name| name.to_lowercase() == input_lower)
        .min();
    if let Some(name) = same_case {
        return Some(name.to_string());
    }

    let mut best: Option<(&str, f64)> = None;
    for name in room.items().names() {
        let name_lower = name.to_lowercase();
        let score = jaro_winkler(&input_lower, &name_lower);
        // Ties go to the alphabetically first name so the pick is stable.
        let better = match best {
            None => true,
            Some((best_name, best_score)) => {
                score > best_score || (score == best_score && name < best_name)
            }
        };
        if score >= FUZZY_THRESHOLD && better {
            best = Some((name, score));
        }
    }
    best.map(|(name, _)| name.to_string())
}

/// Replace the item names in a command with resolved names.
///
/// Unresolved names pass through unchanged so the room reports them.
pub fn resolve_command(room: &Room, command: Command) -> Command {
    let resolve = |name: String| resolve_item(room, &name).unwrap_or(name);
    match command {
        Command::Open { target } => Command::Open {
            target: resolve(target),
        },
        Command::Close { target } => Command::Close {
            target: resolve(target),
        },
        Command::Take { target } => Command::Take {
            target: resolve(target),
        },
        Command::Unlock { target, using } => Command::Unlock {
            target: resolve(target),
            using: resolve(using),
        },
    }
}
