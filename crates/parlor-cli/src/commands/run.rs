//! Execute phrases given on the command line.

use std::path::Path;

use crate::parser::{Input, parse_input};
use crate::resolver::resolve_command;

pub fn run(
    file: &Path,
    room: Option<&str>,
    phrases: &[String],
    show_facts: bool,
) -> Result<(), String> {
    let mut room = super::load_room(file, room)?;

    for phrase in phrases {
        println!("> {phrase}");
        match parse_input(phrase) {
            Input::Action(command) => {
                let command = resolve_command(&room, command);
                super::print_outcome(&room.execute(command));
            }
            Input::Unknown { input } => return Err(format!("cannot understand \"{input}\"")),
            _ => return Err(format!("not a room command: \"{phrase}\"")),
        }
    }

    println!();
    println!("  Events:");
    super::print_events(&room);

    if show_facts {
        println!();
        println!("  Facts:");
        super::print_facts(&room.facts());
    }

    Ok(())
}
