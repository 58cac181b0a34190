//! Line-by-line play on stdin.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use parlor_core::Room;

use crate::parser::{Input, parse_input};
use crate::resolver::{resolve_command, resolve_item};

const HELP: &str = "\
  open <item>                 open something
  close <item>                close something
  take <item>                 take something
  unlock <item> with <item>   unlock something
  look [item]                 list facts, for the room or one item
  events                      list what has happened
  items                       list items and their traits
  quit                        leave";

pub fn run(file: &Path, room: Option<&str>) -> Result<(), String> {
    let mut room = super::load_room(file, room)?;

    println!("  {}", room.name().bold());
    println!("  Type \"help\" for commands, \"quit\" to leave.");
    println!();
    super::print_facts(&room.facts());

    let stdin = io::stdin();
    let mut lines = stdin.lock();
    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        let read = lines.read_line(&mut line).map_err(|e| e.to_string())?;
        if read == 0 || !step(&mut room, &line) {
            break;
        }
    }

    Ok(())
}

/// Handle one line of input. Returns false when the player quits.
fn step(room: &mut Room, line: &str) -> bool {
    match parse_input(line) {
        Input::Action(command) => {
            let command = resolve_command(room, command);
            super::print_outcome(&room.execute(command));
        }
        Input::Look { target: None } => super::print_facts(&room.facts()),
        Input::Look {
            target: Some(target),
        } => match resolve_item(room, &target) {
            Some(name) => super::print_facts(&room.facts_from(&name)),
            None => println!("  There is no [{target}] here."),
        },
        Input::Events => super::print_events(room),
        Input::Items => super::print_items(room),
        Input::Help => println!("{HELP}"),
        Input::Quit => {
            println!("  Goodbye.");
            return false;
        }
        Input::Unknown { input } => println!("  I don't understand: {input}"),
    }
    true
}
