//! CLI frontend for the parlor room engine.

mod commands;
mod parser;
mod resolver;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "parlor",
    about = "parlor — load a room, list its facts, and poke at its items",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log output (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

// Where to find the room.
#[derive(Args)]
struct Source {
    /// Room or world JSON file
    file: PathBuf,

    /// Room to use when the file holds a world (default: the first room)
    #[arg(short, long)]
    room: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a room and report whether it is valid
    Check {
        #[command(flatten)]
        source: Source,
    },

    /// Print the facts describing a room
    Facts {
        #[command(flatten)]
        source: Source,

        /// Item to start describing from
        #[arg(long, default_value = parlor_core::ROOM_ITEM)]
        root: String,
    },

    /// List the items in a room with their traits
    Items {
        #[command(flatten)]
        source: Source,
    },

    /// Execute a sequence of phrases such as "open drawer" and print the events
    Run {
        #[command(flatten)]
        source: Source,

        /// Print the room's facts after the last phrase
        #[arg(long)]
        facts: bool,

        /// Phrases to execute in order
        #[arg(required = true)]
        phrases: Vec<String>,
    },

    /// Read phrases from stdin until "quit"
    Play {
        #[command(flatten)]
        source: Source,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check { source } => commands::check::run(&source.file, source.room.as_deref()),
        Commands::Facts { source, root } => {
            commands::facts::run(&source.file, source.room.as_deref(), &root)
        }
        Commands::Items { source } => commands::items::run(&source.file, source.room.as_deref()),
        Commands::Run {
            source,
            facts,
            phrases,
        } => commands::run::run(&source.file, source.room.as_deref(), &phrases, facts),
        Commands::Play { source } => commands::play::run(&source.file, source.room.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
