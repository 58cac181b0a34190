//! Phrase parsing for typed input.

use parlor_core::Command;

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// A command for the room.
    Action(Command),
    /// Print facts, for the whole room or starting at an item.
    Look {
        /// Optional item to describe.
        target: Option<String>,
    },
    /// Print the event log.
    Events,
    /// Print the item table.
    Items,
    /// Show help.
    Help,
    /// Stop reading input.
    Quit,
    /// Input that matched nothing.
    Unknown {
        /// The input as typed, or a question about what is missing.
        input: String,
    },
}

const OPEN_VERBS: &[&str] = &["open"];
const CLOSE_VERBS: &[&str] = &["close", "shut"];
const TAKE_VERBS: &[&str] = &["take", "get", "grab", "pick"];
const UNLOCK_VERBS: &[&str] = &["unlock"];
const LOOK_VERBS: &[&str] = &["look", "l", "facts", "examine", "x"];
const EVENTS_VERBS: &[&str] = &["events", "history"];
const ITEMS_VERBS: &[&str] = &["items"];
const HELP_VERBS: &[&str] = &["help", "h", "?"];
const QUIT_VERBS: &[&str] = &["quit", "q", "exit"];

const ARTICLES: &[&str] = &["the", "a", "an"];

/// Parse a line of input.
pub fn parse_input(input: &str) -> Input {
    let input = input.trim();
    if input.is_empty() {
        return Input::Look { target: None };
    }

    let words: Vec<&str> = input.split_whitespace().collect();
    let verb = words[0].to_lowercase();
    let rest = &words[1..];

    if OPEN_VERBS.contains(&verb.as_str()) {
        return object(rest, "open what?").map_or_else(unknown, |t| Input::Action(Command::open(t)));
    }
    if CLOSE_VERBS.contains(&verb.as_str()) {
        return object(rest, "close what?")
            .map_or_else(unknown, |t| Input::Action(Command::close(t)));
    }
    if TAKE_VERBS.contains(&verb.as_str()) {
        return parse_take(rest);
    }
    if UNLOCK_VERBS.contains(&verb.as_str()) {
        return parse_unlock(rest);
    }
    if LOOK_VERBS.contains(&verb.as_str()) {
        return parse_look(rest);
    }
    if EVENTS_VERBS.contains(&verb.as_str()) {
        return Input::Events;
    }
    if ITEMS_VERBS.contains(&verb.as_str()) {
        return Input::Items;
    }
    if HELP_VERBS.contains(&verb.as_str()) {
        return Input::Help;
    }
    if QUIT_VERBS.contains(&verb.as_str()) {
        return Input::Quit;
    }

    Input::Unknown {
        input: input.to_string(),
    }
}

fn unknown(question: &'static str) -> Input {
    Input::Unknown {
        input: question.to_string(),
    }
}

/// Join the words into an item name, dropping a leading article.
fn item_name(words: &[&str]) -> Option<String> {
    let words = match words.first() {
        Some(first) if ARTICLES.iter().any(|a| first.eq_ignore_ascii_case(a)) => &words[1..],
        _ => words,
    };
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn object(words: &[&str], question: &'static str) -> Result<String, &'static str> {
    item_name(words).ok_or(question)
}

fn parse_take(rest: &[&str]) -> Input {
    // Skip "up" (pick up)
    let words = match rest.first() {
        Some(w) if w.eq_ignore_ascii_case("up") => &rest[1..],
        _ => rest,
    };
    object(words, "take what?").map_or_else(unknown, |t| Input::Action(Command::take(t)))
}

fn parse_unlock(rest: &[&str]) -> Input {
    let Some(split) = rest
        .iter()
        .position(|w| w.eq_ignore_ascii_case("with") || w.eq_ignore_ascii_case("using"))
    else {
        return match item_name(rest) {
            Some(_) => unknown("unlock it with what?"),
            None => unknown("unlock what?"),
        };
    };

    match (item_name(&rest[..split]), item_name(&rest[split + 1..])) {
        (Some(target), Some(using)) => Input::Action(Command::unlock(target, using)),
        (None, _) => unknown("unlock what?"),
        (Some(_), None) => unknown("unlock it with what?"),
    }
}

fn parse_look(rest: &[&str]) -> Input {
    // Skip "at" if present
    let words = match rest.first() {
        Some(w) if w.eq_ignore_ascii_case("at") => &rest[1..],
        _ => rest,
    };
    Input::Look {
        target: item_name(words),
    }
}
