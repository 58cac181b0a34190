use std::fmt;

use serde::{Deserialize, Serialize};

/// An immutable record of a command that succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// An item was opened.
    Opened {
        /// The opened item.
        target: String,
    },
    /// An item was closed.
    Closed {
        /// The closed item.
        target: String,
    },
    /// An item was unlocked with another item.
    Unlocked {
        /// The unlocked item.
        target: String,
        /// The item used as the key.
        using: String,
    },
    /// An item was taken.
    Taken {
        /// The taken item.
        target: String,
    },
}

impl Event {
    /// The item the event happened to.
    pub fn target(&self) -> &str {
        match self {
            Self::Opened { target }
            | Self::Closed { target }
            | Self::Unlocked { target, .. }
            | Self::Taken { target } => target,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opened { target } => write!(f, "opened [{target}]"),
            Self::Closed { target } => write!(f, "closed [{target}]"),
            Self::Unlocked { target, using } => write!(f, "unlocked [{target}] using [{using}]"),
            Self::Taken { target } => write!(f, "took [{target}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_of_each_variant() {
        let unlocked = Event::Unlocked {
            target: "door".into(),
            using: "key".into(),
        };
        assert_eq!(unlocked.target(), "door");
        assert_eq!(Event::Taken { target: "key".into() }.target(), "key");
    }

    #[test]
    fn display_names_items_in_brackets() {
        let event = Event::Unlocked {
            target: "door".into(),
            using: "key".into(),
        };
        assert_eq!(event.to_string(), "unlocked [door] using [key]");
    }

    #[test]
    fn serializes_with_event_tag() {
        let json = serde_json::to_value(Event::Opened {
            target: "drawer".into(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"event": "opened", "target": "drawer"}));
    }
}
