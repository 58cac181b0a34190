use std::fmt;

use serde::{Deserialize, Serialize};

/// A caller-issued intent to change the state of a room.
///
/// The set is closed: [`Room::execute`](crate::Room::execute) handles every
/// variant, so there is no "invalid command" at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Open an item.
    Open {
        /// The item to open.
        target: String,
    },
    /// Close an item.
    Close {
        /// The item to close.
        target: String,
    },
    /// Unlock an item with another item.
    Unlock {
        /// The item to unlock.
        target: String,
        /// The item used as the key.
        using: String,
    },
    /// Take an item.
    Take {
        /// The item to take.
        target: String,
    },
}

impl Command {
    /// Build an `Open` command.
    pub fn open(target: impl Into<String>) -> Self {
        Self::Open {
            target: target.into(),
        }
    }

    /// Build a `Close` command.
    pub fn close(target: impl Into<String>) -> Self {
        Self::Close {
            target: target.into(),
        }
    }

    /// Build an `Unlock` command.
    pub fn unlock(target: impl Into<String>, using: impl Into<String>) -> Self {
        Self::Unlock {
            target: target.into(),
            using: using.into(),
        }
    }

    /// Build a `Take` command.
    pub fn take(target: impl Into<String>) -> Self {
        Self::Take {
            target: target.into(),
        }
    }

    /// The item the command acts on.
    pub fn target(&self) -> &str {
        match self {
            Self::Open { target }
            | Self::Close { target }
            | Self::Unlock { target, .. }
            | Self::Take { target } => target,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { target } => write!(f, "open [{target}]"),
            Self::Close { target } => write!(f, "close [{target}]"),
            Self::Unlock { target, using } => write!(f, "unlock [{target}] using [{using}]"),
            Self::Take { target } => write!(f, "take [{target}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_fill_fields() {
        assert_eq!(
            Command::unlock("door", "key"),
            Command::Unlock {
                target: "door".to_string(),
                using: "key".to_string()
            }
        );
        assert_eq!(Command::close("lid").target(), "lid");
    }

    #[test]
    fn deserializes_from_tagged_json() {
        let cmd: Command =
            serde_json::from_str(r#"{"command": "take", "target": "key"}"#).unwrap();
        assert_eq!(cmd, Command::take("key"));
        assert!(serde_json::from_str::<Command>(r#"{"command": "dance"}"#).is_err());
    }
}
