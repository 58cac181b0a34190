use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// A boolean capability or state flag an item may carry.
///
/// Capability traits are fixed when the room is loaded. The three state
/// traits (`Taken`, `Closed`, `Locked`) are toggled by item actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trait {
    /// Can be taken by the player.
    Takeable,
    /// Can be opened.
    Openable,
    /// Can be closed.
    Closable,
    /// Can be locked.
    Lockable,
    /// Can be unlocked.
    Unlockable,
    /// Holds items inside.
    Container,
    /// Items rest on top.
    Supporter,
    /// Has text to read.
    Readable,
    /// Can be put on and taken off.
    Wearable,
    /// Can be consumed.
    Edible,
    /// Has been taken.
    Taken,
    /// Is closed.
    Closed,
    /// Is locked.
    Locked,
}

impl Trait {
    /// Every trait, in declaration order.
    pub const ALL: [Trait; 13] = [
        Self::Takeable,
        Self::Openable,
        Self::Closable,
        Self::Lockable,
        Self::Unlockable,
        Self::Container,
        Self::Supporter,
        Self::Readable,
        Self::Wearable,
        Self::Edible,
        Self::Taken,
        Self::Closed,
        Self::Locked,
    ];

    /// Returns true for the runtime state traits.
    pub fn is_state(&self) -> bool {
        matches!(self, Self::Taken | Self::Closed | Self::Locked)
    }

    /// The lower-case name used in room documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Takeable => "takeable",
            Self::Openable => "openable",
            Self::Closable => "closable",
            Self::Lockable => "lockable",
            Self::Unlockable => "unlockable",
            Self::Container => "container",
            Self::Supporter => "supporter",
            Self::Readable => "readable",
            Self::Wearable => "wearable",
            Self::Edible => "edible",
            Self::Taken => "taken",
            Self::Closed => "closed",
            Self::Locked => "locked",
        }
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Trait {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| LoadError::UnknownTrait(s.to_string()))
    }
}

/// An ordered set of traits.
///
/// Iteration follows the declaration order of [`Trait`], which keeps item
/// listings and exported documents stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitSet(BTreeSet<Trait>);

impl TraitSet {
    /// Create an empty trait set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the trait is present.
    pub fn contains(&self, t: Trait) -> bool {
        self.0.contains(&t)
    }

    /// Iterate over the traits in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Trait> + '_ {
        self.0.iter().copied()
    }

    /// Number of traits in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no trait is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // State changes go through item actions only.
    pub(crate) fn insert(&mut self, t: Trait) {
        self.0.insert(t);
    }

    pub(crate) fn remove(&mut self, t: Trait) {
        self.0.remove(&t);
    }
}

impl FromIterator<Trait> for TraitSet {
    fn from_iter<I: IntoIterator<Item = Trait>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for TraitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(Trait::as_str).collect();
        write!(f, "{}", names.join(", "))
    }
}
