use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ActionError, ActionResult};
use crate::event::Event;
use crate::traits::{Trait, TraitSet};

/// A named thing in a room, described entirely by its traits.
///
/// Everything an item can do or be is derived from its [`TraitSet`]. The
/// trait set changes only through [`take`](Item::take), [`open`](Item::open),
/// [`close`](Item::close) and [`unlock`](Item::unlock).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "TraitSet::is_empty")]
    traits: TraitSet,
    /// Name of the item that unlocks this one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key: Option<String>,
}

impl Item {
    /// Create an item with no description and no traits.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            traits: TraitSet::new(),
            key: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add traits.
    pub fn with_traits(mut self, traits: impl IntoIterator<Item = Trait>) -> Self {
        for t in traits {
            self.traits.insert(t);
        }
        self
    }

    /// Name the item that unlocks this one.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// The unique name of the item within its room.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The item's description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The item's current traits.
    pub fn traits(&self) -> &TraitSet {
        &self.traits
    }

    /// The name of the item that unlocks this one, if configured.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Returns true if the trait is present.
    pub fn has_trait(&self, t: Trait) -> bool {
        self.traits.contains(t)
    }

    // -----------------------------------------------------------------------
    // Derived predicates
    // -----------------------------------------------------------------------

    /// Can be taken.
    pub fn is_takeable(&self) -> bool {
        self.has_trait(Trait::Takeable)
    }

    /// Can be opened.
    pub fn is_openable(&self) -> bool {
        self.has_trait(Trait::Openable)
    }

    /// Can be closed.
    pub fn is_closable(&self) -> bool {
        self.has_trait(Trait::Closable)
    }

    /// Can be locked.
    pub fn is_lockable(&self) -> bool {
        self.has_trait(Trait::Lockable)
    }

    /// Can be unlocked.
    pub fn is_unlockable(&self) -> bool {
        self.has_trait(Trait::Unlockable)
    }

    /// Holds other items.
    pub fn is_container(&self) -> bool {
        self.has_trait(Trait::Container)
    }

    /// Other items can rest on it.
    pub fn is_supporter(&self) -> bool {
        self.has_trait(Trait::Supporter)
    }

    /// Has text to read.
    pub fn is_readable(&self) -> bool {
        self.has_trait(Trait::Readable)
    }

    /// Can be worn.
    pub fn is_wearable(&self) -> bool {
        self.has_trait(Trait::Wearable)
    }

    /// Can be eaten.
    pub fn is_edible(&self) -> bool {
        self.has_trait(Trait::Edible)
    }

    /// Has been taken. Only takeable items can be taken.
    pub fn is_taken(&self) -> bool {
        self.is_takeable() && self.has_trait(Trait::Taken)
    }

    /// Open, for anything that can be open at all.
    ///
    /// A plain container with no open/close affordance is always open.
    pub fn is_open(&self) -> bool {
        (self.is_openable() || self.is_closable() || self.is_container())
            && !self.has_trait(Trait::Closed)
    }

    /// Closed. Only items that can be opened or closed count as closed.
    pub fn is_closed(&self) -> bool {
        (self.is_openable() || self.is_closable()) && self.has_trait(Trait::Closed)
    }

    /// Locked.
    pub fn is_locked(&self) -> bool {
        self.has_trait(Trait::Locked)
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    /// Take the item. Succeeds once per item lifetime.
    pub fn take(&mut self) -> ActionResult<Event> {
        if !self.is_takeable() {
            return Err(ActionError::NotTakeable(self.name.clone()));
        }
        if self.is_taken() {
            return Err(ActionError::AlreadyTaken(self.name.clone()));
        }
        self.traits.insert(Trait::Taken);
        Ok(Event::Taken {
            target: self.name.clone(),
        })
    }

    /// Open the item.
    ///
    /// An openable item that is not closed counts as already open, even when
    /// it has no way of being closed.
    pub fn open(&mut self) -> ActionResult<Event> {
        if !self.is_openable() {
            return Err(ActionError::NotOpenable(self.name.clone()));
        }
        if !self.is_closed() {
            return Err(ActionError::AlreadyOpen(self.name.clone()));
        }
        self.traits.remove(Trait::Closed);
        Ok(Event::Opened {
            target: self.name.clone(),
        })
    }

    /// Close the item.
    pub fn close(&mut self) -> ActionResult<Event> {
        if !self.is_closable() {
            return Err(ActionError::NotClosable(self.name.clone()));
        }
        if self.is_closed() {
            return Err(ActionError::AlreadyClosed(self.name.clone()));
        }
        self.traits.insert(Trait::Closed);
        Ok(Event::Closed {
            target: self.name.clone(),
        })
    }

    /// Unlock the item using the named item.
    ///
    /// `using` must match the key configured on this item.
    pub fn unlock(&mut self, using: &str) -> ActionResult<Event> {
        if !self.is_unlockable() {
            return Err(ActionError::NotUnlockable(self.name.clone()));
        }
        if !self.is_locked() {
            return Err(ActionError::NotLocked(self.name.clone()));
        }
        if self.key.as_deref() != Some(using) {
            return Err(ActionError::WrongKey {
                target: self.name.clone(),
                using: using.to_string(),
            });
        }
        self.traits.remove(Trait::Locked);
        Ok(Event::Unlocked {
            target: self.name.clone(),
            using: using.to_string(),
        })
    }
}

/// Owning lookup table of items, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct ItemRegistry {
    index: HashMap<String, Item>,
}

impl ItemRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an item by name.
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.index.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Item> {
        self.index.get_mut(name)
    }

    /// Insert an item, replacing any item with the same name.
    ///
    /// Returns the replaced item.
    pub fn add(&mut self, item: Item) -> Option<Item> {
        self.index.insert(item.name.clone(), item)
    }

    /// Names of all registered items, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    /// All registered items, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.index.values()
    }

    /// Returns true if an item with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of registered items.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if no item is registered.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl FromIterator<Item> for ItemRegistry {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut registry = Self::new();
        for item in iter {
            registry.add(item);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const THING: &str = "thing";

    fn thing(traits: &[Trait]) -> Item {
        Item::new(THING).with_traits(traits.iter().copied())
    }

    #[test]
    fn item_defaults() {
        let mut item = Item::new(THING);

        assert_eq!(item.name(), THING);
        assert!(item.description().is_none());

        assert!(!item.is_takeable());
        assert!(!item.is_openable());
        assert!(!item.is_closable());
        assert!(!item.is_container());

        assert!(!item.is_taken());
        assert!(!item.is_open());
        assert!(!item.is_closed());
        assert!(!item.is_locked());

        assert_eq!(item.take(), Err(ActionError::NotTakeable(THING.into())));
        assert_eq!(item.open(), Err(ActionError::NotOpenable(THING.into())));
        assert_eq!(item.close(), Err(ActionError::NotClosable(THING.into())));
        assert!(item.traits().is_empty());
    }

    #[test]
    fn take_is_single_fire() {
        let mut item = thing(&[Trait::Takeable]);
        assert!(!item.is_taken());

        assert_eq!(
            item.take(),
            Ok(Event::Taken {
                target: THING.into()
            })
        );
        assert!(item.is_taken());

        assert_eq!(item.take(), Err(ActionError::AlreadyTaken(THING.into())));
        assert_eq!(item.take(), Err(ActionError::AlreadyTaken(THING.into())));
    }

    #[test]
    fn taken_without_takeable_is_not_taken() {
        let item = thing(&[Trait::Taken]);
        assert!(!item.is_taken());
    }

    #[test]
    fn openable_only() {
        let mut item = thing(&[Trait::Openable, Trait::Closed]);
        assert!(item.is_closed());
        assert!(!item.is_open());

        assert_eq!(
            item.open(),
            Ok(Event::Opened {
                target: THING.into()
            })
        );
        assert!(item.is_open());
        assert!(!item.is_closed());

        assert_eq!(item.open(), Err(ActionError::AlreadyOpen(THING.into())));
        assert_eq!(item.close(), Err(ActionError::NotClosable(THING.into())));
    }

    #[test]
    fn openable_without_closed_is_already_open() {
        let mut item = thing(&[Trait::Openable]);
        assert_eq!(item.open(), Err(ActionError::AlreadyOpen(THING.into())));
    }

    #[test]
    fn closable_only() {
        let mut item = thing(&[Trait::Closable]);
        assert!(item.is_open());

        assert_eq!(
            item.close(),
            Ok(Event::Closed {
                target: THING.into()
            })
        );
        assert!(item.is_closed());
        assert!(!item.is_open());

        assert_eq!(item.close(), Err(ActionError::AlreadyClosed(THING.into())));
        assert_eq!(item.open(), Err(ActionError::NotOpenable(THING.into())));
    }

    #[test]
    fn openable_and_closable_toggle() {
        let mut item = thing(&[Trait::Openable, Trait::Closable]);
        assert!(item.is_open());

        item.close().unwrap();
        assert!(item.is_closed());
        item.open().unwrap();
        assert!(item.is_open());
        item.close().unwrap();
        item.open().unwrap();

        assert_eq!(item.traits(), thing(&[Trait::Openable, Trait::Closable]).traits());
    }

    #[test]
    fn plain_container_cannot_open_or_close() {
        let mut item = thing(&[Trait::Container]);
        assert!(item.is_open());
        assert_eq!(item.open(), Err(ActionError::NotOpenable(THING.into())));
        assert_eq!(item.close(), Err(ActionError::NotClosable(THING.into())));
        assert!(item.is_open());

        // `closed` on a plain container has no closed reading
        let item = thing(&[Trait::Container, Trait::Closed]);
        assert!(!item.is_closed());
        assert!(!item.is_open());
    }

    /// (traits, is_openable, is_closable, is_open, is_closed, open(), close())
    type Case = (
        &'static [Trait],
        bool,
        bool,
        bool,
        bool,
        ActionResult<Event>,
        ActionResult<Event>,
    );

    #[test]
    fn container_combinations() {
        use Trait::*;
        let opened = || {
            Ok(Event::Opened {
                target: THING.into(),
            })
        };
        let closed_event = || {
            Ok(Event::Closed {
                target: THING.into(),
            })
        };
        let not_openable = || Err(ActionError::NotOpenable(THING.into()));
        let not_closable = || Err(ActionError::NotClosable(THING.into()));
        let already_open = || Err(ActionError::AlreadyOpen(THING.into()));
        let already_closed = || Err(ActionError::AlreadyClosed(THING.into()));

        #[rustfmt::skip]
        let cases: [Case; 8] = [
            (&[Container], false, false, true, false, not_openable(), not_closable()),
            (&[Container, Closed], false, false, false, false, not_openable(), not_closable()),
            (&[Container, Closable], false, true, true, false, not_openable(), closed_event()),
            (&[Container, Closable, Closed], false, true, false, true, not_openable(), already_closed()),
            (&[Container, Openable], true, false, true, false, already_open(), not_closable()),
            (&[Container, Openable, Closed], true, false, false, true, opened(), not_closable()),
            (&[Container, Openable, Closable], true, true, true, false, already_open(), closed_event()),
            (&[Container, Openable, Closable, Closed], true, true, false, true, opened(), already_closed()),
        ];

        for (traits, openable, closable, open, closed, on_open, on_close) in cases {
            let item = thing(traits);
            assert_eq!(item.is_openable(), openable, "{traits:?}");
            assert_eq!(item.is_closable(), closable, "{traits:?}");
            assert_eq!(item.is_open(), open, "{traits:?}");
            assert_eq!(item.is_closed(), closed, "{traits:?}");

            // Each action runs on a fresh copy.
            assert_eq!(item.clone().open(), on_open, "open {traits:?}");
            assert_eq!(item.clone().close(), on_close, "close {traits:?}");
        }
    }

    #[test]
    fn unlock_with_matching_key() {
        let mut door = thing(&[Trait::Unlockable, Trait::Locked]).with_key("key");
        assert_eq!(
            door.unlock("spoon"),
            Err(ActionError::WrongKey {
                target: THING.into(),
                using: "spoon".into()
            })
        );
        assert!(door.is_locked());

        assert_eq!(
            door.unlock("key"),
            Ok(Event::Unlocked {
                target: THING.into(),
                using: "key".into()
            })
        );
        assert!(!door.is_locked());
        assert_eq!(door.unlock("key"), Err(ActionError::NotLocked(THING.into())));
    }

    #[test]
    fn unlock_needs_trait_and_key() {
        let mut chest = thing(&[Trait::Locked]).with_key("key");
        assert_eq!(
            chest.unlock("key"),
            Err(ActionError::NotUnlockable(THING.into()))
        );

        let mut keyless = thing(&[Trait::Unlockable, Trait::Locked]);
        assert!(matches!(
            keyless.unlock("key"),
            Err(ActionError::WrongKey { .. })
        ));
    }

    #[test]
    fn registry_lookup_and_replace() {
        let mut items: ItemRegistry = ["first", "second", "third"]
            .into_iter()
            .map(Item::new)
            .collect();
        assert!(items.add(Item::new("fourth")).is_none());

        assert_eq!(items.get("first").unwrap().name(), "first");
        assert_eq!(items.get("fourth").unwrap().name(), "fourth");
        assert!(items.get("fifth").is_none());

        let mut names: Vec<&str> = items.names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["first", "fourth", "second", "third"]);

        let replaced = items.add(Item::new("first").with_description("again"));
        assert!(replaced.is_some_and(|old| old.description().is_none()));
        assert_eq!(items.len(), 4);
        assert_eq!(items.get("first").unwrap().description(), Some("again"));
    }

    fn any_trait() -> impl Strategy<Value = Trait> {
        prop::sample::select(Trait::ALL.to_vec())
    }

    #[derive(Debug, Clone, Copy)]
    enum Action {
        Take,
        Open,
        Close,
        Unlock,
    }

    fn any_action() -> impl Strategy<Value = Action> {
        prop_oneof![
            Just(Action::Take),
            Just(Action::Open),
            Just(Action::Close),
            Just(Action::Unlock),
        ]
    }

    proptest! {
        #[test]
        fn taken_implies_takeable(traits in prop::collection::vec(any_trait(), 0..8)) {
            let item = thing(&traits);
            prop_assert!(!item.is_taken() || item.is_takeable());
            prop_assert!(!item.is_closed() || item.is_openable() || item.is_closable());
        }

        #[test]
        fn actions_touch_only_state_traits(
            traits in prop::collection::vec(any_trait(), 0..8),
            actions in prop::collection::vec(any_action(), 0..12),
        ) {
            let mut item = thing(&traits).with_key("key");
            let capabilities: Vec<Trait> =
                item.traits().iter().filter(|t| !t.is_state()).collect();
            let mut takes = 0;

            for action in actions {
                let before = item.clone();
                let result = match action {
                    Action::Take => item.take(),
                    Action::Open => item.open(),
                    Action::Close => item.close(),
                    Action::Unlock => item.unlock("key"),
                };
                if result.is_err() {
                    prop_assert_eq!(&item, &before);
                }
                if matches!(action, Action::Take) && result.is_ok() {
                    takes += 1;
                }
            }

            let after: Vec<Trait> =
                item.traits().iter().filter(|t| !t.is_state()).collect();
            prop_assert_eq!(after, capabilities);
            prop_assert!(takes <= 1);
        }
    }
}
