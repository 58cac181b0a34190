use std::path::PathBuf;

/// Alias for `Result<T, ActionError>`.
pub type ActionResult<T> = Result<T, ActionError>;

/// Alias for `Result<T, LoadError>`.
pub type LoadResult<T> = Result<T, LoadError>;

/// Recoverable errors produced while executing a command against a room.
///
/// The `Display` form is the sentence a front end can read back to the
/// player as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// The item lacks the `takeable` trait.
    #[error("[{0}] is not takeable")]
    NotTakeable(String),

    /// The item has been taken before.
    #[error("[{0}] has already been taken")]
    AlreadyTaken(String),

    /// The item lacks the `openable` trait.
    #[error("[{0}] is not openable")]
    NotOpenable(String),

    /// The item is not currently closed.
    #[error("[{0}] is already open")]
    AlreadyOpen(String),

    /// The item lacks the `closable` trait.
    #[error("[{0}] is not closable")]
    NotClosable(String),

    /// The item is already closed.
    #[error("[{0}] is already closed")]
    AlreadyClosed(String),

    /// The item lacks the `unlockable` trait.
    #[error("[{0}] is not unlockable")]
    NotUnlockable(String),

    /// The item is not locked.
    #[error("[{0}] is not locked")]
    NotLocked(String),

    /// The item used does not fit the target's lock.
    #[error("[{using}] does not unlock [{target}]")]
    WrongKey {
        /// The locked item.
        target: String,
        /// The item that was tried.
        using: String,
    },

    /// No item with this name exists in the room.
    #[error("there is no [{0}] here")]
    UnknownTarget(String),
}

/// Fatal errors raised while building a room or world from a document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The document file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// The file that failed to open.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not match the expected shape.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A trait name outside the known vocabulary.
    ///
    /// Only returned by `str::parse::<Trait>`. Documents with an unknown
    /// trait fail with [`LoadError::Parse`].
    #[error("unknown trait: \"{0}\"")]
    UnknownTrait(String),

    /// A relationship kind outside `has`, `contains`, `supports`.
    ///
    /// Only returned by `str::parse::<RelationshipKind>`. Documents with an
    /// unknown kind fail with [`LoadError::Parse`].
    #[error("unknown relationship kind: \"{0}\"")]
    UnknownRelationshipKind(String),

    /// The relationship graph loops back on itself.
    #[error("relationship cycle through [{item}]")]
    Cycle {
        /// An item that lies on the cycle.
        item: String,
    },

    /// A world document has no room with this name.
    #[error("room not found: \"{0}\"")]
    UnknownRoom(String),
}
