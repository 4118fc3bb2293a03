//! Error types for the shell core.
//!
//! Every failure crosses the `execute` boundary as data inside a
//! [`CommandResult::Error`](crate::core::CommandResult); these enums exist
//! so the message text is defined in exactly one place.

use thiserror::Error;

/// Errors surfaced to the terminal as command output.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ShellError {
    /// Dispatcher could not find a handler for the command name.
    #[error("{0}: command not found")]
    CommandNotFound(String),
    /// `cd` target is absent, or exists but is not a directory.
    ///
    /// The two cases share one message on purpose, matching shell
    /// convention for this terminal.
    #[error("cd: {0}: No such directory")]
    NoSuchDirectory(String),
    /// The cwd no longer locates to a directory. Unreachable while the
    /// `ShellState` invariant holds; reported rather than panicking.
    #[error("ls: cannot access '{0}': filesystem inconsistency")]
    Inconsistent(String),
}

/// Errors building a [`FileSystem`](crate::core::FileSystem) from a layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Two sibling entries share a name.
    #[error("duplicate entry '{name}' under '{parent}'")]
    DuplicateName { parent: String, name: String },
    /// The layout JSON did not deserialize.
    #[error("layout parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
