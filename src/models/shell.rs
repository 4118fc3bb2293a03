//! Shell session state and history types.

use std::sync::Arc;

use crate::config;
use crate::core::FileSystem;

/// Per-session shell state: a shared filesystem plus a cursor.
///
/// The filesystem is read-only and shared by every session; `cwd` is always
/// a normalized absolute path that denotes a directory reachable from the
/// root. Commands never mutate a `ShellState` in place — a successful
/// command returns a new value and the caller decides whether to adopt it.
#[derive(Clone, Debug)]
pub struct ShellState {
    /// Shared, immutable filesystem.
    pub fs: Arc<FileSystem>,
    /// Current working directory as a normalized absolute path.
    pub cwd: String,
}

impl ShellState {
    /// Create the session-default state, rooted at [`config::DEFAULT_CWD`].
    pub fn new(fs: Arc<FileSystem>) -> Self {
        Self {
            fs,
            cwd: config::DEFAULT_CWD.to_string(),
        }
    }

    /// Produce a copy of this state with a different working directory.
    pub fn with_cwd(&self, cwd: impl Into<String>) -> Self {
        Self {
            fs: Arc::clone(&self.fs),
            cwd: cwd.into(),
        }
    }
}

/// A completed command line together with the output it produced.
///
/// The core never accumulates these; history is the caller's concern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interaction {
    pub command_line: String,
    pub output: String,
}

impl Interaction {
    pub fn new(command_line: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            command_line: command_line.into(),
            output: output.into(),
        }
    }
}
