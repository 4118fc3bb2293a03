//! `vsh` — an in-memory, read-only virtual filesystem with a shell core.
//!
//! The crate models a small tree of [`Node`]s (directories, files, and
//! external redirects), tracks a per-session working directory in
//! [`ShellState`], and executes shell-like command lines (`cd`, `ls`,
//! `clear`) through a single entry point:
//!
//! ```
//! use std::sync::Arc;
//! use vsh::{execute, CommandRegistry, CommandResult, FileSystem, ShellState};
//!
//! let fs = Arc::new(FileSystem::builtin());
//! let registry = CommandRegistry::with_builtins();
//! let state = ShellState::new(fs);
//!
//! match execute("cd /home", &state, &registry) {
//!     CommandResult::Success { state, .. } => assert_eq!(state.cwd, "/home"),
//!     CommandResult::Error { message } => panic!("{message}"),
//! }
//! ```
//!
//! Everything is synchronous and free of I/O; rendering, history, and the
//! screen-clearing side effect of `clear` are the calling surface's job.
//! A failed command returns an error as data and leaves the prior state
//! untouched.

pub mod config;
pub mod core;
pub mod models;

pub use crate::core::{
    execute, CommandFn, CommandRegistry, CommandResult, FileSystem, LayoutError, ShellError,
};
pub use crate::models::{Interaction, Layout, Node, ShellState};
