//! Data models and types for the shell core.
//!
//! Contains domain types for:
//! - [`Node`], [`Layout`] - Virtual filesystem representation
//! - [`ShellState`] - Per-session cursor over the shared filesystem
//! - [`Interaction`] - Command/output pairs for history-keeping callers

mod filesystem;
mod shell;

pub use filesystem::{Layout, LayoutEntry, LayoutNode, Node};
pub use shell::{Interaction, ShellState};
