//! Command registry, handlers, and dispatch.
//!
//! This module provides:
//! - `CommandFn` — the uniform handler signature
//! - `CommandRegistry` — static name-to-handler mapping, built once
//! - `CommandResult` — the uniform result returned by every handler
//! - `execute` — the dispatcher and sole entry point for collaborators
//!
//! # Architecture
//!
//! A raw line is tokenized by the parser, the first token is looked up in
//! the registry, and the matching handler runs against the current
//! [`ShellState`](crate::models::ShellState). The registry is a plain
//! value injected into `execute` — there is no global lookup table.

mod execute;
mod result;

pub use execute::execute;
pub use result::CommandResult;

use std::collections::HashMap;

use crate::models::ShellState;

/// Uniform handler signature shared by every command.
///
/// `name` is the command name as typed (useful for handlers registered
/// under several names); handlers must be pure: no mutation of the
/// filesystem or the input state.
pub type CommandFn = fn(name: &str, args: &[String], state: &ShellState) -> CommandResult;

/// Case-sensitive mapping from command name to handler.
///
/// Populated once at startup; the command set is fixed, so there is no
/// dynamic registration.
pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandFn>,
}

impl CommandRegistry {
    /// Build the registry with the built-in commands: `cd`, `ls`, `clear`.
    pub fn with_builtins() -> Self {
        let mut commands: HashMap<&'static str, CommandFn> = HashMap::new();
        commands.insert("cd", execute::cd);
        commands.insert("ls", execute::ls);
        commands.insert("clear", execute::clear);
        Self { commands }
    }

    /// Look up a handler by exact name.
    pub fn get(&self, name: &str) -> Option<CommandFn> {
        self.commands.get(name).copied()
    }

    /// All registered command names, sorted.
    ///
    /// For collaborators that show completions or help.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_present() {
        let registry = CommandRegistry::with_builtins();
        assert!(registry.get("cd").is_some());
        assert!(registry.get("ls").is_some());
        assert!(registry.get("clear").is_some());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = CommandRegistry::with_builtins();
        assert!(registry.get("CD").is_none());
        assert!(registry.get("Ls").is_none());
    }

    #[test]
    fn test_unknown_name_absent() {
        let registry = CommandRegistry::with_builtins();
        assert!(registry.get("bogus").is_none());
        assert!(registry.get("").is_none());
    }

    #[test]
    fn test_names_sorted() {
        let registry = CommandRegistry::with_builtins();
        assert_eq!(registry.names(), vec!["cd", "clear", "ls"]);
    }
}
