//! Command handlers and the dispatcher.
//!
//! Each handler is a pure function with the uniform signature
//! `fn(name, args, state) -> CommandResult`: same inputs, same output, no
//! mutation of the filesystem or the incoming state. Side effects (drawing,
//! history, actually wiping the screen for `clear`) belong to the caller.

use log::debug;

use crate::config;
use crate::core::error::ShellError;
use crate::core::filesystem::FileSystem;
use crate::core::parser::parse_command_line;
use crate::core::{CommandRegistry, CommandResult};
use crate::models::{Node, ShellState};

/// Execute one raw command line against the current shell state.
///
/// Tokenizes the line, looks the name up in the registry, and returns the
/// handler's result unchanged. Unknown names fail without invoking
/// anything. Single synchronous pass; no retries, no I/O.
pub fn execute(command_line: &str, state: &ShellState, registry: &CommandRegistry) -> CommandResult {
    let parsed = parse_command_line(command_line);
    debug!("dispatch '{}' with {} arg(s)", parsed.name, parsed.args.len());

    match registry.get(&parsed.name) {
        Some(handler) => handler(&parsed.name, &parsed.args, state),
        None => CommandResult::error(ShellError::CommandNotFound(parsed.name)),
    }
}

/// `cd` — change the working directory.
///
/// With no argument the target is [`config::HOME_PATH`]. A literal `..`
/// pops the last cwd segment directly (a no-op at root) instead of going
/// through general resolution. Everything else is resolved, located, and
/// checked for navigability.
pub(super) fn cd(_name: &str, args: &[String], state: &ShellState) -> CommandResult {
    let target = args
        .first()
        .map(String::as_str)
        .unwrap_or(config::HOME_PATH);

    if target == ".." {
        let parent = FileSystem::parent_path(&state.cwd);
        return CommandResult::success(state.with_cwd(parent), "");
    }

    let resolved = FileSystem::resolve(&state.cwd, target);
    match state.fs.locate(&resolved) {
        Some(node) if FileSystem::is_navigable(node) => {
            CommandResult::success(state.with_cwd(resolved), "")
        }
        // Exists-but-not-a-directory and plain missing share one message.
        Some(_) | None => CommandResult::error(ShellError::NoSuchDirectory(target.to_string())),
    }
}

/// `ls` — list the working directory.
///
/// Child names in stored order, joined by [`config::LIST_SEPARATOR`]. The
/// cwd invariant guarantees the lookup succeeds; if it ever doesn't, the
/// inconsistency is reported instead of panicking.
pub(super) fn ls(_name: &str, _args: &[String], state: &ShellState) -> CommandResult {
    match state.fs.locate(&state.cwd) {
        Some(Node::Directory { children }) => {
            let output = children
                .iter()
                .map(|(name, _)| name.as_str())
                .collect::<Vec<_>>()
                .join(config::LIST_SEPARATOR);
            CommandResult::success(state.clone(), output)
        }
        _ => CommandResult::error(ShellError::Inconsistent(state.cwd.clone())),
    }
}

/// `clear` — succeed with empty output and unchanged state.
///
/// The screen wipe itself happens in the caller, which recognizes this
/// command name and clears its own display.
pub(super) fn clear(_name: &str, _args: &[String], state: &ShellState) -> CommandResult {
    CommandResult::success(state.clone(), "")
}
