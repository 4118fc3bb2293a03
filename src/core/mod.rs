//! Core business logic for the shell.
//!
//! This module provides:
//! - [`execute`] dispatch of raw command lines
//! - [`CommandRegistry`] and the built-in handlers
//! - [`FileSystem`] virtual filesystem and path resolution

mod commands;
pub mod error;
mod filesystem;
pub mod parser;

pub use commands::{execute, CommandFn, CommandRegistry, CommandResult};
pub use error::{LayoutError, ShellError};
pub use filesystem::FileSystem;
