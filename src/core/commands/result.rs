//! Command execution result type.

use std::fmt;

use crate::models::ShellState;

/// Result of executing one command.
///
/// Owned by the caller of `execute`; a failed command carries no state, so
/// the caller keeps its prior `ShellState` untouched.
#[derive(Clone, Debug)]
pub enum CommandResult {
    /// Command succeeded; `state` is the state to adopt.
    Success {
        state: ShellState,
        /// Text to render. Empty for commands with nothing to say.
        output: String,
    },
    /// Command failed; `message` is the user-visible text.
    Error { message: String },
}

impl CommandResult {
    /// Create a success result.
    pub fn success(state: ShellState, output: impl Into<String>) -> Self {
        Self::Success {
            state,
            output: output.into(),
        }
    }

    /// Create an error result from anything displayable.
    pub fn error(message: impl fmt::Display) -> Self {
        Self::Error {
            message: message.to_string(),
        }
    }

    /// Check if this result is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The output text (success) or message text (error).
    pub fn text(&self) -> &str {
        match self {
            Self::Success { output, .. } => output,
            Self::Error { message } => message,
        }
    }
}
