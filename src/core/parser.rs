//! Command-line tokenizer.
//!
//! Splits a raw line on runs of whitespace: the first token is the command
//! name, the rest are positional arguments. No quoting, escaping, pipes, or
//! expansion — the command set here doesn't need them.

/// A tokenized command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Command name; empty string for a blank line.
    pub name: String,
    /// Positional arguments in order.
    pub args: Vec<String>,
}

/// Tokenize a raw command line.
pub fn parse_command_line(input: &str) -> ParsedCommand {
    let mut tokens = input.split_whitespace();
    let name = tokens.next().unwrap_or_default().to_string();
    let args = tokens.map(str::to_string).collect();
    ParsedCommand { name, args }
}
