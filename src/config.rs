//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the crate.
//! The built-in filesystem layout is embedded at compile time using
//! `include_str!`.

// =============================================================================
// Shell Configuration
// =============================================================================

/// Working directory a fresh shell session starts in.
pub const DEFAULT_CWD: &str = "/";

/// Target directory for `cd` with no argument.
///
/// A literal path, not a per-user home mechanism.
pub const HOME_PATH: &str = "/home";

/// Separator placed between entry names in `ls` output.
pub const LIST_SEPARATOR: &str = "  ";

// =============================================================================
// Filesystem Configuration
// =============================================================================

/// Built-in filesystem layout, embedded at compile time.
///
/// This is the only "persisted state layout" the core knows about;
/// nothing is read from disk at runtime.
pub const LAYOUT_JSON: &str = include_str!("../assets/fs/layout.json");
