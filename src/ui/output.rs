//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Diagnostics go to stderr and respect the verbosity level. List views are
//! rendered either as human-readable lines under a header or, when JSON is
//! enabled, as a single machine-readable JSON array.

use std::fmt::Display;

use serde::Serialize;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Format a list of items.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a titled list view.
///
/// Text mode prints `header`, then one line per item, or `empty` when
/// there are none. JSON mode prints the items as a JSON array.
pub fn render_list<T>(
    header: &str,
    empty: &str,
    items: &[T],
    json: bool,
) -> Result<String, serde_json::Error>
where
    T: Display + Serialize,
{
    if json {
        return serde_json::to_string(items);
    }
    if items.is_empty() {
        return Ok(format!("{}\n{}", header, empty));
    }
    Ok(format!("{}\n{}", header, format_list(items, "")))
}
