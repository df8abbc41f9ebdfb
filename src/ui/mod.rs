//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`prompts`] - Line-oriented prompts
//! - [`output`] - Output formatting and diagnostics
//!
//! # Design
//!
//! All output and prompts go through this module so quiet, debug, and JSON
//! modes are handled in one place.

pub mod output;
pub mod prompts;
