//! cli
//!
//! Command-line interface layer for the support desk.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Run the interactive menu
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, builds an
//! [`engine::Context`], and dispatches. All state changes flow through the
//! [`engine::Desk`] the menu drives.

pub mod args;
pub mod commands;
pub mod menu;

pub use args::{Cli, Shell};

use crate::engine;
use anyhow::Result;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = engine::Context {
        config: cli.config.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
        json: cli.json,
        no_seed: cli.no_seed,
    };

    commands::dispatch(cli.command, &ctx)
}
