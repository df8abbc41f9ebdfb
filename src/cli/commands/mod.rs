//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Loads configuration
//! 2. Calls the engine or core
//! 3. Formats and displays output
//!
//! With no subcommand the interactive menu runs.

mod completion;
mod config_cmd;
mod run;

// Re-export command functions for testing and direct invocation
pub use completion::{completion, write_completion};
pub use config_cmd::{path as config_path, render as render_config, show as config_show};
pub use run::run;

use crate::cli::args::{Command, ConfigAction};
use crate::engine::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Option<Command>, ctx: &Context) -> Result<()> {
    match command {
        None | Some(Command::Run) => run(ctx),
        Some(Command::Config { action }) => match action {
            ConfigAction::Path => config_path(ctx),
            ConfigAction::Show => config_show(ctx),
        },
        Some(Command::Completion { shell }) => completion(shell),
    }
}
