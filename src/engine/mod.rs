//! engine
//!
//! Session orchestration for the support desk.
//!
//! # Architecture
//!
//! The engine sits between the CLI and the core. It builds a [`Desk`] from
//! the loaded configuration and the global flags in [`Context`], and the
//! menu drives every operation through that single owned value.
//!
//! # Invariants
//!
//! - One operation, including its undo entry, completes before the next
//!   input is read
//! - Only successful operations are recorded for undo

pub mod desk;

pub use desk::Desk;

use std::path::PathBuf;

use crate::core::config::Config;
use crate::core::Result;
use crate::ui::output::Verbosity;

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags that affect command behavior.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Explicit config file.
    pub config: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (no banner or prompts).
    pub quiet: bool,
    /// JSON list output requested on the command line.
    pub json: bool,
    /// Skip seeding even if the config enables it.
    pub no_seed: bool,
}

impl Context {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// JSON output if either the flag or the config asks for it.
    pub fn json_output(&self, config: &Config) -> bool {
        self.json || config.json_output()
    }
}

/// Build a desk for a new session, seeding it per config and flags.
///
/// # Errors
///
/// Fails if a seed customer cannot be registered.
pub fn open_desk(ctx: &Context, config: &Config) -> Result<Desk> {
    let mut desk = Desk::with_verbosity(ctx.verbosity());
    if config.seed_enabled() && !ctx.no_seed {
        desk.seed(&config.seed_customers())?;
    }
    Ok(desk)
}
