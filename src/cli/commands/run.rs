//! run command - The interactive support desk menu

use std::io;

use crate::cli::menu::{self, MenuOptions};
use crate::core::config::Config;
use crate::engine::{self, Context};
use crate::ui::output;
use crate::ui::prompts::Prompter;
use anyhow::{Context as _, Result};

/// Run the menu on stdin/stdout until exit or end of input.
pub fn run(ctx: &Context) -> Result<()> {
    let verbosity = ctx.verbosity();
    let loaded = Config::load(ctx.config.as_deref()).context("Failed to load config")?;
    for warning in &loaded.warnings {
        output::warn(
            format!("{} ({})", warning.message, warning.path.display()),
            verbosity,
        );
    }
    if let Some(path) = loaded.config.loaded_from() {
        output::debug(format!("config: {}", path.display()), verbosity);
    }

    let mut desk =
        engine::open_desk(ctx, &loaded.config).context("Failed to seed customers")?;

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock(), !ctx.quiet);
    let options = MenuOptions {
        json: ctx.json_output(&loaded.config),
        verbosity,
    };
    menu::run(&mut desk, &mut prompter, options).context("Menu I/O failed")?;
    Ok(())
}
