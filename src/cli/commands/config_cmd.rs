//! config command - Show where configuration comes from and what it resolves to

use crate::core::config::Config;
use crate::engine::Context;
use anyhow::{Context as _, Result};

/// Print the config file in use, or the canonical location if none was found.
pub fn path(ctx: &Context) -> Result<()> {
    let loaded = Config::load(ctx.config.as_deref()).context("Failed to load config")?;

    match loaded.config.loaded_from() {
        Some(path) => println!("{}", path.display()),
        None => {
            let canonical =
                Config::default_config_path().context("Failed to locate config directory")?;
            if ctx.quiet {
                println!("{}", canonical.display());
            } else {
                println!("{} (not present, using defaults)", canonical.display());
            }
        }
    }
    Ok(())
}

/// Print the effective configuration as TOML.
pub fn show(ctx: &Context) -> Result<()> {
    let loaded = Config::load(ctx.config.as_deref()).context("Failed to load config")?;
    let rendered = render(&loaded.config, ctx.no_seed)?;
    print!("{}", rendered);
    Ok(())
}

/// Render the effective configuration, applying the `--no-seed` override.
pub fn render(config: &Config, no_seed: bool) -> Result<String> {
    let mut effective = config.effective();
    if no_seed {
        effective.seed = Some(false);
    }
    toml::to_string_pretty(&effective).context("Failed to serialize config")
}
