//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Use this config file
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: No banner or prompts, status lines only
//! - `--json`: Render list views as JSON
//! - `--no-seed`: Start with an empty customer table

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// SupportDesk - customers, a FIFO ticket queue, and one-step undo
#[derive(Parser, Debug)]
#[command(name = "desk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the standard locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Status lines only; no banner, menu, or prompts
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Render customer, ticket, and history lists as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Do not seed customers at startup
    #[arg(long, global = true)]
    pub no_seed: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive menu (default)
    #[command(
        name = "run",
        long_about = "Run the interactive support desk menu.\n\n\
            Reads menu choices and answers from standard input until `0` is \
            chosen or input ends. All data lives in memory and is discarded \
            on exit.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Start the menu
    desk

    # Drive the menu from a script, printing only status lines
    printf '3\\nC001\\nPrinter offline\\n6\\n0\\n' | desk -q"
    )]
    Run,

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash
    desk completion bash > ~/.local/share/bash-completion/completions/desk

    # Zsh
    desk completion zsh > ~/.zfunc/_desk"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the config file in use, or where one would be read from
    Path,
    /// Print the effective configuration as TOML
    Show,
}

/// Shells supported by `completion`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["desk", "-q", "--no-seed"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.quiet);
        assert!(cli.no_seed);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["desk", "config", "show", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(
            cli.command,
            Some(Command::Config {
                action: ConfigAction::Show
            })
        ));
    }

    #[test]
    fn completion_shell_parses() {
        let cli = Cli::try_parse_from(["desk", "completion", "powershell"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Completion {
                shell: Shell::PowerShell
            })
        ));
    }
}
