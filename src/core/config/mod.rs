//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. `--config <path>` if given (must exist)
//! 2. `$SUPPORTDESK_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/supportdesk/config.toml`
//! 4. `~/.supportdesk/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use supportdesk::core::config::Config;
//!
//! let result = Config::load(None).unwrap();
//! let config = result.config;
//!
//! println!("Seed customers: {}", config.seed_enabled());
//! for customer in config.seed_customers() {
//!     println!("{}", customer.id);
//! }
//! ```

pub mod schema;

pub use schema::{default_seed_customers, DeskConfig, SeedCustomer};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "SUPPORTDESK_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Values read from the config file
    pub file: DeskConfig,
    /// Path to the config file (if loaded)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise the standard locations are
    /// searched and a missing file means defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit file is missing, or if a config file
    /// exists but cannot be parsed or fails validation.
    pub fn load(explicit: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => Self::load_first(&Self::search_paths()),
        }
    }

    /// Load the first existing file among `candidates`, or defaults.
    pub fn load_first(candidates: &[PathBuf]) -> Result<ConfigLoadResult, ConfigError> {
        match candidates.iter().find(|p| p.exists()) {
            Some(path) => Self::load_file(path),
            None => Ok(ConfigLoadResult {
                config: Config::default(),
                warnings: Vec::new(),
            }),
        }
    }

    /// Load and validate one config file.
    pub fn load_file(path: &Path) -> Result<ConfigLoadResult, ConfigError> {
        let file = Self::read_config(path)?;
        file.validate()?;

        let mut warnings = Vec::new();
        if file.seed == Some(false) && file.customers.is_some() {
            warnings.push(ConfigWarning {
                message: "seed customers are listed but seeding is disabled".to_string(),
                path: path.to_path_buf(),
            });
        }

        Ok(ConfigLoadResult {
            config: Config {
                file,
                path: Some(path.to_path_buf()),
            },
            warnings,
        })
    }

    /// Standard config locations, in search order.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            paths.push(PathBuf::from(path));
        }
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_home).join("supportdesk/config.toml"));
        }
        if let Ok(path) = Self::default_config_path() {
            paths.push(path);
        }

        paths
    }

    /// Get the canonical config path.
    ///
    /// Returns `~/.supportdesk/config.toml`.
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".supportdesk/config.toml"))
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<DeskConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Check if customers should be seeded at startup.
    ///
    /// Defaults to `true` if not configured.
    pub fn seed_enabled(&self) -> bool {
        self.file.seed.unwrap_or(true)
    }

    /// Check if list views default to JSON.
    ///
    /// Defaults to `false` if not configured.
    pub fn json_output(&self) -> bool {
        self.file.json.unwrap_or(false)
    }

    /// Customers to seed, falling back to the built-in list.
    pub fn seed_customers(&self) -> Vec<SeedCustomer> {
        self.file
            .customers
            .clone()
            .unwrap_or_else(default_seed_customers)
    }

    /// The effective configuration, with defaults filled in.
    pub fn effective(&self) -> DeskConfig {
        DeskConfig {
            seed: Some(self.seed_enabled()),
            json: Some(self.json_output()),
            customers: Some(self.seed_customers()),
        }
    }

    /// Get the path to the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
