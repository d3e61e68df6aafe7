//! # Console Configuration
//!
//! Settings read once at startup.
//!
//! ## Configuration Sources (later overrides earlier)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Defaults (this file)                                                │
//! │                                                                         │
//! │  2. console.toml                                                        │
//! │     $SHOPFRONT_CONFIG, or                                               │
//! │     ~/.config/shopfront-console/console.toml (Linux)                    │
//! │     ~/Library/Application Support/com.shopfront.console/... (macOS)     │
//! │                                                                         │
//! │  3. Environment                                                         │
//! │     SHOPFRONT_SEED_CATALOG   true/false                                 │
//! │     SHOPFRONT_LOG            tracing filter directives                  │
//! │     SHOPFRONT_ECHO_COMMANDS  true/false                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example File
//! ```toml
//! # console.toml
//! seed_catalog = false
//! log_filter = "warn,shopfront=info"
//! echo_commands = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Env var naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "SHOPFRONT_CONFIG";

/// Default tracing filter when neither the file nor the environment set one.
pub const DEFAULT_LOG_FILTER: &str = "info,shopfront=debug";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Console settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Start with the four demo products instead of an empty catalog.
    pub seed_catalog: bool,

    /// Tracing filter directives; `RUST_LOG` still wins when set.
    pub log_filter: String,

    /// Log every received command line at debug level.
    pub echo_commands: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            seed_catalog: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            echo_commands: false,
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// The file is looked up at `config_path`, then `$SHOPFRONT_CONFIG`,
    /// then the platform config directory. A missing file is not an error.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let path = config_path
            .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        let mut config = match path {
            Some(path) if path.exists() => {
                info!(?path, "Loading console config from file");
                Self::from_file(&path)?
            }
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Invalid("log_filter must not be empty".into()));
        }

        EnvFilter::try_new(&self.log_filter).map_err(|e| {
            ConfigError::Invalid(format!("log_filter '{}' is invalid: {}", self.log_filter, e))
        })?;

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup; unparseable values are skipped.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("SHOPFRONT_SEED_CATALOG") {
            match parse_flag(&value) {
                Some(seed) => {
                    debug!(seed, "Overriding seed_catalog from environment");
                    self.seed_catalog = seed;
                }
                None => warn!(value = %value, "Ignoring invalid SHOPFRONT_SEED_CATALOG"),
            }
        }

        if let Some(filter) = lookup("SHOPFRONT_LOG") {
            self.log_filter = filter;
        }

        if let Some(value) = lookup("SHOPFRONT_ECHO_COMMANDS") {
            match parse_flag(&value) {
                Some(echo) => self.echo_commands = echo,
                None => warn!(value = %value, "Ignoring invalid SHOPFRONT_ECHO_COMMANDS"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "shopfront", "console")
            .map(|dirs| dirs.config_dir().join("console.toml"))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn overrides(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::default();
        assert!(config.seed_catalog);
        assert!(!config.echo_commands);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ConsoleConfig::from_toml_str("echo_commands = true\n").unwrap();
        assert!(config.echo_commands);
        assert!(config.seed_catalog);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);

        assert_eq!(ConsoleConfig::from_toml_str("").unwrap(), ConsoleConfig::default());
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let err = ConsoleConfig::from_toml_str("seed_catalog = \"maybe\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ConsoleConfig::default();
        config.apply_overrides(overrides(&[
            ("SHOPFRONT_SEED_CATALOG", "false"),
            ("SHOPFRONT_LOG", "warn"),
            ("SHOPFRONT_ECHO_COMMANDS", "1"),
        ]));

        assert!(!config.seed_catalog);
        assert_eq!(config.log_filter, "warn");
        assert!(config.echo_commands);
    }

    #[test]
    fn test_invalid_env_flag_is_ignored() {
        let mut config = ConsoleConfig::default();
        config.apply_overrides(overrides(&[("SHOPFRONT_SEED_CATALOG", "sometimes")]));
        assert!(config.seed_catalog);
    }

    #[test]
    fn test_validate_rejects_empty_filter() {
        let config = ConsoleConfig {
            log_filter: "  ".to_string(),
            ..ConsoleConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("shopfront-console-{}.toml", std::process::id()));
        std::fs::write(&path, "seed_catalog = false\n").unwrap();

        let config = ConsoleConfig::load(Some(path.clone())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(!config.seed_catalog);
    }

    #[test]
    fn test_load_rejects_bad_file() {
        let path = std::env::temp_dir().join(format!("shopfront-console-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "this is not toml = = =").unwrap();

        let result = ConsoleConfig::load(Some(path.clone()));
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("2"), None);
    }
}
