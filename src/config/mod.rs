//! Configuration module for Olelo.
//!
//! This module provides the configuration system for the demo harness: it
//! can load settings from files (TOML, JSON, YAML) and override them with
//! environment variables. All values are validated for correctness before
//! use. The trie itself carries no configuration; everything here concerns
//! the harness around it.

use crate::error::config::ConfigError;
use config::{Config, ConfigError as ExternalConfigError, Environment, File};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default configuration location
const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "OLELO";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for the Olelo demo harness.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OleloConfig {
    /// Seed vocabulary configuration
    pub seed: SeedConfig,

    /// Suggestion configuration
    pub suggest: SuggestConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for OleloConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.seed.validate()?;
        self.suggest.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Seed vocabulary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Path to the seed word list (one word per line; repeats accumulate
    /// frequency)
    pub path: PathBuf,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/words.txt"),
        }
    }
}

impl Validate for SeedConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingValue("seed.path".to_string()));
        }
        Ok(())
    }
}

/// Suggestion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestConfig {
    /// Default number of suggestions returned when the CLI does not
    /// override it
    pub limit: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self { limit: 5 }
    }
}

impl Validate for SuggestConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.limit == 0 {
            return Err(ConfigError::ValidationError(
                "suggest.limit must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for the Olelo demo harness.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from a file and environment variables.
    pub fn load(&self) -> ConfigResult<OleloConfig> {
        let mut builder = Config::builder();

        // Add default configuration values
        builder = builder.add_source(
            Config::try_from(&OleloConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        // Add configuration from file if provided
        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let Some(name) = path.to_str() else {
                return Err(ConfigError::ParseError(format!(
                    "Non-UTF-8 config path: {path:?}"
                )));
            };

            builder = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => builder.add_source(File::with_name(name)),
                Some("json") => {
                    builder.add_source(File::with_name(name).format(config::FileFormat::Json))
                }
                Some("yaml" | "yml") => {
                    builder.add_source(File::with_name(name).format(config::FileFormat::Yaml))
                }
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
        }

        // Add environment variables with prefix
        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        // Build the configuration
        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            ExternalConfigError::Message(msg) => ConfigError::ParseError(msg),
            other => ConfigError::ParseError(other.to_string()),
        })?;

        // Deserialize and validate
        let olelo_config: OleloConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        olelo_config.validate()?;

        Ok(olelo_config)
    }
}

/// Global configuration accessor.
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    config: Arc<OleloConfig>,
}

impl GlobalConfig {
    /// Creates a new global configuration.
    pub fn new(config: OleloConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration.
    pub fn get(&self) -> &OleloConfig {
        &self.config
    }
}

/// Global harness configuration.
static GLOBAL_CONFIG: OnceCell<GlobalConfig> = OnceCell::new();

/// Initialize the default configuration for Olelo.
///
/// Loads the default configuration file, merges environment overrides, and
/// installs the result globally. A missing default file is acceptable in
/// development; defaults are used instead.
pub fn init_default_config() -> ConfigResult<()> {
    let loader = ConfigLoader::new(Some(PathBuf::from(DEFAULT_CONFIG_PATH)), ENV_PREFIX);

    let config = match loader.load() {
        Ok(config) => config,
        Err(ConfigError::FileNotFound(_)) => {
            tracing::warn!(
                "Default configuration file not found at: {}",
                DEFAULT_CONFIG_PATH
            );
            OleloConfig::default()
        }
        Err(e) => return Err(e),
    };

    init_global_config(config);
    Ok(())
}

/// Initialize the global configuration.
pub fn init_global_config(config: OleloConfig) {
    if GLOBAL_CONFIG.set(GlobalConfig::new(config)).is_err() {
        tracing::warn!("Global configuration was already initialized, ignoring new configuration");
    }
}

/// Get the global configuration.
///
/// # Panics
///
/// Panics if the global configuration has not been initialized.
pub fn get_global_config() -> GlobalConfig {
    GLOBAL_CONFIG
        .get()
        .expect("Global configuration not initialized")
        .clone()
}
