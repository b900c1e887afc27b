//! Configuration module for Reel Index.
//!
//! This module loads settings from files (TOML, YAML, JSON) and overrides them
//! with environment variables prefixed `REEL` (nested keys separated by `__`,
//! e.g. `REEL__TABLE__CAPACITY=12000`). All configuration values are validated
//! before use.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use config::{Config, ConfigError as ExternalConfigError, Environment, File, FileFormat};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::config::ConfigError;

pub mod stores;
pub mod table;

pub use stores::StoreConfig;
pub use table::TableConfig;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default configuration location
pub const DEFAULT_CONFIG_PATH: &str = "config/reel.toml";

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "REEL";

/// Picks the configuration file to load.
///
/// An explicit path always wins. Otherwise the default location is used when
/// it exists; a missing default file means built-in defaults and environment
/// overrides only.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
    if default_path.exists() {
        Some(default_path)
    } else {
        tracing::debug!(
            "Default configuration file not found at: {}",
            DEFAULT_CONFIG_PATH
        );
        None
    }
}

/// Initialize the global configuration from `explicit` or the default location.
///
/// # Returns
///
/// * `Ok(())` if the configuration was successfully initialized
/// * `Err(ConfigError)` if the configuration could not be parsed or is invalid
pub fn init_config(explicit: Option<&Path>) -> ConfigResult<()> {
    let config = ConfigLoader::new(resolve_config_path(explicit), ENV_PREFIX).load()?;
    init_global_config(config);
    Ok(())
}

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for Reel Index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ReelConfig {
    /// Hash table configuration
    pub table: TableConfig,

    /// Store query configuration
    pub stores: StoreConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for ReelConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.table.validate()?;
        self.stores.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: false,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::InvalidLogLevel(self.level.clone())),
        }
    }
}

/// Configuration loader for Reel Index.
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

    /// Loads the configuration: defaults, then the file, then environment variables.
    ///
    /// # Returns
    ///
    /// * `Ok(ReelConfig)` if the configuration was loaded successfully
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<ReelConfig> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&ReelConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }
            let name = path
                .to_str()
                .ok_or_else(|| ConfigError::NonUtf8Path(path.clone()))?;

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => return Err(ConfigError::UnsupportedFormat(path.clone())),
            };
            builder = builder.add_source(File::with_name(name).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            ExternalConfigError::FileParse { uri, cause } => ConfigError::ParseError(format!(
                "Error parsing config file {}: {cause}",
                uri.unwrap_or_default()
            )),
            other => ConfigError::ParseError(other.to_string()),
        })?;

        let reel_config: ReelConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        reel_config.validate()?;

        tracing::debug!(
            capacity = reel_config.table.capacity,
            trace_inserts = reel_config.table.trace_inserts,
            "Configuration loaded"
        );
        Ok(reel_config)
    }
}

/// Renders a configuration as TOML.
pub fn to_toml(config: &ReelConfig) -> ConfigResult<String> {
    toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))
}

/// Global configuration, set once at startup.
static GLOBAL_CONFIG: OnceCell<Arc<ReelConfig>> = OnceCell::new();

/// Initialize the global configuration.
///
/// # Arguments
///
/// * `config` - The configuration to set as global
pub fn init_global_config(config: ReelConfig) {
    if GLOBAL_CONFIG.set(Arc::new(config)).is_err() {
        tracing::warn!("Global configuration was already initialized, ignoring new configuration");
    }
}

/// Get the global configuration.
///
/// Returns the built-in defaults if nothing was initialized.
pub fn global_config() -> Arc<ReelConfig> {
    GLOBAL_CONFIG
        .get()
        .cloned()
        .unwrap_or_else(|| Arc::new(ReelConfig::default()))
}
