//! Configuration errors.
//!
//! Raised while locating, parsing or validating a `ReelConfig`, and while
//! rendering one back out for `gen-config`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly named configuration file does not exist.
    #[error("No configuration file at {0}")]
    FileNotFound(PathBuf),

    /// The configuration path cannot be handed to the loader.
    #[error("Configuration path is not valid UTF-8: {0:?}")]
    NonUtf8Path(PathBuf),

    /// The file extension is not one of toml, json, yaml or yml.
    #[error("Unsupported configuration format for {0:?}; expected .toml, .json or .yaml")]
    UnsupportedFormat(PathBuf),

    /// The sources could not be merged into a configuration.
    #[error("Could not parse configuration: {0}")]
    ParseError(String),

    /// `log.level` is not a tracing level name.
    #[error("Unknown log level {0:?}; expected trace, debug, info, warn or error")]
    InvalidLogLevel(String),

    /// `table.capacity` would leave a table with no buckets or too many.
    #[error("table.capacity must be between 1 and {max} buckets, got {capacity}")]
    TableCapacity {
        /// Requested bucket count
        capacity: usize,
        /// Largest accepted bucket count
        max: usize,
    },

    /// `stores.star_billing_max_order` is beyond any plausible cast list.
    #[error("stores.star_billing_max_order must be at most {max}, got {order}")]
    StarBillingOrder {
        /// Requested billing order
        order: u32,
        /// Largest accepted billing order
        max: u32,
    },

    /// The configuration could not be rendered as TOML.
    #[error("Could not render configuration as TOML: {0}")]
    SerializeError(String),
}
