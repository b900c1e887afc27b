//! Reel Index Library
//!
//! An in-memory index over movie, credit and rating records. Every store is
//! built on a fixed-capacity chained hash table and a small set of
//! hand-rolled collections, with ranking queries answered by
//! partition-exchange and merge sorts over independent snapshots.
//!
//! # Architecture
//!
//! - [`data_structures`]: chained table, dynamic array, ordered list, unique set, ranking
//! - [`records`]: plain film, credit, rating and collection records
//! - [`stores`]: the movie, credit and rating stores and their queries
//! - [`config`] and [`error`]: configuration loading and error types
//!
//! Everything is single-threaded and synchronous; query results are owned
//! copies that never alias store state.

use std::path::Path;
use std::sync::Arc;

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod records;
pub mod stores;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Reel Index.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing error reporter (unless one is already set) and loads
/// the global configuration from `config_path`, or from the default location
/// and `REEL` environment variables when no path is given.
pub fn init(config_path: Option<&Path>) -> error::ReelResult<Arc<config::ReelConfig>> {
    error::install_default_reporter();
    config::init_config(config_path)?;
    Ok(config::global_config())
}
