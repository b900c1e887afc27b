// Copyright (c) 2025 Reel Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for the chained hash table.

use super::error::{ChainedTableError, Result};

/// Number of buckets allocated when no capacity is given.
pub const DEFAULT_BUCKET_COUNT: usize = 9_000;

/// Upper bound accepted by [`ChainedTableConfig::validate`].
pub const MAX_BUCKET_COUNT: usize = 1 << 26;

/// Configuration for the chained hash table.
///
/// The bucket count is fixed for the lifetime of a table. There is no load
/// factor: once entries outnumber buckets, chains simply grow longer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainedTableConfig {
    /// Number of buckets allocated up front.
    pub capacity: usize,
}

impl ChainedTableConfig {
    /// Creates a new configuration with default values.
    ///
    /// # Returns
    ///
    /// A new `ChainedTableConfig` instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of buckets.
    ///
    /// # Arguments
    ///
    /// * `capacity` - The number of buckets. Clamped to at least 1.
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    /// Checks the configuration before a table is allocated from it.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(ChainedTableError::ZeroCapacity);
        }
        if self.capacity > MAX_BUCKET_COUNT {
            return Err(ChainedTableError::ConfigurationError(format!(
                "capacity {} exceeds the maximum of {} buckets",
                self.capacity, MAX_BUCKET_COUNT
            )));
        }
        Ok(())
    }
}

impl Default for ChainedTableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_BUCKET_COUNT,
        }
    }
}
