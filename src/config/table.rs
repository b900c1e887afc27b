//! Hash table configuration module.
//!
//! This module defines how the chained tables behind every store are sized
//! and whether their inserts are traced.

use super::{ConfigResult, Validate};
use crate::data_structures::chained_table::{
    ChainedTableConfig, DEFAULT_BUCKET_COUNT, MAX_BUCKET_COUNT,
};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Table configuration shared by all stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Number of buckets allocated per table
    pub capacity: usize,

    /// Whether every insert emits a debug trace event
    pub trace_inserts: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_BUCKET_COUNT,
            trace_inserts: false,
        }
    }
}

impl Validate for TableConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.capacity == 0 || self.capacity > MAX_BUCKET_COUNT {
            return Err(ConfigError::TableCapacity {
                capacity: self.capacity,
                max: MAX_BUCKET_COUNT,
            });
        }
        Ok(())
    }
}

impl TableConfig {
    /// Converts to the table-level configuration.
    pub fn to_table_config(&self) -> ChainedTableConfig {
        ChainedTableConfig::new().with_capacity(self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TableConfig::default();
        assert_eq!(config.capacity, 9_000);
        assert!(!config.trace_inserts);
        assert!(config.validate().is_ok());
        assert_eq!(config.to_table_config().capacity, 9_000);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = TableConfig {
            capacity: 0,
            trace_inserts: false,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TableCapacity { capacity: 0, .. })
        ));

        let message = config.validate().map(|_| String::new()).unwrap_or_else(|e| e.to_string());
        assert!(message.contains("table.capacity"));
        assert!(message.contains("got 0"));
    }
}
