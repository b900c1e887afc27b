// Copyright (c) 2025 Reel Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Fixed-capacity separate-chaining hash table.
//!
//! Every index in Reel Index is built on this table. It allocates its bucket
//! array once (9000 buckets unless configured otherwise) and resolves
//! collisions by chaining entries inside each bucket, newest first.
//!
//! # Features
//!
//! - Head insertion with an explicit duplicate policy per call site
//! - Per-bucket size counters maintained on every insert and removal
//! - Independent value snapshots for callers that need to iterate and sort
//! - Optional insert diagnostics through [`InsertObserver`]
//!
//! # Example
//!
//! ```
//! use reel_index_lib::data_structures::chained_table::ChainedTable;
//!
//! let mut table = ChainedTable::<u32, String>::new();
//!
//! assert!(table.insert_or_reject(862, "Toy Story".to_string()));
//! assert!(!table.insert_or_reject(862, "Jumanji".to_string()));
//! assert_eq!(table.get(&862).map(String::as_str), Some("Toy Story"));
//!
//! let previous = table.insert_or_overwrite(862, "Toy Story 2".to_string());
//! assert_eq!(previous.as_deref(), Some("Toy Story"));
//! assert_eq!(table.len(), 1);
//! ```
//!
//! # Capacity
//!
//! The table never rehashes. With more entries than buckets, chains grow and
//! lookups slow down linearly; [`ChainedTable::stats`] exposes the longest
//! chain and the load factor for monitoring.

// Module declarations
mod bucket;
mod config;
mod error;
mod hash;
mod observer;
mod table;

// Re-exports
pub use config::{ChainedTableConfig, DEFAULT_BUCKET_COUNT, MAX_BUCKET_COUNT};
pub use error::{ChainedTableError, Result};
pub use hash::{hash_key, locate, DefaultBuildHasher};
pub use observer::{InsertEvent, InsertObserver, TracingInsertObserver};
pub use table::{ChainStats, ChainedTable, Iter};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Default)]
    struct RecordingObserver {
        locations: Mutex<Vec<(usize, usize)>>,
    }

    impl InsertObserver for RecordingObserver {
        fn on_insert(&self, event: &InsertEvent<'_>) {
            if let Ok(mut locations) = self.locations.lock() {
                locations.push((event.location, event.chain_len));
            }
        }
    }

    #[test]
    fn test_basic_operations() {
        let mut table = ChainedTable::<String, usize>::new();

        assert!(table.insert_or_reject("hello".to_string(), 1));
        assert!(table.insert_or_reject("world".to_string(), 2));

        assert_eq!(table.get("hello"), Some(&1));
        assert_eq!(table.get("world"), Some(&2));
        assert_eq!(table.get("test"), None);

        assert!(!table.insert_or_reject("hello".to_string(), 100));
        assert_eq!(table.get("hello"), Some(&1));
        assert_eq!(table.capacity(), DEFAULT_BUCKET_COUNT);
    }

    #[test]
    fn test_custom_configuration() {
        let config = ChainedTableConfig::new().with_capacity(7);
        let table = ChainedTable::<u32, u32>::try_with_config(config);

        assert!(table.is_ok());
        if let Ok(table) = table {
            assert_eq!(table.capacity(), 7);
        }

        let invalid = ChainedTableConfig { capacity: 0 };
        assert!(matches!(
            ChainedTable::<u32, u32>::try_with_config(invalid),
            Err(ChainedTableError::ZeroCapacity)
        ));
    }

    #[test]
    fn test_observer_sees_every_insert() {
        let observer = Arc::new(RecordingObserver::default());
        let mut table = ChainedTable::with_capacity(1).with_observer(observer.clone());

        table.add(1u32, "a");
        table.insert_or_reject(2u32, "b");
        table.insert_or_reject(2u32, "rejected");
        table.insert_or_overwrite(1u32, "c");

        let locations = observer.locations.lock().map(|l| l.clone()).unwrap_or_default();
        assert_eq!(locations, vec![(0, 1), (0, 2), (0, 2)]);
    }

    #[test]
    fn test_no_observer_by_default() {
        let mut table = ChainedTable::<u32, u32>::new();
        table.add(1, 1);
        table.set_observer(Some(Arc::new(TracingInsertObserver)));
        table.add(2, 2);
        table.set_observer(None);
        assert_eq!(table.len(), 2);
    }
}
