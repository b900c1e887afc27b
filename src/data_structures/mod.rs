//! Data structures for Reel Index.
//!
//! This module contains the hand-rolled collections every store is built on:
//! - A fixed-capacity separate-chaining hash table
//! - A growable array and a head-insertion linked list
//! - A deduplicating set over the growable array
//! - Top-N ranking over looked-up metrics
//!
//! All implementations are single-threaded and free of unsafe code.

pub mod chained_table;
pub mod collection_error;
pub mod dynamic_array;
pub mod ordered_list;
pub mod ranking;
pub mod unique_set;

// Re-export common data structures
pub use chained_table::{ChainedTable, ChainedTableConfig, ChainedTableError, InsertObserver};
pub use collection_error::CollectionError;
pub use dynamic_array::DynamicArray;
pub use ordered_list::OrderedList;
pub use ranking::{top_n, DenseTally, MetricLookup, RankingAlgorithm};
pub use unique_set::UniqueSet;
