// Copyright (c) 2025 Reel Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Pluggable diagnostics for table inserts.
//!
//! A table notifies its observer, if one is installed, after every head
//! insertion. Nothing is emitted when no observer is installed.

use std::fmt::Debug;

/// Description of a single insertion, handed to an [`InsertObserver`].
#[derive(Debug, Clone, Copy)]
pub struct InsertEvent<'a> {
    /// The inserted key.
    pub key: &'a dyn Debug,

    /// Bucket index the entry was placed in.
    pub location: usize,

    /// Chain length of that bucket after the insert.
    pub chain_len: usize,
}

/// Observer trait for table insert diagnostics.
pub trait InsertObserver: Send + Sync + Debug {
    /// Called once per inserted entry.
    ///
    /// # Arguments
    ///
    /// * `event` - What was inserted and where
    fn on_insert(&self, event: &InsertEvent<'_>);
}

/// Observer that records every insert as a `tracing` debug event.
#[derive(Default, Debug, Clone, Copy)]
pub struct TracingInsertObserver;

impl InsertObserver for TracingInsertObserver {
    fn on_insert(&self, event: &InsertEvent<'_>) {
        tracing::debug!(
            key = ?event.key,
            location = event.location,
            chain_len = event.chain_len,
            "Added entry"
        );
    }
}
