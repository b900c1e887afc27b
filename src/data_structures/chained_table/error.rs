// Copyright (c) 2025 Reel Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the chained hash table.
//!
//! Lookups never fail: absence is reported through `Option`/`bool` returns.
//! The only fallible step is building a table from an explicit configuration.

/// Error types for chained table construction
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum ChainedTableError {
    /// A table needs at least one bucket to address keys
    #[error("Chained table capacity must be at least 1 bucket")]
    ZeroCapacity,

    /// Configuration error
    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),
}

/// Result type for chained table operations
pub type Result<T> = std::result::Result<T, ChainedTableError>;
