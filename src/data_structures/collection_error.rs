// Copyright (c) 2025 Reel Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types shared by the sequence collections.

/// Errors that can occur in positional collection operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum CollectionError {
    /// A positional write addressed a slot past the end of the sequence
    #[error("Index {index} is out of bounds for a collection of length {len}")]
    IndexOutOfBounds {
        /// The requested position.
        index: usize,
        /// The length of the collection at the time of the call.
        len: usize,
    },
}

/// Result type for collection operations
pub type Result<T> = std::result::Result<T, CollectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CollectionError::IndexOutOfBounds { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "Index 7 is out of bounds for a collection of length 3"
        );
    }
}
