//! Test modules for Reel Index.
//!
//! This module contains the cross-component test suites:
//! - Property-based tests for the chained table, ranking and rating store using proptest
//! - Table-driven cases using test-case
//! - Configuration loading tests against temporary files
//! - Shared fixtures and strategies
//!
//! Unit tests for individual components live next to the components.

pub mod collections_tests;
pub mod error_tests;
pub mod rating_store_tests;
