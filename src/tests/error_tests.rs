//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::data_structures::chained_table::{ChainedTable, ChainedTableConfig, ChainedTableError};
use crate::data_structures::dynamic_array::DynamicArray;
use crate::error::config::ConfigError;
use crate::error::{
    install_default_reporter, report_error, set_error_reporter, ErrorContext, ErrorReporter,
    ReelError, ReelResult, TracingErrorReporter,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = ReelError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors work correctly.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let reel_error = ReelError::Io(io_error);

    let error_string = format!("{reel_error}");
    assert!(error_string.contains("file not found"));
}

/// Component errors convert into the top-level error with `?`.
#[test]
fn test_component_errors_convert() {
    fn build_table() -> ReelResult<ChainedTable<u32, u32>> {
        Ok(ChainedTable::try_with_config(ChainedTableConfig { capacity: 0 })?)
    }

    fn write_past_end() -> ReelResult<u32> {
        let mut array = DynamicArray::new();
        array.add(1u32);
        Ok(array.set(4, 2)?)
    }

    assert!(matches!(
        build_table(),
        Err(ReelError::Table(ChainedTableError::ZeroCapacity))
    ));
    let message = write_past_end().map(|_| String::new()).unwrap_or_else(|e| e.to_string());
    assert!(message.contains("Index 4 is out of bounds"));
}

/// Mock error reporter for testing.
#[derive(Debug, Default)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl MockErrorReporter {
    fn reported_count(&self) -> usize {
        self.reported_count.load(Ordering::SeqCst)
    }
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter receives reports.
///
/// The reporter slot is set once per process, so this is the only test that installs one.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::default());
    assert!(set_error_reporter(reporter.clone()));
    assert!(!set_error_reporter(Arc::new(TracingErrorReporter::new())));

    report_error(ErrorContext::new(
        ReelError::Custom("test error".to_string()),
        "test_component",
    ));

    assert_eq!(reporter.reported_count(), 1);

    // The default reporter never replaces an installed one
    install_default_reporter();
    report_error(
        ErrorContext::new(
            ReelError::Config(ConfigError::FileNotFound("reel.toml".into())),
            "config",
        )
        .with_details("reel.toml"),
    );
    assert_eq!(reporter.reported_count(), 2);
}

/// Test that the default tracing error reporter can be created.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let context = ErrorContext::new(ReelError::Custom("test error".to_string()), "test_component");

    // Just make sure this doesn't panic
    reporter.report(context);
}
