//! Error module for Reel Index.
//!
//! Component errors (table construction, positional collection writes,
//! configuration) are defined next to their components and folded into
//! [`ReelError`] here. Lookups never produce errors: absence is reported with
//! `Option`, `bool`, or documented sentinel values.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::data_structures::chained_table::ChainedTableError;
use crate::data_structures::collection_error::CollectionError;

pub mod config;

/// Result type alias used throughout Reel Index.
pub type ReelResult<T> = Result<T, ReelError>;

/// Core error enum for Reel Index.
#[derive(Error, Debug)]
pub enum ReelError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors building a chained table.
    #[error("Table error: {0}")]
    Table(#[from] ChainedTableError),

    /// Errors from positional collection writes.
    #[error("Collection error: {0}")]
    Collection(#[from] CollectionError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: ReelError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: ReelError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    ///
    /// # Arguments
    ///
    /// * `context` - The error context to report
    fn report(&self, context: ErrorContext);
}

/// Error reporter that logs through the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl TracingErrorReporter {
    /// Creates a new tracing reporter.
    pub fn new() -> Self {
        Self
    }
}

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Process-wide error reporter, installed once.
static ERROR_REPORTER: OnceCell<Arc<dyn ErrorReporter>> = OnceCell::new();

/// Set the global error reporter.
///
/// # Returns
///
/// `false` if a reporter was already installed; the first one stays.
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) -> bool {
    let installed = ERROR_REPORTER.set(reporter).is_ok();
    if !installed {
        tracing::warn!("Error reporter was already initialized, ignoring new reporter");
    }
    installed
}

/// Install the tracing reporter unless another reporter is already set.
pub fn install_default_reporter() {
    ERROR_REPORTER.get_or_init(|| Arc::new(TracingErrorReporter::new()));
}

/// Report an error through the global reporter.
///
/// Falls back to standard error when no reporter has been installed.
pub fn report_error(context: ErrorContext) {
    match ERROR_REPORTER.get() {
        Some(reporter) => reporter.report(context),
        None => eprintln!("Error: {context}"),
    }
}
