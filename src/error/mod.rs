//! Error module for Lanai Suggest.
//!
//! This module provides the crate-level error type, which wraps the error
//! enums of each area (configuration, trie, loader) with `#[from]`
//! conversions, plus a small reporting layer used by the binary.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::data_structures::lanai_trie::LanaiTrieError;

pub mod config;
pub mod load;

/// Result type alias used throughout Lanai Suggest.
pub type LanaiResult<T> = Result<T, LanaiError>;

/// Core error enum for Lanai Suggest.
#[derive(Error, Debug)]
pub enum LanaiError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by trie operations.
    #[error("Trie error: {0}")]
    Trie(#[from] LanaiTrieError),

    /// Errors raised while loading a weighted-term file.
    #[error("Load error: {0}")]
    Load(#[from] load::LoadError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors when rendering query results.
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
    pub error: LanaiError,

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
    pub fn new<S: Into<String>>(error: LanaiError, component: S) -> Self {
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
    fn report(&self, context: ErrorContext);
}

/// An error reporter that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

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

/// Process-wide reporter, installed at most once.
static ERROR_REPORTER: OnceCell<Arc<dyn ErrorReporter>> = OnceCell::new();

/// Installs the global error reporter.
///
/// Returns `false` if a reporter was already installed; the first one stays.
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) -> bool {
    let installed = ERROR_REPORTER.set(reporter).is_ok();
    if !installed {
        tracing::warn!("Error reporter was already installed, ignoring new reporter");
    }
    installed
}

/// Reports an error through the global reporter.
///
/// Falls back to standard error output when no reporter is installed.
pub fn report_error(context: ErrorContext) {
    match ERROR_REPORTER.get() {
        Some(reporter) => reporter.report(context),
        None => eprintln!("Error: {context}"),
    }
}
