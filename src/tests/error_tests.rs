//! Tests for the error module.
//!
//! This module contains tests for error wrapping, display and reporting.

use crate::data_structures::lanai_trie::LanaiTrieError;
use crate::error::{
    config::ConfigError, load::LoadError, report_error, set_error_reporter, ErrorContext,
    ErrorReporter, LanaiError, TracingErrorReporter,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = LanaiError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that area errors convert into the crate error.
#[test]
fn test_from_conversions() {
    let trie: LanaiError = LanaiTrieError::InvalidKey.into();
    assert!(matches!(trie, LanaiError::Trie(LanaiTrieError::InvalidKey)));
    assert_eq!(trie.to_string(), "Trie error: Empty key not allowed");

    let config: LanaiError = ConfigError::ValidationError("bad".to_string()).into();
    assert!(matches!(config, LanaiError::Config(_)));

    let load: LanaiError = LoadError::InvalidWeight {
        line: 3,
        value: "x".to_string(),
    }
    .into();
    assert_eq!(load.to_string(), "Load error: Invalid weight 'x' on line 3");
}

/// Test that nested errors keep their source message.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let lanai_error = LanaiError::Io(io_error);

    let error_string = format!("{lanai_error}");
    assert!(error_string.contains("file not found"));

    let load = LoadError::Trie {
        line: 1,
        source: LanaiTrieError::NullKey,
    };
    let source = std::error::Error::source(&load).map(|s| s.to_string());
    assert_eq!(source.as_deref(), Some("Key must be present"));
}

/// Counting error reporter for testing.
#[derive(Debug, Default)]
struct CountingErrorReporter {
    reported_count: AtomicUsize,
}

impl ErrorReporter for CountingErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that a reporter receives the contexts handed to it.
#[test]
fn test_error_reporter_trait() {
    let reporter = CountingErrorReporter::default();
    reporter.report(ErrorContext::new(
        LanaiError::Custom("one".to_string()),
        "test_component",
    ));
    reporter.report(ErrorContext::new(
        LanaiError::Custom("two".to_string()),
        "test_component",
    ));
    assert_eq!(reporter.reported_count.load(Ordering::SeqCst), 2);
}

/// Test that the global reporter can only be installed once.
#[test]
fn test_global_error_reporter_installs_once() {
    // Another test may have installed one already; either way a second call loses.
    set_error_reporter(Arc::new(TracingErrorReporter));
    assert!(!set_error_reporter(Arc::new(CountingErrorReporter::default())));

    // Just make sure this doesn't panic
    report_error(ErrorContext::new(
        LanaiError::Custom("after install".to_string()),
        "test_component",
    ));
}

/// Test that the default tracing error reporter can be created.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let error = LanaiError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component");

    // Just make sure this doesn't panic
    reporter.report(context);
}

/// Test that library initialization succeeds with defaults.
#[test]
fn test_library_init_with_defaults() {
    assert!(crate::init(None).is_ok());
    assert_eq!(crate::config::global_config().trie.num_return_values, -1);
}
