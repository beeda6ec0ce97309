//! Test modules for Lanai Suggest.
//!
//! This module contains the cross-component test suites:
//! - Configuration loading and validation
//! - Error wrapping and reporting
//! - Trie behaviour checked against a sorted-map model with proptest
//! - Term file loading through real files
//!
//! Unit tests that only touch one file live next to that file instead.

pub mod config_tests;
pub mod error_tests;
pub mod loader_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{create_test_dir, key_strategy, keys_strategy, TestFixture, TrieOp};
