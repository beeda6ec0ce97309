//! Data structures for Lanai Suggest.
//!
//! This module contains the in-memory index used to answer term queries.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Explicit error types for every fallible operation
//! - Iterative traversals where input size drives depth

pub mod lanai_trie;

// Re-export common data structures
pub use lanai_trie::{LanaiTrie, LanaiTrieError, LanaiTrieResult};
