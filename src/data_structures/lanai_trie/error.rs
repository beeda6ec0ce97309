//! Error types for the Lanai Trie.
//!
//! This module defines the error types that can occur during Lanai Trie operations.
//! Lookups that find nothing are not errors; they return `None` or an empty list.

/// Errors that can occur in Lanai Trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LanaiTrieError {
    /// The key was empty (after case folding) on an insert-like call.
    #[error("Empty key not allowed")]
    InvalidKey,

    /// No key was supplied at all.
    #[error("Key must be present")]
    NullKey,

    /// Incrementing the counter stored under a key would overflow its type.
    #[error("Counter for key '{key}' cannot be incremented without overflow")]
    CounterOverflow {
        /// The key whose counter is saturated.
        key: String,
    },

    /// A locale tag that the case folder does not recognise.
    #[error("Unknown case-folding locale: {0}")]
    UnknownLocale(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(LanaiTrieError::InvalidKey.to_string(), "Empty key not allowed");
        assert_eq!(LanaiTrieError::NullKey.to_string(), "Key must be present");

        let err = LanaiTrieError::CounterOverflow {
            key: "hits".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Counter for key 'hits' cannot be incremented without overflow"
        );

        let err = LanaiTrieError::UnknownLocale("xx".to_string());
        assert_eq!(err.to_string(), "Unknown case-folding locale: xx");
    }
}
