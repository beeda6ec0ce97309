// Copyright (c) 2025 Lanai Suggest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for the Lanai Trie.

use super::fold::{CaseFolder, Locale};
use super::search::Limit;

/// Largest number of substitutions an almost-match query may tolerate.
pub const MAX_MATCH_ALMOST_DIFF: u8 = 3;

/// Clamps a requested mismatch tolerance into `0..=MAX_MATCH_ALMOST_DIFF`.
pub fn clamp_match_almost_diff(diff: i32) -> u8 {
    diff.clamp(0, i32::from(MAX_MATCH_ALMOST_DIFF)) as u8
}

/// Configuration for the Lanai Trie.
#[derive(Debug, Clone, PartialEq)]
pub struct LanaiTrieConfig {
    /// Substitutions tolerated by almost-match queries (0 to 3).
    pub match_almost_diff: u8,

    /// Result cap used when a query does not pass its own.
    pub num_return_values: Limit,

    /// Normalization applied to every key before it reaches the trie.
    pub folder: CaseFolder,

    /// Seed for the deletion tie breaker; entropy-seeded when `None`.
    pub tie_break_seed: Option<u64>,
}

impl LanaiTrieConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the mismatch tolerance.
    ///
    /// Values outside `0..=3` are clamped rather than rejected.
    pub fn with_match_almost_diff(mut self, diff: i32) -> Self {
        self.match_almost_diff = clamp_match_almost_diff(diff);
        self
    }

    /// Sets the default result cap. Negative values mean unlimited.
    pub fn with_num_return_values(mut self, limit: i32) -> Self {
        self.num_return_values = Limit::from(limit);
        self
    }

    /// Folds keys with the given locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.folder = CaseFolder::new(locale);
        self
    }

    /// Turns key folding off; keys are stored and looked up verbatim.
    pub fn without_case_folding(mut self) -> Self {
        self.folder = CaseFolder::disabled();
        self
    }

    /// Makes deletion tie breaks reproducible.
    pub fn with_tie_break_seed(mut self, seed: u64) -> Self {
        self.tie_break_seed = Some(seed);
        self
    }
}

impl Default for LanaiTrieConfig {
    fn default() -> Self {
        Self {
            match_almost_diff: 0,
            num_return_values: Limit::Unlimited,
            folder: CaseFolder::default(),
            tie_break_seed: None,
        }
    }
}
