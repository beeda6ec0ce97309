//! Trie configuration module.
//!
//! File and environment facing settings for the Lanai Trie, converted into a
//! [`LanaiTrieConfig`] once validated.

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::data_structures::lanai_trie::{LanaiTrie, LanaiTrieConfig, Locale};
use crate::error::config::ConfigError;

/// Trie configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrieSettings {
    /// Substitutions tolerated by almost-match queries.
    ///
    /// Values outside 0..=3 are clamped, not rejected.
    pub match_almost_diff: i32,

    /// Default result cap; negative means unlimited
    pub num_return_values: i32,

    /// Whether keys are trimmed and lowercased before use
    pub case_folding: bool,

    /// Locale tag for case folding (`root`, `tr`, `az`, ...)
    pub locale: String,

    /// Seed for deletion tie breaks; entropy when unset
    pub tie_break_seed: Option<u64>,
}

impl Default for TrieSettings {
    fn default() -> Self {
        Self {
            match_almost_diff: 0,
            num_return_values: -1,
            case_folding: true,
            locale: "root".to_string(),
            tie_break_seed: None,
        }
    }
}

impl Validate for TrieSettings {
    fn validate(&self) -> ConfigResult<()> {
        self.parsed_locale().map(|_| ())
    }
}

impl TrieSettings {
    fn parsed_locale(&self) -> ConfigResult<Locale> {
        self.locale
            .parse::<Locale>()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))
    }

    /// Builds the trie configuration described by these settings.
    pub fn to_trie_config(&self) -> ConfigResult<LanaiTrieConfig> {
        let mut config = LanaiTrieConfig::new()
            .with_match_almost_diff(self.match_almost_diff)
            .with_num_return_values(self.num_return_values);

        config = if self.case_folding {
            config.with_locale(self.parsed_locale()?)
        } else {
            config.without_case_folding()
        };

        if let Some(seed) = self.tie_break_seed {
            config = config.with_tie_break_seed(seed);
        }
        Ok(config)
    }

    /// Creates an empty trie configured by these settings.
    pub fn build_trie<V>(&self) -> ConfigResult<LanaiTrie<V>> {
        Ok(LanaiTrie::with_config(self.to_trie_config()?))
    }
}
