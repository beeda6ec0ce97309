//! Loader configuration module.
//!
//! Settings for parsing weighted-term files.

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;

/// Weighted-term file configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderSettings {
    /// Text between a term and its weight
    pub separator: String,

    /// Whether repeated terms add up their weights
    pub accumulate_duplicates: bool,

    /// Whether lines with unparsable weights are skipped instead of failing the load
    pub skip_malformed: bool,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            separator: "\t".to_string(),
            accumulate_duplicates: true,
            skip_malformed: false,
        }
    }
}

impl Validate for LoaderSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.separator.is_empty() {
            return Err(ConfigError::ValidationError(
                "separator must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
