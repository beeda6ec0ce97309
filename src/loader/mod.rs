//! Weighted-term loader.
//!
//! Reads line-oriented term files into a [`LanaiTrie`]. Each line holds a
//! term, optionally followed by a separator and a numeric weight:
//!
//! ```text
//! apple	12.5
//! apricot	3
//! banana
//! ```
//!
//! Unweighted lines count as one occurrence of the term.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Add;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::config::loader::LoaderSettings;
use crate::data_structures::lanai_trie::{Counter, LanaiTrie, LanaiTrieResult};
use crate::error::load::LoadError;

/// Result type for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Counters describing one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Lines read, including skipped ones
    pub lines: usize,

    /// Terms that were not in the trie before
    pub inserted: usize,

    /// Terms whose weight was replaced or accumulated
    pub updated: usize,

    /// Blank or malformed lines that were ignored
    pub skipped: usize,
}

/// Parses weighted-term lines and feeds them into a trie.
#[derive(Debug, Clone, Default)]
pub struct WeightedTermLoader {
    settings: LoaderSettings,
}

impl WeightedTermLoader {
    /// Creates a loader with the given settings.
    pub fn new(settings: LoaderSettings) -> Self {
        Self { settings }
    }

    /// Opens `path` and loads every line into `trie`.
    pub fn load_path<P, V>(&self, path: P, trie: &mut LanaiTrie<V>) -> LoadResult<LoadStats>
    where
        P: AsRef<Path>,
        V: Counter + FromStr + Add<Output = V>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let stats = self.load_into(BufReader::new(file), trie)?;
        tracing::info!(
            path = %path.display(),
            lines = stats.lines,
            inserted = stats.inserted,
            updated = stats.updated,
            skipped = stats.skipped,
            "Loaded term file"
        );
        Ok(stats)
    }

    /// Loads every line of `reader` into `trie`.
    ///
    /// # Errors
    ///
    /// * `LoadError::Io` - if reading fails.
    /// * `LoadError::InvalidWeight` - if a weight does not parse and
    ///   `skip_malformed` is off.
    /// * `LoadError::Trie` - if the trie rejects a term and `skip_malformed`
    ///   is off.
    pub fn load_into<R, V>(&self, reader: R, trie: &mut LanaiTrie<V>) -> LoadResult<LoadStats>
    where
        R: BufRead,
        V: Counter + FromStr + Add<Output = V>,
    {
        let mut stats = LoadStats::default();

        for (index, line) in reader.lines().enumerate() {
            let line_no = index + 1;
            let line = line.map_err(|source| LoadError::Io {
                line: line_no,
                source,
            })?;
            stats.lines += 1;

            if line.trim().is_empty() {
                stats.skipped += 1;
                continue;
            }

            let (term, weight) = match line.split_once(self.settings.separator.as_str()) {
                Some((term, raw)) => match raw.trim().parse::<V>() {
                    Ok(weight) => (term, Some(weight)),
                    Err(_) if self.settings.skip_malformed => {
                        tracing::warn!(line = line_no, value = raw, "Skipping unparsable weight");
                        stats.skipped += 1;
                        continue;
                    }
                    Err(_) => {
                        return Err(LoadError::InvalidWeight {
                            line: line_no,
                            value: raw.to_string(),
                        })
                    }
                },
                None => (line.as_str(), None),
            };

            let existed = trie.contains_key(term);
            match self.store(trie, term, weight) {
                Ok(()) if existed => stats.updated += 1,
                Ok(()) => stats.inserted += 1,
                Err(source) if self.settings.skip_malformed => {
                    tracing::warn!(line = line_no, error = %source, "Skipping rejected term");
                    stats.skipped += 1;
                }
                Err(source) => {
                    return Err(LoadError::Trie {
                        line: line_no,
                        source,
                    })
                }
            }
        }

        tracing::debug!(?stats, "Term load finished");
        Ok(stats)
    }

    fn store<V>(&self, trie: &mut LanaiTrie<V>, term: &str, weight: Option<V>) -> LanaiTrieResult<()>
    where
        V: Counter + Add<Output = V>,
    {
        if !self.settings.accumulate_duplicates {
            trie.put(term, weight.unwrap_or(V::ONE))?;
            return Ok(());
        }

        match weight {
            None => {
                trie.get_and_increment(term)?;
            }
            Some(weight) => {
                let total = match trie.get(term) {
                    Some(&existing) => existing + weight,
                    None => weight,
                };
                trie.put(term, total)?;
            }
        }
        Ok(())
    }
}
