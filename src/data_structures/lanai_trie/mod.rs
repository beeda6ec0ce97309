// Copyright (c) 2025 Lanai Suggest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Trie: a ternary search trie for weighted terms.
//!
//! This module indexes short text terms against payloads (usually popularity
//! weights) and answers three kinds of query:
//!
//! - exact lookup of a single term,
//! - prefix enumeration in ascending order,
//! - bounded-mismatch ("almost match") lookup that tolerates up to three
//!   same-position character substitutions.
//!
//! Every node carries one discriminator character and branches three ways
//! (lower, equal, higher). Character comparisons ignore case, and keys are
//! folded by a [`CaseFolder`] before they reach the trie.
//!
//! # Example
//!
//! ```
//! use lanai_suggest_lib::data_structures::lanai_trie::{LanaiTrie, MismatchPolicy};
//!
//! let mut trie = LanaiTrie::<u32>::new();
//! trie.put("cat", 3).unwrap();
//! trie.put("car", 5).unwrap();
//! trie.put("cab", 1).unwrap();
//!
//! assert_eq!(trie.get("car"), Some(&5));
//! assert_eq!(trie.match_prefix("ca", -1), vec!["cab", "car", "cat"]);
//!
//! trie.set_match_almost_diff(1);
//! assert_eq!(trie.match_almost("cot", -1, MismatchPolicy::Exact), vec!["cat"]);
//! ```
//!
//! # Concurrency
//!
//! A trie is single-threaded. Mutating operations take `&mut self`, so
//! exclusive access during `put`, `remove` and `get_and_increment` is
//! enforced by the borrow checker rather than by locks.

mod config;
mod counter;
mod error;
mod fold;
mod node;
mod prune;
mod search;
mod tie_break;

use std::cmp::Ordering;
use std::fmt;
use std::mem;

pub use self::config::{clamp_match_almost_diff, LanaiTrieConfig, MAX_MATCH_ALMOST_DIFF};
pub use counter::Counter;
pub use error::LanaiTrieError;
pub use fold::{CaseFolder, Locale};
pub use search::{Limit, MismatchPolicy};
pub use tie_break::{RandomTieBreaker, TieBreaker};

#[cfg(test)]
pub(crate) use tie_break::MockTieBreaker;

use fold::compare_chars;
use node::{Kid, NodeArena, NodeId, TstNode};

/// Result type for Lanai Trie operations
pub type LanaiTrieResult<T> = Result<T, LanaiTrieError>;

/// Ternary search trie mapping terms to payloads of type `V`.
pub struct LanaiTrie<V> {
    /// Node storage
    nodes: NodeArena<V>,

    /// Entry point of every walk; `None` while the trie is empty
    root: Option<NodeId>,

    /// Configuration options
    config: LanaiTrieConfig,

    /// Decides lo/hi ties when a deleted node's subtrees are merged
    tie_breaker: Box<dyn TieBreaker + Send>,
}

impl<V> LanaiTrie<V> {
    /// Creates a new empty `LanaiTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(LanaiTrieConfig::default())
    }

    /// Creates a new empty `LanaiTrie` with the specified configuration.
    ///
    /// The deletion tie breaker is seeded from `config.tie_break_seed` when
    /// present and from entropy otherwise.
    pub fn with_config(config: LanaiTrieConfig) -> Self {
        let tie_breaker = match config.tie_break_seed {
            Some(seed) => RandomTieBreaker::with_seed(seed),
            None => RandomTieBreaker::from_entropy(),
        };
        Self::with_tie_breaker(config, Box::new(tie_breaker))
    }

    /// Creates a new empty `LanaiTrie` that takes deletion tie breaks from
    /// `tie_breaker`.
    pub fn with_tie_breaker(
        config: LanaiTrieConfig,
        tie_breaker: Box<dyn TieBreaker + Send>,
    ) -> Self {
        Self {
            nodes: NodeArena::new(),
            root: None,
            config,
            tie_breaker,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &LanaiTrieConfig {
        &self.config
    }

    /// Mismatch tolerance used by [`match_almost`](Self::match_almost).
    pub fn match_almost_diff(&self) -> u8 {
        self.config.match_almost_diff
    }

    /// Sets the mismatch tolerance, clamping it into `0..=3`.
    pub fn set_match_almost_diff(&mut self, diff: i32) {
        let clamped = clamp_match_almost_diff(diff);
        if i32::from(clamped) != diff {
            tracing::debug!(requested = diff, clamped, "match_almost_diff clamped");
        }
        self.config.match_almost_diff = clamped;
    }

    /// Sets the default result cap. Negative values mean unlimited.
    pub fn set_num_return_values(&mut self, limit: i32) {
        self.config.num_return_values = Limit::from(limit);
    }

    /// Associates `value` with `key`, returning the payload it replaced.
    ///
    /// # Errors
    ///
    /// * `LanaiTrieError::InvalidKey` - if the key is empty after folding.
    pub fn put<K>(&mut self, key: K, value: V) -> LanaiTrieResult<Option<V>>
    where
        K: AsRef<str>,
    {
        let folder = self.config.folder;
        let key = folder.fold(key.as_ref());
        let id = self.get_or_create_node(&key)?;
        Ok(self.nodes[id].data.replace(value))
    }

    /// Like [`put`](Self::put) for callers whose key may be missing.
    ///
    /// # Errors
    ///
    /// * `LanaiTrieError::NullKey` - if `key` is `None`.
    /// * `LanaiTrieError::InvalidKey` - if the key is empty after folding.
    pub fn put_nullable<K>(&mut self, key: Option<K>, value: V) -> LanaiTrieResult<Option<V>>
    where
        K: AsRef<str>,
    {
        match key {
            Some(key) => self.put(key, value),
            None => Err(LanaiTrieError::NullKey),
        }
    }

    /// Returns the payload stored under `key`.
    pub fn get<K>(&self, key: K) -> Option<&V>
    where
        K: AsRef<str>,
    {
        let key = self.config.folder.fold(key.as_ref());
        let id = self.find_node(&key)?;
        self.nodes[id].data.as_ref()
    }

    /// Returns a mutable reference to the payload stored under `key`.
    pub fn get_mut<K>(&mut self, key: K) -> Option<&mut V>
    where
        K: AsRef<str>,
    {
        let folder = self.config.folder;
        let key = folder.fold(key.as_ref());
        let id = self.find_node(&key)?;
        self.nodes[id].data.as_mut()
    }

    /// Checks whether `key` is stored.
    pub fn contains_key<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        self.get(key).is_some()
    }

    /// Removes `key`, returning its payload. Absent keys are a no-op.
    ///
    /// Nodes left without a payload and without an eq-child are pruned,
    /// climbing towards the root until a node that is still needed is found.
    pub fn remove<K>(&mut self, key: K) -> Option<V>
    where
        K: AsRef<str>,
    {
        let folder = self.config.folder;
        let key = folder.fold(key.as_ref());
        let id = self.find_node(&key)?;
        let removed = self.nodes[id].data.take()?;
        self.prune_from(id);
        Some(removed)
    }

    /// Number of stored keys.
    pub fn num_data_nodes(&self) -> usize {
        self.count_nodes(true)
    }

    /// Number of branch nodes, including those that end no key.
    pub fn num_nodes(&self) -> usize {
        let count = self.count_nodes(false);
        debug_assert_eq!(count, self.nodes.live());
        count
    }

    /// Alias of [`num_data_nodes`](Self::num_data_nodes).
    pub fn len(&self) -> usize {
        self.num_data_nodes()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Approximate memory used by the trie and its nodes.
    ///
    /// Grows with the node count; payload heap allocations are not included.
    pub fn size_in_bytes(&self) -> usize {
        let per_node = mem::size_of::<Option<TstNode<V>>>();
        mem::size_of::<Self>() + self.num_nodes() * per_node
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Walks from the root without creating anything.
    fn find_node(&self, key: &str) -> Option<NodeId> {
        self.find_node_from(key, self.root)
    }

    fn find_node_from(&self, key: &str, start: Option<NodeId>) -> Option<NodeId> {
        let mut chars = key.chars();
        let mut c = chars.next()?;
        let mut current = start?;
        loop {
            let node = &self.nodes[current];
            current = match compare_chars(c, node.split) {
                Ordering::Equal => match chars.next() {
                    None => return Some(current),
                    Some(next) => {
                        c = next;
                        node.kid(Kid::Eq)?
                    }
                },
                Ordering::Less => node.kid(Kid::Lo)?,
                Ordering::Greater => node.kid(Kid::Hi)?,
            };
        }
    }

    /// Walks from the root, creating every missing branch on the way.
    fn get_or_create_node(&mut self, key: &str) -> LanaiTrieResult<NodeId> {
        let mut chars = key.chars();
        let mut c = chars.next().ok_or(LanaiTrieError::InvalidKey)?;

        let mut current = match self.root {
            Some(root) => root,
            None => {
                let root = self.nodes.alloc(c, None);
                self.root = Some(root);
                root
            }
        };

        loop {
            let (which, split) = match compare_chars(c, self.nodes[current].split) {
                Ordering::Equal => match chars.next() {
                    None => return Ok(current),
                    Some(next) => {
                        c = next;
                        (Kid::Eq, next)
                    }
                },
                Ordering::Less => (Kid::Lo, c),
                Ordering::Greater => (Kid::Hi, c),
            };

            current = match self.nodes[current].kid(which) {
                Some(kid) => kid,
                None => {
                    let kid = self.nodes.alloc(split, Some(current));
                    self.nodes[current].set_kid(which, Some(kid));
                    kid
                }
            };
        }
    }

    fn count_nodes(&self, data_only: bool) -> usize {
        let mut count = 0;
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            if !data_only || node.data.is_some() {
                count += 1;
            }
            stack.extend(
                [Kid::Lo, Kid::Eq, Kid::Hi]
                    .into_iter()
                    .filter_map(|which| node.kid(which)),
            );
        }
        count
    }
}

impl<V: Counter> LanaiTrie<V> {
    /// Increments the counter stored under `key` and returns the new value.
    ///
    /// An absent key is created with [`Counter::ONE`].
    ///
    /// # Errors
    ///
    /// * `LanaiTrieError::InvalidKey` - if the key is empty after folding.
    /// * `LanaiTrieError::CounterOverflow` - if the counter is already at its
    ///   maximum. The stored value is left unchanged.
    pub fn get_and_increment<K>(&mut self, key: K) -> LanaiTrieResult<V>
    where
        K: AsRef<str>,
    {
        let folder = self.config.folder;
        let key = folder.fold(key.as_ref());
        if key.is_empty() {
            return Err(LanaiTrieError::InvalidKey);
        }

        let next = match self.find_node(&key).and_then(|id| self.nodes[id].data) {
            None => V::ONE,
            Some(current) => {
                current
                    .checked_increment()
                    .ok_or_else(|| LanaiTrieError::CounterOverflow {
                        key: key.to_string(),
                    })?
            }
        };

        let id = self.get_or_create_node(&key)?;
        self.nodes[id].data = Some(next);
        Ok(next)
    }
}

impl<V> Default for LanaiTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for LanaiTrie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanaiTrie")
            .field("root", &self.root)
            .field("nodes", &self.nodes.live())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
