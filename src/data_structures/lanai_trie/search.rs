// Copyright (c) 2025 Lanai Suggest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix and almost-match enumeration.
//!
//! Both walks use an explicit stack instead of recursion so that long keys
//! or long lo/hi chains cannot exhaust the call stack. Frames are pushed in
//! reverse so that they pop in lo, self, eq, hi order.

use std::cmp::Ordering;

use super::config::clamp_match_almost_diff;
use super::fold::compare_chars;
use super::node::{Kid, NodeId};
use super::LanaiTrie;

/// Maximum number of results a query may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Limit {
    /// Return every match.
    #[default]
    Unlimited,

    /// Stop after this many matches.
    AtMost(usize),
}

impl Limit {
    #[inline]
    fn is_reached(self, collected: usize) -> bool {
        match self {
            Limit::Unlimited => false,
            Limit::AtMost(max) => collected >= max,
        }
    }
}

impl From<i32> for Limit {
    /// Negative values mean unlimited.
    fn from(limit: i32) -> Self {
        usize::try_from(limit).map_or(Limit::Unlimited, Limit::AtMost)
    }
}

/// Which mismatch counts an almost-match query reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchPolicy {
    /// Only keys that differ in exactly the configured number of positions.
    Exact,

    /// Keys that differ in anywhere from zero up to the configured number.
    UpTo,
}

impl MismatchPolicy {
    /// Whether a key whose walk ended with `remaining` budget qualifies.
    #[inline]
    fn accepts(self, remaining: i32) -> bool {
        match self {
            MismatchPolicy::Exact => remaining == 0,
            MismatchPolicy::UpTo => remaining >= 0,
        }
    }
}

enum SortStep {
    Visit(NodeId),
    Emit(NodeId),
}

enum AlmostStep {
    Visit {
        node: NodeId,
        index: usize,
        budget: i32,
    },
    Emit(NodeId),
}

impl<V> LanaiTrie<V> {
    /// Returns keys starting with `prefix` in ascending order.
    ///
    /// The prefix itself comes first when it is a stored key. An empty prefix
    /// enumerates the whole trie.
    pub fn match_prefix<K>(&self, prefix: K, limit: impl Into<Limit>) -> Vec<String>
    where
        K: AsRef<str>,
    {
        let limit = limit.into();
        let prefix = self.config.folder.fold(prefix.as_ref());
        if prefix.is_empty() {
            return self.sort_keys(limit);
        }

        let mut result = Vec::new();
        let Some(start) = self.find_node(&prefix) else {
            return result;
        };
        if limit.is_reached(0) {
            return result;
        }

        let node = &self.nodes[start];
        if node.data.is_some() {
            result.push(self.key_of(start));
        }
        self.collect_sorted(node.kid(Kid::Eq), limit, &mut result);
        result
    }

    /// [`match_prefix`](Self::match_prefix) capped by the configured default.
    pub fn match_prefix_default<K>(&self, prefix: K) -> Vec<String>
    where
        K: AsRef<str>,
    {
        self.match_prefix(prefix, self.config.num_return_values)
    }

    /// Every stored key in ascending order.
    pub fn sort_keys(&self, limit: impl Into<Limit>) -> Vec<String> {
        let mut result = Vec::new();
        self.collect_sorted(self.root, limit.into(), &mut result);
        result
    }

    /// Returns keys of the same length as `key` that differ from it in a
    /// number of positions allowed by `policy` and the configured tolerance.
    ///
    /// Results follow trie order (lo, self, eq, hi) and are not grouped by
    /// mismatch count.
    pub fn match_almost<K>(
        &self,
        key: K,
        limit: impl Into<Limit>,
        policy: MismatchPolicy,
    ) -> Vec<String>
    where
        K: AsRef<str>,
    {
        let diff = i32::from(self.config.match_almost_diff);
        self.match_almost_with_diff(key, diff, limit, policy)
    }

    /// [`match_almost`](Self::match_almost) with an explicit tolerance,
    /// clamped into `0..=3`.
    pub fn match_almost_with_diff<K>(
        &self,
        key: K,
        diff: i32,
        limit: impl Into<Limit>,
        policy: MismatchPolicy,
    ) -> Vec<String>
    where
        K: AsRef<str>,
    {
        let limit = limit.into();
        let diff = i32::from(clamp_match_almost_diff(diff));
        let key: Vec<char> = self.config.folder.fold(key.as_ref()).chars().collect();

        let mut result = Vec::new();
        let mut stack = Vec::new();
        if let (Some(root), false) = (self.root, key.is_empty()) {
            stack.push(AlmostStep::Visit {
                node: root,
                index: 0,
                budget: diff,
            });
        }

        while let Some(step) = stack.pop() {
            if limit.is_reached(result.len()) {
                break;
            }

            let (id, index, budget) = match step {
                AlmostStep::Emit(id) => {
                    result.push(self.key_of(id));
                    continue;
                }
                AlmostStep::Visit {
                    node,
                    index,
                    budget,
                } => (node, index, budget),
            };

            let node = &self.nodes[id];
            let ordering = compare_chars(key[index], node.split);
            let next_budget = if ordering == Ordering::Equal {
                budget
            } else {
                budget - 1
            };
            let last = index + 1 == key.len();

            if budget > 0 || ordering == Ordering::Greater {
                if let Some(hi) = node.kid(Kid::Hi) {
                    stack.push(AlmostStep::Visit {
                        node: hi,
                        index,
                        budget,
                    });
                }
            }
            if next_budget >= 0 && !last {
                if let Some(eq) = node.kid(Kid::Eq) {
                    stack.push(AlmostStep::Visit {
                        node: eq,
                        index: index + 1,
                        budget: next_budget,
                    });
                }
            }
            if last && node.data.is_some() && policy.accepts(next_budget) {
                stack.push(AlmostStep::Emit(id));
            }
            if budget > 0 || ordering == Ordering::Less {
                if let Some(lo) = node.kid(Kid::Lo) {
                    stack.push(AlmostStep::Visit {
                        node: lo,
                        index,
                        budget,
                    });
                }
            }
        }

        result
    }

    /// In-order walk of the subtree rooted at `start`, collecting stored keys.
    fn collect_sorted(&self, start: Option<NodeId>, limit: Limit, out: &mut Vec<String>) {
        let mut stack: Vec<SortStep> = start.map(SortStep::Visit).into_iter().collect();
        while let Some(step) = stack.pop() {
            if limit.is_reached(out.len()) {
                break;
            }
            match step {
                SortStep::Emit(id) => out.push(self.key_of(id)),
                SortStep::Visit(id) => {
                    let node = &self.nodes[id];
                    if let Some(hi) = node.kid(Kid::Hi) {
                        stack.push(SortStep::Visit(hi));
                    }
                    if let Some(eq) = node.kid(Kid::Eq) {
                        stack.push(SortStep::Visit(eq));
                    }
                    if node.data.is_some() {
                        stack.push(SortStep::Emit(id));
                    }
                    if let Some(lo) = node.kid(Kid::Lo) {
                        stack.push(SortStep::Visit(lo));
                    }
                }
            }
        }
    }

    /// Rebuilds the key ending at `id` by climbing to the root and keeping
    /// the discriminator of every ancestor reached through its eq slot.
    pub(super) fn key_of(&self, id: NodeId) -> String {
        let mut reversed = vec![self.nodes[id].split];
        let mut child = id;
        let mut current = self.nodes[id].parent;
        while let Some(parent_id) = current {
            let parent = &self.nodes[parent_id];
            if parent.kid(Kid::Eq) == Some(child) {
                reversed.push(parent.split);
            }
            child = parent_id;
            current = parent.parent;
        }
        reversed.into_iter().rev().collect()
    }
}
