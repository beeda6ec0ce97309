//! Pruning of nodes left behind by [`LanaiTrie::remove`].
//!
//! A node whose payload was cleared is kept only while it still has an
//! eq-child. Otherwise it is unlinked: a single lo or hi subtree takes its
//! place directly, and when both exist one is grafted onto the far edge of
//! the other before the survivor takes its place.

use std::cmp::Ordering;

use super::fold::char_distance;
use super::node::{Kid, NodeId};
use super::LanaiTrie;

impl<V> LanaiTrie<V> {
    /// Prunes `start` and then every ancestor that becomes prunable.
    pub(super) fn prune_from(&mut self, start: NodeId) {
        let mut next = Some(start);
        while let Some(id) = next {
            next = self.prune_node(id);
        }
    }

    /// Unlinks `id` if it is prunable and returns the parent to examine next.
    fn prune_node(&mut self, id: NodeId) -> Option<NodeId> {
        let node = &self.nodes[id];
        if !node.is_prunable() {
            return None;
        }

        let parent = node.parent;
        let replacement = match (node.kid(Kid::Lo), node.kid(Kid::Hi)) {
            (None, None) => None,
            (Some(only), None) | (None, Some(only)) => Some(only),
            (Some(lo), Some(hi)) => Some(self.merge_siblings(id, lo, hi)),
        };

        self.replace_link(parent, id, replacement);
        self.nodes.release(id);
        if parent.is_none() && replacement.is_none() {
            tracing::trace!("last node pruned, trie is empty");
        }
        parent
    }

    /// Points whatever referenced `old` (a parent slot or the root) at `new`.
    fn replace_link(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            Some(parent_id) => {
                let parent_node = &mut self.nodes[parent_id];
                if let Some(slot) = parent_node.slot_of(old) {
                    parent_node.set_kid(slot, new);
                }
            }
            None => self.root = new,
        }

        if let Some(new_id) = new {
            self.nodes[new_id].parent = parent;
        }
    }

    /// Joins the lo and hi subtrees of the node being removed.
    ///
    /// The subtree whose discriminator lies farther from the removed node's
    /// is grafted onto the outermost free slot on the same side of the other
    /// subtree. Equal distances are settled by the tie breaker. Returns the
    /// root of the joined subtree.
    fn merge_siblings(&mut self, id: NodeId, lo: NodeId, hi: NodeId) -> NodeId {
        let split = self.nodes[id].split;
        let delta_hi = char_distance(split, self.nodes[hi].split);
        let delta_lo = char_distance(self.nodes[lo].split, split);

        let graft_high = match delta_hi.cmp(&delta_lo) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => self.tie_breaker.prefer_high(),
        };

        let (moving, side, survivor) = if graft_high {
            (hi, Kid::Hi, lo)
        } else {
            (lo, Kid::Lo, hi)
        };

        let mut target = survivor;
        while let Some(next) = self.nodes[target].kid(side) {
            target = next;
        }
        self.nodes[target].set_kid(side, Some(moving));
        self.nodes[moving].parent = Some(target);

        let removed = &mut self.nodes[id];
        removed.set_kid(Kid::Lo, None);
        removed.set_kid(Kid::Hi, None);

        tracing::trace!(
            removed = %split,
            delta_lo,
            delta_hi,
            graft_high,
            "merged sibling subtrees"
        );
        survivor
    }
}
