// Copyright (c) 2025 Lanai Suggest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node storage for the Lanai Trie.
//!
//! Nodes live in an index-addressed arena. Child and parent links are plain
//! [`NodeId`] values, so the upward parent link used by pruning never owns
//! anything and no ownership cycle can form.

use std::ops::{Index, IndexMut};

/// Index of a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// One of the three downward links of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kid {
    Lo = 0,
    Eq = 1,
    Hi = 2,
}

/// A branch node of the ternary search trie.
///
/// Holds one discriminator character and, when it terminates a stored key,
/// the payload for that key.
#[derive(Debug)]
pub(crate) struct TstNode<V> {
    /// Character this node branches on
    pub split: char,

    /// Payload of the key ending here (`None` for pure branch nodes)
    pub data: Option<V>,

    /// Back-reference used by pruning and key reconstruction
    pub parent: Option<NodeId>,

    /// Lo, eq and hi children, indexed by [`Kid`]
    kids: [Option<NodeId>; 3],
}

impl<V> TstNode<V> {
    /// Creates a node with no payload and no children.
    pub fn new(split: char, parent: Option<NodeId>) -> Self {
        Self {
            split,
            data: None,
            parent,
            kids: [None; 3],
        }
    }

    #[inline]
    pub fn kid(&self, which: Kid) -> Option<NodeId> {
        self.kids[which as usize]
    }

    #[inline]
    pub fn set_kid(&mut self, which: Kid, id: Option<NodeId>) {
        self.kids[which as usize] = id;
    }

    /// Returns which slot of this node holds `child`, if any.
    pub fn slot_of(&self, child: NodeId) -> Option<Kid> {
        [Kid::Lo, Kid::Eq, Kid::Hi]
            .into_iter()
            .find(|&which| self.kid(which) == Some(child))
    }

    /// A node may be pruned once it ends no key and continues no key.
    #[inline]
    pub fn is_prunable(&self) -> bool {
        self.data.is_none() && self.kid(Kid::Eq).is_none()
    }
}

/// Slot storage for trie nodes with reuse of released slots.
#[derive(Debug)]
pub(crate) struct NodeArena<V> {
    slots: Vec<Option<TstNode<V>>>,
    free: Vec<NodeId>,
}

impl<V> NodeArena<V> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Stores a fresh node and returns its id, reusing a released slot first.
    pub fn alloc(&mut self, split: char, parent: Option<NodeId>) -> NodeId {
        let node = TstNode::new(split, parent);
        if let Some(id) = self.free.pop() {
            self.slots[id.index()] = Some(node);
            return id;
        }
        let id = NodeId(self.slots.len() as u32);
        self.slots.push(Some(node));
        id
    }

    /// Releases a node's slot. Its children are not touched.
    pub fn release(&mut self, id: NodeId) -> Option<TstNode<V>> {
        let node = self.slots.get_mut(id.index())?.take();
        if node.is_some() {
            self.free.push(id);
        }
        node
    }

    /// Number of live nodes.
    pub fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl<V> Index<NodeId> for NodeArena<V> {
    type Output = TstNode<V>;

    fn index(&self, id: NodeId) -> &Self::Output {
        match self.slots.get(id.index()) {
            Some(Some(node)) => node,
            _ => panic!("node {} is not live", id.0),
        }
    }
}

impl<V> IndexMut<NodeId> for NodeArena<V> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        match self.slots.get_mut(id.index()) {
            Some(Some(node)) => node,
            _ => panic!("node {} is not live", id.0),
        }
    }
}
