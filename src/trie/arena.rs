//! Index arena holding the nodes of a [`Trie`](super::Trie).
//!
//! Nodes are appended and never removed, so a [`NodeId`] handed out once
//! stays valid for the lifetime of the arena. Children refer to each other
//! by id instead of by reference, which lets the trie grow through `&mut`
//! while finished nodes are shared freely through `&`.

use std::ops::{Index, IndexMut};

/// Handle to a node stored in a [`NodeArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The first node allocated in every arena.
    pub(crate) const ROOT: NodeId = NodeId(0);

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Append-only storage for trie nodes.
#[derive(Clone, Debug, Default)]
pub(crate) struct NodeArena<T> {
    nodes: Vec<T>,
}

impl<T> NodeArena<T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        NodeArena { nodes: Vec::new() }
    }

    /// Stores a value and returns its id.
    ///
    /// Panics if the arena already holds `u32::MAX` nodes.
    pub fn alloc(&mut self, value: T) -> NodeId {
        let id = u32::try_from(self.nodes.len()).expect("trie node count exceeds u32::MAX");
        self.nodes.push(value);
        NodeId(id)
    }

    /// Returns the number of values allocated in this arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<T> Index<NodeId> for NodeArena<T> {
    type Output = T;

    #[inline]
    fn index(&self, id: NodeId) -> &T {
        &self.nodes[id.index()]
    }
}

impl<T> IndexMut<NodeId> for NodeArena<T> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.nodes[id.index()]
    }
}
