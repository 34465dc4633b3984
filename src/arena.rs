//! Slot storage owning every node of a trie.

use std::ops::{Index, IndexMut};

use crate::node::{NodeId, TrieNode};

/// Owns all nodes of a trie, addressed by [`NodeId`].
///
/// Freed slots are recorded in `free` and handed out again by the next
/// allocation, so handles stay small and stable for the lifetime of a node.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<V> {
    slots: Vec<Option<TrieNode<V>>>,
    free: Vec<usize>,
}

impl<V> NodeArena<V> {
    pub fn with_capacity(capacity: usize) -> Self {
        NodeArena {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Stores `node` and returns its handle, reusing a vacated slot if any.
    pub fn alloc(&mut self, node: TrieNode<V>) -> NodeId {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                NodeId(idx)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Removes the node behind `id` and returns it.
    pub fn free(&mut self, id: NodeId) -> Option<TrieNode<V>> {
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        Some(node)
    }

    pub fn get(&self, id: NodeId) -> Option<&TrieNode<V>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut TrieNode<V>> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

// Handles are only ever produced by this arena and freed nodes are unlinked
// from their parent first, so indexing a stale handle is a bug.
impl<V> Index<NodeId> for NodeArena<V> {
    type Output = TrieNode<V>;

    fn index(&self, id: NodeId) -> &Self::Output {
        match self.get(id) {
            Some(node) => node,
            None => panic!("dangling node handle {:?}", id),
        }
    }
}

impl<V> IndexMut<NodeId> for NodeArena<V> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("dangling node handle {:?}", id),
        }
    }
}
