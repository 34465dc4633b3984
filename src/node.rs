//! Internal node type of the trie.
//!
//! Nodes live in a [`NodeArena`](crate::arena::NodeArena) and refer to each
//! other through [`NodeId`] handles, so the parent back-link used for pruning
//! never creates an ownership cycle.

use std::collections::HashMap;

use crate::key_value::KeyValue;

/// Stable handle of a node inside the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

/// A single node of the trie.
///
/// Each node represents the code point on the edge from its parent. A node
/// is terminal exactly when `data` is set; structural nodes only connect
/// deeper terminal nodes and never carry a path or value.
#[derive(Debug, Clone)]
pub(crate) struct TrieNode<V> {
    /// The code point labeling the edge from the parent
    pub code_point: char,

    /// The stored key and value, present only on terminal nodes
    pub data: Option<KeyValue<V>>,

    /// Non-owning link to the parent, `None` only for the root
    pub parent: Option<NodeId>,

    /// Child nodes indexed by their code point
    pub children: HashMap<char, NodeId>,
}

impl<V> TrieNode<V> {
    /// Code point carried by the root node. It never takes part in a match.
    pub const ROOT_CODE_POINT: char = '\0';

    /// Creates the root node.
    pub fn root() -> Self {
        TrieNode {
            code_point: Self::ROOT_CODE_POINT,
            data: None,
            parent: None,
            children: HashMap::new(),
        }
    }

    /// Creates a structural child node hanging off `parent`.
    pub fn new(code_point: char, parent: NodeId) -> Self {
        TrieNode {
            code_point,
            data: None,
            parent: Some(parent),
            children: HashMap::new(),
        }
    }

    /// Returns whether this node stores a key.
    pub fn is_terminal(&self) -> bool {
        self.data.is_some()
    }

    /// Returns whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the child reached through `code_point`, if any.
    pub fn child(&self, code_point: char) -> Option<NodeId> {
        self.children.get(&code_point).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_node() {
        let node: TrieNode<u32> = TrieNode::root();

        assert_eq!(node.code_point, '\0');
        assert!(node.parent.is_none());
        assert!(!node.is_terminal());
        assert!(node.is_leaf());
    }

    #[test]
    fn test_child_lookup() {
        let mut node: TrieNode<u32> = TrieNode::new('a', NodeId(0));
        assert_eq!(node.parent, Some(NodeId(0)));
        assert_eq!(node.child('b'), None);

        node.children.insert('b', NodeId(7));
        assert_eq!(node.child('b'), Some(NodeId(7)));
        assert!(!node.is_leaf());
    }

    #[test]
    fn test_terminal_follows_data() {
        let mut node: TrieNode<u32> = TrieNode::new('a', NodeId(0));
        node.data = Some(KeyValue::new("a".to_string(), 1));
        assert!(node.is_terminal());

        node.data = None;
        assert!(!node.is_terminal());
    }
}
