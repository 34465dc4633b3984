//! The main trie implementation.
//!
//! This module contains the `Trie` type, which owns the node tree and
//! provides insertion, lookup and removal. The search operations live in
//! the `search` module.

use std::fmt;
use std::iter::FromIterator;

use log::{debug, trace};

use crate::arena::NodeArena;
use crate::key_value::KeyValue;
use crate::node::{NodeId, TrieNode};
use crate::util::find_node;
use crate::{Error, Result};

/// A prefix tree mapping string keys to values of type `V`.
///
/// Each edge is labeled by one code point of a key. Nodes are created on
/// demand while adding keys and shared between keys with a common prefix.
/// Removing a key un-terminates its node and detaches it only when it has no
/// children and its parent still has other children; ancestors are never
/// revisited, so some structural nodes may outlive the keys that created
/// them. Such leftover nodes are invisible to every lookup and search.
#[derive(Clone)]
pub struct Trie<V> {
    /// Storage for every node, the root included
    pub(crate) nodes: NodeArena<V>,

    /// The root node, never terminal and never freed
    pub(crate) root: NodeId,

    /// The number of keys stored in the trie
    size: usize,
}

impl<V> Trie<V> {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use fuzzy_trie::Trie;
    ///
    /// let trie = Trie::<i32>::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Creates an empty trie with room for at least `nodes` nodes before
    /// reallocating. The root counts as one node.
    pub fn with_capacity(nodes: usize) -> Self {
        let mut arena = NodeArena::with_capacity(nodes.max(1));
        let root = arena.alloc(TrieNode::root());
        Trie {
            nodes: arena,
            root,
            size: 0,
        }
    }

    /// Returns the number of keys stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use fuzzy_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert_eq!(trie.size(), 0);
    ///
    /// trie.add("hello", 42);
    /// assert_eq!(trie.size(), 1);
    /// ```
    pub fn size(&self) -> usize {
        self.size
    }

    /// Same as [`size`](Trie::size).
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie contains no keys.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of nodes currently allocated, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Removes every key and node, keeping a fresh root.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = self.nodes.alloc(TrieNode::root());
        self.size = 0;
    }

    /// Inserts `key` with the attached `value`.
    ///
    /// Nodes along the key's code points are reused or created as needed.
    /// If the key is already present its value is replaced and the previous
    /// value is returned; the size only grows for new keys.
    ///
    /// The empty key cannot be stored: adding it leaves the trie untouched
    /// and returns `None`. Use [`try_add`](Trie::try_add) to have that
    /// reported as an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use fuzzy_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert_eq!(trie.add("hello", 1), None);
    /// assert_eq!(trie.add("hello", 2), Some(1));
    /// assert_eq!(trie.size(), 1);
    ///
    /// assert_eq!(trie.add("", 3), None);
    /// assert_eq!(trie.size(), 1);
    /// ```
    pub fn add(&mut self, key: &str, value: V) -> Option<V> {
        if key.is_empty() {
            debug!("ignoring insert of the empty key");
            return None;
        }

        let mut current = self.root;
        for code_point in key.chars() {
            current = match self.nodes[current].child(code_point) {
                Some(child) => child,
                None => self.new_child(current, code_point),
            };
        }

        let previous = self.nodes[current]
            .data
            .replace(KeyValue::new(key.to_owned(), value));
        if previous.is_none() {
            self.size += 1;
        }
        previous.map(|entry| entry.into_inner().1)
    }

    /// Like [`add`](Trie::add), but rejects the empty key with
    /// [`Error::EmptyKey`].
    pub fn try_add(&mut self, key: &str, value: V) -> Result<Option<V>> {
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }
        Ok(self.add(key, value))
    }

    /// Looks up `key`, returning its stored entry.
    ///
    /// A node that only exists as part of longer keys does not count as
    /// found.
    ///
    /// # Examples
    ///
    /// ```
    /// use fuzzy_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.add("foobar", ());
    ///
    /// assert!(trie.find("foobar").is_some());
    /// assert!(trie.find("foo").is_none());
    /// ```
    pub fn find(&self, key: &str) -> Option<&KeyValue<V>> {
        let id = find_node(&self.nodes, self.root, key)?;
        self.nodes[id].data.as_ref()
    }

    /// Returns a reference to the value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.find(key).map(KeyValue::value)
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let id = find_node(&self.nodes, self.root, key)?;
        self.nodes[id].data.as_mut().map(KeyValue::value_mut)
    }

    /// Returns `true` if `key` is stored in the trie.
    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Removes `key`, returning its value.
    ///
    /// Removing a key that is absent, or that only exists as a prefix of
    /// longer keys, does nothing and returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fuzzy_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.add("hello", 42);
    ///
    /// assert_eq!(trie.remove("hell"), None);
    /// assert_eq!(trie.remove("hello"), Some(42));
    /// assert!(trie.is_empty());
    /// ```
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let removed = find_node(&self.nodes, self.root, key)
            .and_then(|id| self.nodes[id].data.take().map(|entry| (id, entry)));

        let (id, entry) = match removed {
            Some(found) => found,
            None => {
                debug!("remove of absent key {:?} ignored", key);
                return None;
            }
        };

        self.size -= 1;
        self.prune(id);
        Some(entry.into_inner().1)
    }

    /// Like [`remove`](Trie::remove), but reports an absent key with
    /// [`Error::KeyNotFound`].
    pub fn try_remove(&mut self, key: &str) -> Result<V> {
        self.remove(key)
            .ok_or_else(|| Error::KeyNotFound(key.to_owned()))
    }

    fn new_child(&mut self, parent: NodeId, code_point: char) -> NodeId {
        let child = self.nodes.alloc(TrieNode::new(code_point, parent));
        self.nodes[parent].children.insert(code_point, child);
        trace!("created node {:?} for {:?} under {:?}", child, code_point, parent);
        child
    }

    // Detaches a freshly un-terminated node if it is a leaf with siblings.
    // A sole child is kept even when it becomes a dead leaf.
    fn prune(&mut self, id: NodeId) {
        let node = &self.nodes[id];
        let parent = match node.parent {
            Some(parent) => parent,
            None => return,
        };
        if !node.is_leaf() || self.nodes[parent].children.len() <= 1 {
            return;
        }

        let code_point = node.code_point;
        self.nodes[parent].children.remove(&code_point);
        self.nodes.free(id);
        trace!("pruned node {:?} ({:?}) from {:?}", id, code_point, parent);
    }
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for Trie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|entry| (entry.key(), entry.value())))
            .finish()
    }
}

impl<K: AsRef<str>, V> FromIterator<(K, V)> for Trie<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<K: AsRef<str>, V> Extend<(K, V)> for Trie<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key.as_ref(), value);
        }
    }
}
