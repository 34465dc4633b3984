//! Prefix and fuzzy search over a trie.
//!
//! Both searches walk the node tree depth-first with an explicit stack, so
//! long keys never translate into deep recursion. Results come out in no
//! particular order.

use crate::arena::NodeArena;
use crate::key_value::KeyValue;
use crate::node::NodeId;
use crate::util::find_node;
use crate::Trie;

/// An iterator over the entries stored below a key prefix.
///
/// Created by [`Trie::prefix_iter`] and [`Trie::iter`].
pub struct PrefixIter<'a, V> {
    nodes: &'a NodeArena<V>,

    /// Nodes still to visit
    stack: Vec<NodeId>,
}

impl<'a, V> Iterator for PrefixIter<'a, V> {
    type Item = &'a KeyValue<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        while let Some(id) = self.stack.pop() {
            let node = &nodes[id];
            self.stack.extend(node.children.values().copied());

            if let Some(entry) = &node.data {
                return Some(entry);
            }
        }
        None
    }
}

/// An iterator over the entries whose keys contain a pattern as a
/// subsequence.
///
/// Created by [`Trie::fuzzy_iter`].
pub struct FuzzyIter<'a, V> {
    nodes: &'a NodeArena<V>,
    pattern: Vec<char>,

    /// Nodes still to visit, each with the number of pattern code points
    /// matched on the path leading to it
    stack: Vec<(NodeId, usize)>,
}

impl<'a, V> Iterator for FuzzyIter<'a, V> {
    type Item = &'a KeyValue<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        while let Some((id, matched)) = self.stack.pop() {
            let node = &nodes[id];

            for (&code_point, &child) in &node.children {
                let advance = self.pattern.get(matched) == Some(&code_point);
                self.stack.push((child, matched + advance as usize));
            }

            if matched == self.pattern.len() {
                if let Some(entry) = &node.data {
                    return Some(entry);
                }
            }
        }
        None
    }
}

impl<V> Trie<V> {
    /// Returns an iterator over every entry in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use fuzzy_trie::Trie;
    ///
    /// let trie: Trie<i32> = vec![("a", 1), ("b", 2)].into_iter().collect();
    ///
    /// let total: i32 = trie.iter().map(|entry| entry.value()).sum();
    /// assert_eq!(total, 3);
    /// ```
    pub fn iter(&self) -> PrefixIter<'_, V> {
        self.prefix_iter("")
    }

    /// Returns an iterator over the entries whose keys start with `prefix`.
    ///
    /// The prefix is matched literally, code point by code point. If no key
    /// passes through `prefix` the iterator is empty.
    pub fn prefix_iter(&self, prefix: &str) -> PrefixIter<'_, V> {
        PrefixIter {
            nodes: &self.nodes,
            stack: find_node(&self.nodes, self.root, prefix).into_iter().collect(),
        }
    }

    /// Returns every stored key that starts with `prefix`.
    ///
    /// The empty prefix matches every key.
    ///
    /// # Examples
    ///
    /// ```
    /// use fuzzy_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.add("hello", 1);
    /// trie.add("help", 2);
    /// trie.add("world", 3);
    ///
    /// let mut keys = trie.prefix_search("hel");
    /// keys.sort();
    /// assert_eq!(keys, vec!["hello", "help"]);
    ///
    /// assert!(trie.prefix_search("xyz").is_empty());
    /// assert_eq!(trie.prefix_search("").len(), 3);
    /// ```
    pub fn prefix_search(&self, prefix: &str) -> Vec<&str> {
        self.prefix_iter(prefix).map(KeyValue::key).collect()
    }

    /// Like [`prefix_search`](Trie::prefix_search), returning the stored
    /// entries instead of bare keys.
    pub fn prefix_search_with_elem(&self, prefix: &str) -> Vec<&KeyValue<V>> {
        self.prefix_iter(prefix).collect()
    }

    /// Returns an iterator over the entries whose keys contain the code
    /// points of `pattern` in order, not necessarily adjacent.
    pub fn fuzzy_iter(&self, pattern: &str) -> FuzzyIter<'_, V> {
        FuzzyIter {
            nodes: &self.nodes,
            pattern: pattern.chars().collect(),
            stack: vec![(self.root, 0)],
        }
    }

    /// Returns every stored key that contains `pattern` as a subsequence.
    ///
    /// The empty pattern matches every key.
    ///
    /// # Examples
    ///
    /// ```
    /// use fuzzy_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.add("foobar", ());
    /// trie.add("barfoo", ());
    /// trie.add("baz", ());
    ///
    /// let mut keys = trie.fuzzy_search("br");
    /// keys.sort();
    /// assert_eq!(keys, vec!["barfoo", "foobar"]);
    /// ```
    pub fn fuzzy_search(&self, pattern: &str) -> Vec<&str> {
        self.fuzzy_iter(pattern).map(KeyValue::key).collect()
    }

    /// Like [`fuzzy_search`](Trie::fuzzy_search), returning the stored
    /// entries instead of bare keys.
    pub fn fuzzy_search_with_elem(&self, pattern: &str) -> Vec<&KeyValue<V>> {
        self.fuzzy_iter(pattern).collect()
    }
}

impl<'a, V> IntoIterator for &'a Trie<V> {
    type Item = &'a KeyValue<V>;
    type IntoIter = PrefixIter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
