//! Key-value entries stored on terminal nodes and returned by searches.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An immutable key together with its attached value.
///
/// # Examples
///
/// ```
/// use fuzzy_trie::Trie;
///
/// let mut trie = Trie::new();
/// trie.add("hello", 42);
///
/// let entry = trie.find("hello").unwrap();
/// assert_eq!(entry.key(), "hello");
/// assert_eq!(entry.value(), &42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyValue<V> {
    key: String,
    value: V,
}

impl<V> KeyValue<V> {
    pub(crate) fn new(key: String, value: V) -> Self {
        KeyValue { key, value }
    }

    /// Returns the full key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the attached value.
    pub fn value(&self) -> &V {
        &self.value
    }

    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Consumes the entry, returning the key and value.
    pub fn into_inner(self) -> (String, V) {
        (self.key, self.value)
    }
}

impl<V> From<KeyValue<V>> for (String, V) {
    fn from(entry: KeyValue<V>) -> Self {
        entry.into_inner()
    }
}
