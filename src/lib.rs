//! # Fuzzy Trie
//!
//! An in-memory prefix tree mapping string keys to arbitrary values.
//!
//! Every edge of the tree is labeled by one Unicode code point, so a key is
//! treated as a plain sequence of `char`s. Besides exact lookup the trie
//! answers two kinds of queries:
//!
//! - **Prefix search**: every stored key that starts with a literal prefix
//! - **Fuzzy search**: every stored key that contains the query's code points
//!   as a subsequence, in order but not necessarily contiguous
//!
//! Search results are unordered and unscored.
//!
//! ## Example
//!
//! ```rust
//! use fuzzy_trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.add("foobar", 1);
//! trie.add("barfoo", 2);
//!
//! assert_eq!(trie.get("foobar"), Some(&1));
//! assert_eq!(trie.prefix_search("foo"), vec!["foobar"]);
//!
//! let mut hits = trie.fuzzy_search("fb");
//! hits.sort();
//! assert_eq!(hits, vec!["foobar"]);
//! ```

mod arena;
mod key_value;
mod node;
mod search;
mod trie;
mod util;

// Re-export public types
pub use crate::key_value::KeyValue;
pub use crate::search::{FuzzyIter, PrefixIter};
pub use crate::trie::Trie;

/// Errors returned by the fallible variants of trie operations.
///
/// The core operations (`add`, `find`, `remove` and the searches) are total
/// and never fail; only `try_add` and `try_remove` report these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The empty string cannot be stored as a key
    #[error("empty key cannot be stored in the trie")]
    EmptyKey,
    /// The key is not present in the trie
    #[error("key not found: {0:?}")]
    KeyNotFound(String),
}

/// Result type for fallible trie operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::EmptyKey.to_string(),
            "empty key cannot be stored in the trie"
        );
        assert_eq!(
            Error::KeyNotFound("foo".to_string()).to_string(),
            "key not found: \"foo\""
        );
    }
}
