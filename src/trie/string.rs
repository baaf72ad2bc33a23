// Copyright (c) 2025 Path Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Delimited-string trie.
//!
//! Keys are split lazily, one segment per descent step, at the first occurrence of
//! the delimiter in whatever remains of the key. A delimiter at the very end
//! produces a final empty segment, so `"foo/"` and `"foo"` are different keys.

use std::iter::FusedIterator;
use std::sync::Arc;

use super::node::Node;
use crate::config::TrieConfig;
use crate::error::{PathTrieError, PathTrieResult};

/// Delimiter used by [`StringTrie::default`].
pub const DEFAULT_DELIMITER: &str = "/";

/// Iterator over the segments of a key, produced one split at a time.
///
/// The empty key yields nothing. Every other key yields one more segment than it
/// has delimiters.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: Option<&'a str>,
    delimiter: &'a str,
}

impl<'a> Segments<'a> {
    pub(crate) fn new(path: &'a str, delimiter: &'a str) -> Self {
        Self {
            rest: (!path.is_empty()).then_some(path),
            delimiter,
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        match rest.split_once(self.delimiter) {
            Some((head, tail)) => {
                self.rest = Some(tail);
                Some(head)
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}

impl FusedIterator for Segments<'_> {}

/// A trie based on string paths split at a delimiter fixed at construction.
///
/// Safe for concurrent reads and writes, although concurrent operations are not
/// executed in any deterministic order. A path written and deleted at the same
/// time may lose the write.
///
/// # Example
///
/// ```
/// use path_trie::StringTrie;
///
/// let trie = StringTrie::<String>::new("/");
/// trie.put("foo/bar", "baz".to_string());
///
/// assert_eq!(trie.get("foo/bar").as_deref(), Some("baz"));
/// assert_eq!(trie.get("foo").as_deref(), Some(""));
///
/// assert!(trie.delete("foo/bar"));
/// assert_eq!(trie.get("foo/bar"), None);
/// ```
#[derive(Debug)]
pub struct StringTrie<V> {
    root: Arc<Node<String, V>>,
    delimiter: String,
}

impl<V> StringTrie<V>
where
    V: Default + Clone,
{
    /// Creates an empty trie splitting keys at `delimiter`.
    ///
    /// # Panics
    ///
    /// Panics if `delimiter` is empty. See [`StringTrie::try_new`].
    pub fn new(delimiter: impl Into<String>) -> Self {
        match Self::try_new(delimiter) {
            Ok(trie) => trie,
            Err(e) => panic!("path_trie: {e}"),
        }
    }

    /// Creates an empty trie splitting keys at `delimiter`.
    ///
    /// # Errors
    ///
    /// [`PathTrieError::EmptyDelimiter`] if `delimiter` is empty, since an empty
    /// delimiter never consumes any part of a key.
    pub fn try_new(delimiter: impl Into<String>) -> PathTrieResult<Self> {
        let delimiter = delimiter.into();
        if delimiter.is_empty() {
            return Err(PathTrieError::EmptyDelimiter);
        }
        tracing::debug!(delimiter = %delimiter, "created string trie");
        Ok(Self {
            root: Arc::new(Node::new()),
            delimiter,
        })
    }

    /// Creates an empty trie from a trie configuration.
    ///
    /// # Errors
    ///
    /// [`PathTrieError::EmptyDelimiter`] if the configured delimiter is empty.
    pub fn with_config(config: &TrieConfig) -> PathTrieResult<Self> {
        Self::try_new(config.delimiter())
    }

    /// Delimiter that was specified on creation of the trie.
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Splits `path` into the segments this trie would descend through.
    pub fn segments<'a>(&'a self, path: &'a str) -> Segments<'a> {
        Segments::new(path, &self.delimiter)
    }

    /// Stores `value` at `path`, overwriting any previous value. The empty key
    /// stores on the root.
    pub fn put(&self, path: &str, value: V) {
        self.root.put_path(self.segments(path), value);
    }

    /// Returns the value at `path` if a node exists there.
    ///
    /// `Some` only says the node exists. If it was created as part of a longer
    /// path the value is `V::default()`.
    pub fn get(&self, path: &str) -> Option<V> {
        self.root.get_path(self.segments(path))
    }

    /// Removes the node at `path` together with all of its descendants.
    ///
    /// Returns `false` if there was no such node. Ancestors are never pruned.
    ///
    /// # Panics
    ///
    /// Panics if `path` is empty, since the empty key addresses the root. Use
    /// [`StringTrie::try_delete`] to get an error instead.
    pub fn delete(&self, path: &str) -> bool {
        match self.try_delete(path) {
            Ok(removed) => removed,
            Err(_) => panic!("path_trie: cannot delete the root node"),
        }
    }

    /// Like [`StringTrie::delete`] but reports an empty key as an error.
    ///
    /// # Errors
    ///
    /// [`PathTrieError::EmptyPath`] if `path` is empty.
    pub fn try_delete(&self, path: &str) -> PathTrieResult<bool> {
        self.root.delete_path(self.segments(path))
    }

    /// Returns `true` if the root has no children.
    pub fn is_empty(&self) -> bool {
        self.root.child_count() == 0
    }
}

impl<V> Default for StringTrie<V>
where
    V: Default + Clone,
{
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}
