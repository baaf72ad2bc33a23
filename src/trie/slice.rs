// Copyright (c) 2025 Path Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Token-sequence trie keyed by pre-split slices.

use std::hash::Hash;
use std::sync::Arc;

use super::node::Node;
use crate::error::PathTrieResult;

/// A trie whose keys are explicit sequences of tokens.
///
/// Safe for concurrent reads and writes from many threads without an external lock.
/// Operations on the same key are not ordered against each other: a put racing a
/// delete of the same path may be lost.
///
/// # Type Parameters
///
/// * `K` - Token type. One element of a key path.
/// * `V` - Stored value type. Nodes that were never assigned hold `V::default()`.
///
/// # Example
///
/// ```
/// use path_trie::SliceTrie;
///
/// let trie = SliceTrie::<u32, &str>::new();
/// trie.put(&[1, 2, 3], "baz");
///
/// assert_eq!(trie.get(&[1, 2, 3]), Some("baz"));
/// // Ancestors of a stored key exist, with the default value.
/// assert_eq!(trie.get(&[1, 2]), Some(""));
/// assert_eq!(trie.get(&[4]), None);
///
/// assert!(trie.delete(&[1, 2]));
/// assert_eq!(trie.get(&[1, 2, 3]), None);
/// ```
#[derive(Debug)]
pub struct SliceTrie<K, V> {
    root: Arc<Node<K, V>>,
}

impl<K, V> SliceTrie<K, V>
where
    K: Hash + Eq + Clone,
    V: Default + Clone,
{
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self {
            root: Arc::new(Node::new()),
        }
    }

    /// Stores `value` at `path`, creating every missing node along the way and
    /// overwriting any previous value. The empty path stores on the root.
    pub fn put(&self, path: &[K], value: V) {
        self.root.put_path(path, value);
    }

    /// Returns the value at `path` if a node exists there.
    ///
    /// `Some` only says the node exists. A node created as part of a longer path
    /// holds `V::default()`, which is returned as if it had been stored.
    pub fn get(&self, path: &[K]) -> Option<V> {
        self.root.get_path(path)
    }

    /// Removes the node at `path` together with all of its descendants.
    ///
    /// Returns `false` if there was no such node, in which case the trie is left
    /// untouched. Ancestors are never pruned, even when left without children.
    ///
    /// # Panics
    ///
    /// Panics if `path` is empty: the empty path addresses the root, which cannot
    /// be deleted. Use [`SliceTrie::try_delete`] to get an error instead.
    pub fn delete(&self, path: &[K]) -> bool {
        match self.try_delete(path) {
            Ok(removed) => removed,
            Err(_) => panic!("path_trie: cannot delete the root node"),
        }
    }

    /// Like [`SliceTrie::delete`] but reports an empty path as an error.
    ///
    /// # Errors
    ///
    /// [`PathTrieError::EmptyPath`](crate::PathTrieError::EmptyPath) if `path` is empty.
    pub fn try_delete(&self, path: &[K]) -> PathTrieResult<bool> {
        self.root.delete_path(path)
    }

    /// Returns `true` if the root has no children.
    pub fn is_empty(&self) -> bool {
        self.root.child_count() == 0
    }
}

impl<K, V> Default for SliceTrie<K, V>
where
    K: Hash + Eq + Clone,
    V: Default + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
