// Copyright (c) 2025 Path Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation shared by both trie flavors.
//!
//! A node owns a map from token to child plus a value slot. The map sits behind
//! its own reader/writer lock, and every descent below takes that lock for exactly
//! one map access, clones the child handle out and releases the guard before it
//! moves on. No operation ever holds two node locks at once.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use fnv::FnvBuildHasher;
use parking_lot::RwLock;

use crate::error::{PathTrieError, PathTrieResult};

/// Child map of a node. The map entry is the only long-lived handle to a child.
type Children<K, V> = HashMap<K, Arc<Node<K, V>>, FnvBuildHasher>;

/// A single vertex of the trie.
#[derive(Debug)]
pub(crate) struct Node<K, V> {
    /// Guards the child map only, never the value slot.
    children: RwLock<Children<K, V>>,

    /// `V::default()` until a put lands here. Intermediate nodes keep the default.
    value: RwLock<V>,
}

impl<K, V> Node<K, V>
where
    K: Hash + Eq,
    V: Default,
{
    /// Creates an empty node holding the default value.
    pub(crate) fn new() -> Self {
        Self {
            children: RwLock::new(HashMap::default()),
            value: RwLock::new(V::default()),
        }
    }
}

impl<K, V> Node<K, V>
where
    K: Hash + Eq,
{
    /// Looks up the child for `token` under the read lock.
    pub(crate) fn child<Q>(&self, token: &Q) -> Option<Arc<Self>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.children.read().get(token).cloned()
    }

    /// Removes the child for `token`, detaching its whole subtree.
    pub(crate) fn remove_child<Q>(&self, token: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.children.write().remove(token).is_some()
    }

    pub(crate) fn child_count(&self) -> usize {
        self.children.read().len()
    }

    pub(crate) fn set_value(&self, value: V) {
        *self.value.write() = value;
    }
}

impl<K, V> Node<K, V>
where
    K: Hash + Eq,
    V: Default,
{
    /// Returns the child for `token`, creating it under the write lock if absent.
    ///
    /// The token is only converted to an owned key when a new child is inserted.
    pub(crate) fn child_or_insert<Q>(&self, token: &Q) -> Arc<Self>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        let mut children = self.children.write();
        if let Some(child) = children.get(token) {
            return Arc::clone(child);
        }
        let child = Arc::new(Self::new());
        children.insert(token.to_owned(), Arc::clone(&child));
        child
    }

    /// Walks `path` from this node, creating missing children, and stores `value`
    /// on the node the path ends at. An empty path stores on this node.
    pub(crate) fn put_path<'q, Q, I>(self: &Arc<Self>, path: I, value: V)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized + 'q,
        I: IntoIterator<Item = &'q Q>,
    {
        let mut node = Arc::clone(self);
        let mut depth = 0usize;
        for token in path {
            node = node.child_or_insert(token);
            depth += 1;
        }
        tracing::trace!(depth, "storing value");
        node.set_value(value);
    }

    /// Walks `path` from this node without creating anything and returns a copy of
    /// the value slot of the node it ends at.
    ///
    /// `None` means some token on the way had no child. A node that exists only
    /// because a longer key passes through it yields `Some(V::default())`.
    pub(crate) fn get_path<'q, Q, I>(self: &Arc<Self>, path: I) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'q,
        I: IntoIterator<Item = &'q Q>,
        V: Clone,
    {
        let mut node = Arc::clone(self);
        for token in path {
            node = node.child(token)?;
        }
        let value = node.value.read().clone();
        Some(value)
    }

    /// Descends to the parent of the node addressed by `path` and detaches that
    /// node from it.
    ///
    /// Returns `Ok(false)` when some prefix of `path` is missing. Ancestors left
    /// without children are not pruned.
    ///
    /// # Errors
    ///
    /// [`PathTrieError::EmptyPath`] if `path` yields no token, since the empty
    /// path addresses this node itself.
    pub(crate) fn delete_path<'q, Q, I>(self: &Arc<Self>, path: I) -> PathTrieResult<bool>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'q,
        I: IntoIterator<Item = &'q Q>,
    {
        let mut tokens = path.into_iter();
        let Some(mut token) = tokens.next() else {
            return Err(PathTrieError::EmptyPath);
        };

        let mut node = Arc::clone(self);
        for next in tokens {
            match node.child(token) {
                Some(child) => node = child,
                None => {
                    tracing::debug!("delete target has a missing ancestor, nothing to remove");
                    return Ok(false);
                }
            }
            token = next;
        }

        let removed = node.remove_child(token);
        tracing::trace!(removed, "detached subtree");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> Arc<Node<String, u32>> {
        Arc::new(Node::new())
    }

    #[test]
    fn test_child_or_insert_reuses_existing_child() {
        let node = root();
        let first = node.child_or_insert("a");
        let second = node.child_or_insert("a");

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(node.child_count(), 1);
    }

    #[test]
    fn test_remove_child_reports_presence() {
        let node = root();
        node.child_or_insert("a");

        assert!(node.remove_child("a"));
        assert!(!node.remove_child("a"));
        assert!(node.child("a").is_none());
    }

    #[test]
    fn test_put_path_empty_sets_own_value() {
        let node = root();
        node.put_path(std::iter::empty::<&str>(), 7);

        assert_eq!(node.get_path(std::iter::empty::<&str>()), Some(7));
        assert_eq!(node.child_count(), 0);
    }

    #[test]
    fn test_put_and_get_path() {
        let node = root();
        node.put_path(["x", "y"], 3);

        assert_eq!(node.get_path(["x", "y"]), Some(3));
        assert_eq!(node.get_path(["x"]), Some(0));
        assert_eq!(node.get_path(["x", "z"]), None);
    }

    #[test]
    fn test_delete_path_empty_is_rejected() {
        let node = root();
        node.put_path(["x"], 1);

        let result = node.delete_path(std::iter::empty::<&str>());
        assert!(matches!(result, Err(PathTrieError::EmptyPath)));
        assert_eq!(node.get_path(["x"]), Some(1));
    }

    #[test]
    fn test_delete_path_missing_prefix_is_noop() {
        let node = root();
        node.put_path(["x", "y"], 1);

        assert!(!node.delete_path(["q", "y"]).unwrap());
        assert_eq!(node.get_path(["x", "y"]), Some(1));
    }

    #[test]
    fn test_detached_handle_outlives_delete() {
        let node = root();
        node.put_path(["x"], 1);
        let held = node.child("x").unwrap();

        assert!(node.delete_path(["x"]).unwrap());
        held.set_value(9);

        assert_eq!(node.get_path(["x"]), None);
        assert_eq!(*held.value.read(), 9);
    }
}
