// Copyright (c) 2025 Path Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Path Trie Library
//!
//! A concurrent trie keyed by paths: sequences of tokens given either as explicit
//! slices ([`SliceTrie`]) or as strings split at a delimiter ([`StringTrie`]).
//! Every prefix of a stored key is a node of its own. Both flavors support put,
//! point lookup and subtree deletion from many threads at once without an external
//! lock.
//!
//! # Example
//!
//! ```
//! use path_trie::StringTrie;
//!
//! let trie = StringTrie::<u32>::new("/");
//! trie.put("a/b/c", 1);
//!
//! assert_eq!(trie.get("a/b/c"), Some(1));
//! trie.delete("a/b");
//! assert_eq!(trie.get("a/b/c"), None);
//! // "a" was only ever an intermediate node and is not pruned.
//! assert_eq!(trie.get("a"), Some(0));
//! ```

pub mod config;
pub mod error;
pub mod script;
pub mod trie;

#[cfg(test)]
pub(crate) mod tests;

pub use self::config::{ConfigLoader, PathTrieConfig, TrieConfig};
pub use self::error::{PathTrieError, PathTrieResult};
pub use self::trie::{Segments, SliceTrie, StringTrie};

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
