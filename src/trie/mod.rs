// Copyright (c) 2025 Path Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Path-keyed trie implementations.
//!
//! Two flavors share one node type:
//!
//! * [`SliceTrie`] takes keys as explicit token slices.
//! * [`StringTrie`] takes string keys and splits them at a delimiter while
//!   descending.
//!
//! # Concurrency
//!
//! * **Per-node locking**: every node guards its child map with its own
//!   `parking_lot::RwLock`. An operation holds one such lock at a time, for a single
//!   map lookup, insert or removal, and releases it before stepping into the child.
//!
//! * **Unordered values**: the value slot of a node is not covered by the child-map
//!   lock. Two writers to the same key, or a put racing a delete of the same key,
//!   finish in no particular order and the loser is not reported.
//!
//! # Limitations
//!
//! There is no flag telling an assigned value apart from the default held by a node
//! that only exists on the way to a longer key. Because of that, deleting a key
//! never prunes ancestors that are left without children: they cannot be told
//! apart from ancestors holding a real value.

mod node;
mod slice;
mod string;

pub use slice::SliceTrie;
pub use string::{Segments, StringTrie, DEFAULT_DELIMITER};
