//! Test utilities for the path trie.
//!
//! Strategies for generating keys in property-based tests.

use proptest::strategy::{BoxedStrategy, Strategy};

/// Maximum number of segments in a generated key.
pub const MAX_SEGMENTS: usize = 6;

/// Generate a strategy for a single key segment.
///
/// Segments never contain the `/` delimiter and may be empty.
pub fn segment_strategy() -> BoxedStrategy<String> {
    "[a-z0-9_]{0,4}".boxed()
}

/// Generate a strategy for a non-empty token path.
pub fn token_path_strategy() -> BoxedStrategy<Vec<u8>> {
    proptest::collection::vec(0u8..8, 1..MAX_SEGMENTS).boxed()
}

/// Generate a strategy for a non-empty `/`-delimited key.
pub fn string_key_strategy() -> BoxedStrategy<String> {
    proptest::collection::vec(segment_strategy(), 1..MAX_SEGMENTS)
        .prop_map(|segments| segments.join("/"))
        .prop_filter("Key addresses the root", |key| !key.is_empty())
        .boxed()
}
