//! Test modules for the path trie.
//!
//! * Configuration loading and validation
//! * Error conversion and display
//! * Property-based tests of both trie flavors against a reference model
//! * Shared proptest strategies

pub mod test_utils;
