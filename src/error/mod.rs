// Copyright (c) 2025 Path Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error module for the path trie.
//!
//! Lookups never fail: a missing key is an ordinary `None`. The errors here cover
//! the recoverable forms of programmer mistakes (deleting the root, constructing a
//! trie that could never split a key) plus the failures of the configuration
//! loader and the script driver.

use thiserror::Error;

pub mod config;

pub use self::config::ConfigError;

/// Result type alias used throughout the crate.
pub type PathTrieResult<T> = Result<T, PathTrieError>;

/// Core error enum for the path trie.
#[derive(Error, Debug)]
pub enum PathTrieError {
    /// A delete was asked to remove the node addressed by the empty key, i.e. the root.
    #[error("cannot delete the root node: path is empty")]
    EmptyPath,

    /// A string trie was configured with an empty delimiter.
    #[error("delimiter must not be empty")]
    EmptyDelimiter,

    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors from reading scripts or writing generated configuration.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors when emitting script outcomes.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A script line could not be parsed.
    #[error("script line {line}: {message}")]
    Script {
        /// One-based line number in the script.
        line: usize,
        /// What was wrong with it.
        message: String,
    },
}
