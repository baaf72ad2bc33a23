// Copyright (c) 2025 Path Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for string tries.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use crate::trie::DEFAULT_DELIMITER;
use serde::{Deserialize, Serialize};

/// Configuration for a [`StringTrie`](crate::StringTrie).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrieConfig {
    /// Delimiter keys are split at. Must not be empty.
    delimiter: String,
}

impl TrieConfig {
    /// Create a new default configuration using `/` as the delimiter.
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    /// Set the delimiter keys are split at.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Get the configured delimiter
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for TrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.delimiter.is_empty() {
            return Err(ConfigError::ValidationError(
                "trie.delimiter must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
