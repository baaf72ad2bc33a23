// Copyright (c) 2025 Path Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Line-oriented command scripts driving a [`StringTrie`].
//!
//! Each non-blank line not starting with `#` is one command:
//!
//! ```text
//! put <key> <value...>
//! get [key]
//! delete [key]
//! ```
//!
//! Words are separated by any whitespace. A missing key is the empty key, i.e. the
//! root. Keys cannot contain whitespace, values run to the end of the line.

use std::io::{BufRead, Write};

use serde::Serialize;

use crate::config::{ConfigLoader, PathTrieConfig, TrieConfig};
use crate::error::{PathTrieError, PathTrieResult};
use crate::trie::StringTrie;

/// A single parsed script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Store `value` at `key`.
    Put {
        /// Key to store at.
        key: String,
        /// Value to store.
        value: String,
    },
    /// Look up `key`.
    Get {
        /// Key to look up.
        key: String,
    },
    /// Remove `key` and its subtree.
    Delete {
        /// Key to remove.
        key: String,
    },
}

impl Command {
    /// Parses one script line. Returns `Ok(None)` for blank and comment lines.
    ///
    /// # Errors
    ///
    /// [`PathTrieError::Script`] if the verb is unknown.
    pub fn parse(line_no: usize, line: &str) -> PathTrieResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim_start();
        let command = match verb {
            "put" => {
                let (key, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Self::Put {
                    key: key.to_string(),
                    value: value.trim_start().to_string(),
                }
            }
            "get" => Self::Get {
                key: rest.to_string(),
            },
            "delete" => Self::Delete {
                key: rest.to_string(),
            },
            other => {
                return Err(PathTrieError::Script {
                    line: line_no,
                    message: format!("unknown command '{other}'"),
                })
            }
        };
        Ok(Some(command))
    }
}

/// Result of executing one command, emitted as a JSON line by the binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Command verb.
    pub op: &'static str,
    /// Key the command addressed.
    pub key: String,
    /// For `get`: whether a node exists at the key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found: Option<bool>,
    /// For `get`: the value held by the node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// For `delete`: whether a subtree was detached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<bool>,
    /// Set if the command was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Outcome {
    fn new(op: &'static str, key: &str) -> Self {
        Self {
            op,
            key: key.to_string(),
            found: None,
            value: None,
            removed: None,
            error: None,
        }
    }
}

/// A string trie plus the bookkeeping for running scripts against it.
#[derive(Debug)]
pub struct Session {
    trie: StringTrie<String>,
    config: PathTrieConfig,
}

impl Session {
    /// Creates a session over an empty trie built from `config`, with default
    /// log settings.
    ///
    /// # Errors
    ///
    /// [`PathTrieError::EmptyDelimiter`] if the configured delimiter is empty.
    pub fn new(config: &TrieConfig) -> PathTrieResult<Self> {
        Self::from_config(PathTrieConfig {
            trie: config.clone(),
            ..PathTrieConfig::default()
        })
    }

    /// Loads the configuration through `loader` and creates a session from it.
    ///
    /// # Errors
    ///
    /// [`PathTrieError::Config`] if loading or validation fails.
    pub fn from_loader(loader: &ConfigLoader) -> PathTrieResult<Self> {
        Self::from_config(loader.load()?)
    }

    fn from_config(config: PathTrieConfig) -> PathTrieResult<Self> {
        Ok(Self {
            trie: StringTrie::with_config(&config.trie)?,
            config,
        })
    }

    /// Configuration the session was created from.
    pub fn config(&self) -> &PathTrieConfig {
        &self.config
    }

    /// The trie commands run against.
    pub fn trie(&self) -> &StringTrie<String> {
        &self.trie
    }

    /// Executes one command.
    ///
    /// Deleting the empty key is reported in the outcome instead of panicking.
    pub fn execute(&self, command: &Command) -> Outcome {
        match command {
            Command::Put { key, value } => {
                self.trie.put(key, value.clone());
                Outcome::new("put", key)
            }
            Command::Get { key } => {
                let value = self.trie.get(key);
                Outcome {
                    found: Some(value.is_some()),
                    value,
                    ..Outcome::new("get", key)
                }
            }
            Command::Delete { key } => match self.trie.try_delete(key) {
                Ok(removed) => Outcome {
                    removed: Some(removed),
                    ..Outcome::new("delete", key)
                },
                Err(e) => Outcome {
                    error: Some(e.to_string()),
                    ..Outcome::new("delete", key)
                },
            },
        }
    }

    /// Reads commands from `input`, executes them in order and writes one JSON
    /// outcome per line to `output`. Returns the number of commands executed.
    ///
    /// # Errors
    ///
    /// Fails on the first unparsable line, or on IO and serialization errors.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> PathTrieResult<usize> {
        let mut executed = 0;
        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let Some(command) = Command::parse(index + 1, &line)? else {
                continue;
            };
            let outcome = self.execute(&command);
            if let Some(error) = &outcome.error {
                tracing::warn!(line = index + 1, %error, "command rejected");
            }
            serde_json::to_writer(&mut output, &outcome)?;
            writeln!(output)?;
            executed += 1;
        }
        output.flush()?;
        tracing::info!(executed, "script finished");
        Ok(executed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("put a/b hello world", Command::Put { key: "a/b".into(), value: "hello world".into() } ; "put with spaced value")]
    #[test_case("put a", Command::Put { key: "a".into(), value: String::new() } ; "put without value")]
    #[test_case("get a/b", Command::Get { key: "a/b".into() } ; "get")]
    #[test_case("get", Command::Get { key: String::new() } ; "get root")]
    #[test_case("  delete a/  ", Command::Delete { key: "a/".into() } ; "delete trimmed")]
    #[test_case("put\ta\t1", Command::Put { key: "a".into(), value: "1".into() } ; "tab separated put")]
    #[test_case("get  \ta/b", Command::Get { key: "a/b".into() } ; "mixed whitespace get")]
    fn test_parse(line: &str, expected: Command) {
        assert_eq!(Command::parse(1, line).unwrap(), Some(expected));
    }

    #[test_case("" ; "blank")]
    #[test_case("   " ; "whitespace")]
    #[test_case("# put a b" ; "comment")]
    fn test_parse_skips(line: &str) {
        assert_eq!(Command::parse(1, line).unwrap(), None);
    }

    #[test]
    fn test_parse_unknown_verb() {
        let err = Command::parse(4, "insert a b").unwrap_err();
        assert_eq!(err.to_string(), "script line 4: unknown command 'insert'");
    }

    #[test]
    fn test_execute_delete_root_reports_error() {
        let session = Session::new(&TrieConfig::default()).unwrap();
        let outcome = session.execute(&Command::Delete { key: String::new() });

        assert_eq!(outcome.removed, None);
        assert!(outcome.error.is_some());
    }

    #[test]
    fn test_run_emits_json_lines() {
        let session = Session::new(&TrieConfig::default()).unwrap();
        let script = "put foo/bar baz\n\nget foo/bar\nget foo\nget nope\ndelete foo\nget foo/bar\n";
        let mut output = Vec::new();

        let executed = session.run(script.as_bytes(), &mut output).unwrap();
        assert_eq!(executed, 6);

        let lines: Vec<serde_json::Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines[0], serde_json::json!({"op": "put", "key": "foo/bar"}));
        assert_eq!(
            lines[1],
            serde_json::json!({"op": "get", "key": "foo/bar", "found": true, "value": "baz"})
        );
        assert_eq!(
            lines[2],
            serde_json::json!({"op": "get", "key": "foo", "found": true, "value": ""})
        );
        assert_eq!(lines[3], serde_json::json!({"op": "get", "key": "nope", "found": false}));
        assert_eq!(
            lines[4],
            serde_json::json!({"op": "delete", "key": "foo", "removed": true})
        );
        assert_eq!(lines[5], serde_json::json!({"op": "get", "key": "foo/bar", "found": false}));
    }

    #[test]
    fn test_from_loader_uses_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "[trie]\ndelimiter = \".\"\n[log]\nlevel = \"debug\"\n").unwrap();

        let session = Session::from_loader(&ConfigLoader::new(Some(&path), "TEST_SESSION")).unwrap();
        session.execute(&Command::Put {
            key: "a.b".into(),
            value: "1".into(),
        });

        assert_eq!(session.trie().delimiter(), ".");
        assert_eq!(session.config().log.level, "debug");
        assert_eq!(session.trie().get("a.b"), Some("1".to_string()));
    }

    #[test]
    fn test_from_loader_reports_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = Session::from_loader(&ConfigLoader::new(Some(&path), "TEST_SESSION_MISSING"))
            .unwrap_err();
        assert!(matches!(
            err,
            PathTrieError::Config(crate::error::ConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_run_stops_on_bad_line() {
        let session = Session::new(&TrieConfig::default()).unwrap();
        let mut output = Vec::new();

        let err = session
            .run("put a 1\nfrobnicate\nput b 2\n".as_bytes(), &mut output)
            .unwrap_err();

        assert!(matches!(err, PathTrieError::Script { line: 2, .. }));
        assert_eq!(session.trie().get("a"), Some("1".to_string()));
        assert_eq!(session.trie().get("b"), None);
    }
}
