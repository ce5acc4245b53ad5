/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use crate::error::{Error, ErrorKind};

/// Contents of a `key=value` configuration file.
///
/// Blank lines and lines starting with `#` are ignored. Every other line is split on its
/// first `=` and both halves are trimmed; lines without an `=` are skipped. When a key
/// appears more than once the last value wins.
///
/// Leading whitespace is ignored, so an indented line such as `  # R2_REGION=weur` is a
/// comment too.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    entries: BTreeMap<String, String>,
}

impl EnvFile {
    /// Read and parse the file at `path`.
    ///
    /// Fails with [`ErrorKind::ConfigNotFound`] if the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<EnvFile, Error> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let env = Self::parse(&contents);
                tracing::debug!("loaded {} entries from {}", env.len(), path.display());
                Ok(env)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(Error::new(
                ErrorKind::ConfigNotFound,
                format!("environment file not found: {}", path.display()),
            )),
            Err(err) => Err(err.into()),
        }
    }

    /// Parse file contents.
    pub fn parse(contents: &str) -> EnvFile {
        let mut entries = BTreeMap::new();
        for line in contents.lines() {
            let line = line.trim_start();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            entries.insert(key.to_owned(), value.trim().to_owned());
        }
        EnvFile { entries }
    }

    /// Returns the value stored for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the value stored for `key` or `default` when the key is absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// All entries, ordered by key.
    pub fn all(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries were parsed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
