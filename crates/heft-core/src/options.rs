//! String-keyed configuration options with typed accessors.

use std::collections::BTreeMap;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, HeftError};

fn option_error(code: &str, message: impl Into<String>) -> HeftError {
    HeftError::Options(ErrorInfo::new(code, message.into()))
}

/// Immutable string-keyed option set.
///
/// Options compose additively: `a + b` is the union of both sets with `b`
/// winning on key collisions. Unknown keys are accepted and ignored unless a
/// component requests them through one of the typed accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    entries: BTreeMap<String, String>,
}

impl Options {
    /// Creates an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an option set from key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Inserts a key/value pair, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns the raw value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the value for a key, or the provided default.
    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }

    /// Returns whether the key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the option set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Reads a switch-style option whose value must be in `allowed`.
    ///
    /// Returns `default` when the key is absent. A value outside the
    /// permitted set is an error listing the permitted values.
    pub fn switch(&self, key: &str, allowed: &[&str], default: &str) -> Result<String, HeftError> {
        let value = self.get_or(key, default);
        if allowed.contains(&value.as_str()) {
            Ok(value)
        } else {
            Err(HeftError::Options(
                ErrorInfo::new(
                    "invalid-option-value",
                    format!("invalid value '{value}' for option '{key}'"),
                )
                .with_context("permitted", allowed.join(", ")),
            ))
        }
    }

    /// Reads a boolean option (`true` / `false`).
    pub fn boolean(&self, key: &str, default: bool) -> Result<bool, HeftError> {
        match self.get(key) {
            None => Ok(default),
            Some("true") => Ok(true),
            Some("false") => Ok(false),
            Some(other) => Err(HeftError::Options(
                ErrorInfo::new(
                    "invalid-option-value",
                    format!("invalid value '{other}' for option '{key}'"),
                )
                .with_context("permitted", "true, false"),
            )),
        }
    }

    /// Reads an unsigned integer option.
    pub fn integer(&self, key: &str, default: u32) -> Result<u32, HeftError> {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => raw.parse::<u32>().map_err(|_| {
                option_error(
                    "invalid-option-value",
                    format!("invalid integer '{raw}' for option '{key}'"),
                )
            }),
        }
    }
}

impl Add for Options {
    type Output = Options;

    fn add(self, rhs: Options) -> Options {
        let mut entries = self.entries;
        entries.extend(rhs.entries);
        Options { entries }
    }
}

impl<'a> Add<&'a Options> for Options {
    type Output = Options;

    fn add(self, rhs: &'a Options) -> Options {
        let mut entries = self.entries;
        for (k, v) in &rhs.entries {
            entries.insert(k.clone(), v.clone());
        }
        Options { entries }
    }
}
