//! Qualified-name grammar for observables and parameters.
//!
//! Observable names follow
//! `prefix "::" name [ "(" args ")" ] ( "," key "=" value )*`;
//! parameter names follow `sector::symbol` or `sector::symbol@suffix`.
//! Case is significant and whitespace is not permitted.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, HeftError};
use crate::options::Options;

fn syntax_error(message: impl Into<String>, input: &str) -> HeftError {
    HeftError::ObservableName(
        ErrorInfo::new("qualified-name-syntax", message.into()).with_context("input", input),
    )
}

/// Parsed observable qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifiedName {
    /// Process prefix, e.g. `B->K^*ll`.
    pub prefix: String,
    /// Observable identifier including any parenthesized kinematic labels.
    pub name: String,
    /// Options stripped from trailing `,key=value` pairs.
    pub options: Options,
}

impl QualifiedName {
    /// Returns the registry key `prefix::name`.
    pub fn full(&self) -> String {
        format!("{}::{}", self.prefix, self.name)
    }

    /// Parses a qualified observable name.
    pub fn parse(input: &str) -> Result<Self, HeftError> {
        if input.is_empty() {
            return Err(syntax_error("empty qualified name", input));
        }
        if input.chars().any(char::is_whitespace) {
            return Err(syntax_error("whitespace inside qualified name", input));
        }

        // Trailing `,key=value` pairs become an options delta. A comma inside
        // a parenthesized argument list is part of the name.
        let mut depth = 0usize;
        let mut split_at = input.len();
        for (idx, c) in input.char_indices() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth = depth.checked_sub(1).ok_or_else(|| {
                        syntax_error("unbalanced parentheses in qualified name", input)
                    })?;
                }
                ',' if depth == 0 => {
                    split_at = split_at.min(idx);
                }
                _ => {}
            }
        }
        if depth != 0 {
            return Err(syntax_error("unbalanced parentheses in qualified name", input));
        }

        let (bare, tail) = input.split_at(split_at);
        let mut options = Options::new();
        for pair in tail.split(',').filter(|s| !s.is_empty()) {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| syntax_error(format!("malformed option pair '{pair}'"), input))?;
            if key.is_empty() || value.is_empty() {
                return Err(syntax_error(format!("malformed option pair '{pair}'"), input));
            }
            options.insert(key, value);
        }

        let (prefix, name) = bare
            .split_once("::")
            .ok_or_else(|| syntax_error("missing '::' separator", input))?;
        if prefix.is_empty() || name.is_empty() {
            return Err(syntax_error("empty prefix or name segment", input));
        }
        if name.contains("::") {
            return Err(syntax_error("more than one '::' separator", input));
        }

        Ok(Self {
            prefix: prefix.to_string(),
            name: name.to_string(),
            options,
        })
    }
}

/// Parsed parameter name `sector::symbol[@suffix]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterName {
    /// Sector prefix, e.g. `mass` or `b->s`.
    pub sector: String,
    /// Symbol within the sector.
    pub symbol: String,
    /// Optional scheme or parameterization suffix after `@`.
    pub suffix: Option<String>,
}

impl ParameterName {
    /// Parses a parameter name.
    pub fn parse(input: &str) -> Result<Self, HeftError> {
        if input.chars().any(char::is_whitespace) {
            return Err(syntax_error("whitespace inside parameter name", input));
        }
        let (sector, rest) = input
            .split_once("::")
            .ok_or_else(|| syntax_error("missing '::' separator", input))?;
        if sector.is_empty() || rest.is_empty() {
            return Err(syntax_error("empty sector or symbol segment", input));
        }
        let (symbol, suffix) = match rest.split_once('@') {
            Some((symbol, suffix)) if !symbol.is_empty() && !suffix.is_empty() => {
                (symbol.to_string(), Some(suffix.to_string()))
            }
            Some(_) => return Err(syntax_error("malformed '@' suffix", input)),
            None => (rest.to_string(), None),
        };
        Ok(Self {
            sector: sector.to_string(),
            symbol,
            suffix,
        })
    }
}
