//! Structured error types shared across heft crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`HeftError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (names, scales, option values, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the heft engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum HeftError {
    /// Malformed or unknown observable qualified name.
    #[error("observable name error: {0}")]
    ObservableName(ErrorInfo),
    /// Unknown parameter or invalid parameter access.
    #[error("parameter error: {0}")]
    Parameter(ErrorInfo),
    /// Unknown option key or value outside the permitted set.
    #[error("option error: {0}")]
    Options(ErrorInfo),
    /// The form-factor factory cannot satisfy a transition + parameterization request.
    #[error("form factor error: {0}")]
    FormFactor(ErrorInfo),
    /// Unknown kinematic variable.
    #[error("kinematics error: {0}")]
    Kinematics(ErrorInfo),
    /// Internal invariant violation.
    #[error("internal error: {0}")]
    Internal(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl HeftError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            HeftError::ObservableName(info)
            | HeftError::Parameter(info)
            | HeftError::Options(info)
            | HeftError::FormFactor(info)
            | HeftError::Kinematics(info)
            | HeftError::Internal(info) => info,
        }
    }
}
