//! Error payloads for the scanner, batch runner, corpus routines and CLI.
//!
//! Every failure carries a stable kebab-case code (`input-too-long`,
//! `invalid-radius-table`, `negative-index`, ...) so scripts driving `pal`
//! can match on it instead of on message text.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Code, message and key/value context of one failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Kebab-case code, stable across releases.
    pub code: String,
    /// One-line description for humans.
    pub message: String,
    /// Offending values, e.g. `len`/`limit` for length checks, `index` for
    /// a rejected request or symbol, `path` for file errors.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Suggested fix, when there is an obvious one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Payload with no context and no hint.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records an offending value; later keys overwrite earlier ones.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Attaches a suggested fix.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Error returned by every fallible operation of the toolkit.
///
/// The scan itself is total; errors only come from the layers around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum PalError {
    /// Text over `max_input_len`, or an empty alphabet for generated text.
    #[error("input error: {0}")]
    Input(ErrorInfo),
    /// Invalid or unreadable configuration.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Bad arguments to the corpus routines (negative Fibonacci index,
    /// off-disk request, stray symbol under the strict bracket policy).
    #[error("corpus error: {0}")]
    Corpus(ErrorInfo),
    /// Encoding failures and decoded payloads that break table invariants.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
    /// Unreadable input files, configs or output paths.
    #[error("io error: {0}")]
    Io(ErrorInfo),
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

impl PalError {
    /// Payload of whichever family the error belongs to.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            PalError::Input(info)
            | PalError::Config(info)
            | PalError::Corpus(info)
            | PalError::Serde(info)
            | PalError::Io(info) => info,
        }
    }

    /// Wraps an I/O failure on `path` into [`PalError::Io`].
    pub fn io(code: &str, path: &std::path::Path, err: std::io::Error) -> Self {
        PalError::Io(
            ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
        )
    }
}
