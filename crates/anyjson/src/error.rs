//! Error types for anyjson operations.
//!
//! Only parsing can fail. Coercion misses and serialization of non-finite
//! numbers are reported as `None`, and bad path access degrades to `Null`
//! with a diagnostic (see [`crate::diagnostics`]).

use thiserror::Error;

/// Errors surfaced to the caller by anyjson.
#[derive(Error, Debug)]
pub enum ValueError {
    /// The input bytes or text were not valid JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A string that is not a finite decimal number literal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid number literal: {0:?}")]
pub struct ParseNumberError(pub String);

/// Convenience alias used throughout anyjson.
pub type Result<T> = std::result::Result<T, ValueError>;
