use thiserror::Error;

use crate::charset::Charset;

/// Errors that can occur during canonicalization.
///
/// Every variant is a terminal failure for one document; nothing here is
/// retried. Callers decide how much of the detail reaches the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("input of {size} bytes exceeds limit of {limit}")]
    InputTooLarge { size: usize, limit: usize },
    #[error("cannot decode input as {charset}: {reason}")]
    Decode { charset: Charset, reason: String },
    #[error("malformed JSON at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },
    #[error("top-level JSON value must be an object")]
    NonObjectRoot,
    #[error("failed to render canonical JSON: {0}")]
    Serialize(String),
}

/// Parse failures keep serde_json's position so hosts can point at the
/// offending line in their own logs.
impl From<serde_json::Error> for CanonicalError {
    fn from(err: serde_json::Error) -> Self {
        CanonicalError::Parse {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}
