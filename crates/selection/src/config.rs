//! Configuration for selection and validation.
//!
//! [`SelectionConfig`] decides which files the JSON diff action accepts and how
//! many may be selected at once.
//!
//! ```rust
//! use selection::SelectionConfig;
//!
//! let config = SelectionConfig::default();
//! assert_eq!(config.extension, "json");
//! assert_eq!(config.max_candidates, 2);
//! assert!(config.reject_empty_files);
//! config.validate().expect("defaults are valid");
//! ```
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by [`SelectionConfig::validate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("extension must be non-empty, without a leading '.' or surrounding whitespace: {0:?}")]
    InvalidExtension(String),
    #[error("max_candidates must be 1 or 2, got {0}")]
    InvalidMaxCandidates(usize),
}

/// Runtime policy for which selections the action accepts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionConfig {
    /// File extension compared case-insensitively, without the dot.
    pub extension: String,

    /// Largest selection the action is offered for. A diff has two sides, so
    /// only `1` (always prompt) and `2` make sense.
    pub max_candidates: usize,

    /// Treat a zero-byte second file as unusable.
    pub reject_empty_files: bool,
}

impl SelectionConfig {
    /// Rejects configurations that could never produce a valid diff.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ext = self.extension.as_str();
        if ext.is_empty() || ext.starts_with('.') || ext.trim() != ext {
            return Err(ConfigError::InvalidExtension(self.extension.clone()));
        }
        if !(1..=2).contains(&self.max_candidates) {
            return Err(ConfigError::InvalidMaxCandidates(self.max_candidates));
        }
        Ok(())
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            extension: "json".to_string(),
            max_candidates: 2,
            reject_empty_files: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_extension_rejected() {
        let cfg = SelectionConfig {
            extension: ".json".into(),
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidExtension(_))
        ));
    }

    #[test]
    fn blank_extension_rejected() {
        let cfg = SelectionConfig {
            extension: "  ".into(),
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn padded_extension_rejected() {
        for padded in [" json", "json ", "\tjson"] {
            let cfg = SelectionConfig {
                extension: padded.into(),
                ..Default::default()
            };
            assert_eq!(
                cfg.validate(),
                Err(ConfigError::InvalidExtension(padded.to_string()))
            );
        }
    }

    #[test]
    fn candidate_bounds_enforced() {
        for bad in [0, 3, 10] {
            let cfg = SelectionConfig {
                max_candidates: bad,
                ..Default::default()
            };
            assert_eq!(cfg.validate(), Err(ConfigError::InvalidMaxCandidates(bad)));
        }
        let single = SelectionConfig {
            max_candidates: 1,
            ..Default::default()
        };
        assert!(single.validate().is_ok());
    }
}
