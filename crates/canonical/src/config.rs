//! Configuration types for the JSON canonical pipeline.
//!
//! [`CanonicalizeConfig`] controls how a parsed document is rendered back to
//! text. Sorting itself is not configurable: every object is always key-sorted.
//!
//! # Versioning
//!
//! The `version` field is part of the document identity hash. Any change to
//! rendering behavior (indent, number formatting, even bug fixes) must come
//! with a version bump so hashes from different versions never collide.
//!
//! # Examples
//!
//! ```rust
//! use canonical::CanonicalizeConfig;
//!
//! let config = CanonicalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert_eq!(config.indent_width, 2);
//! assert!(!config.require_object_root);
//! assert!(config.max_input_bytes.is_none());
//! ```
//!
//! ## Compact output
//!
//! ```rust
//! use canonical::{canonicalize_str, CanonicalizeConfig};
//!
//! let config = CanonicalizeConfig {
//!     indent_width: 0,
//!     ..Default::default()
//! };
//! let doc = canonicalize_str(r#"{"b":1,"a":2}"#, &config).unwrap();
//! assert_eq!(doc.canonical_text, r#"{"a":2,"b":1}"#);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Widest indent we accept. Anything larger is almost certainly a typo.
pub const MAX_INDENT_WIDTH: usize = 16;

/// Configuration for the JSON canonical pipeline.
///
/// Cheap to clone and serializable so hosts can load it from their own
/// settings files.
///
/// ```json
/// {
///   "version": 1,
///   "indent_width": 2,
///   "require_object_root": false,
///   "max_input_bytes": null
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalizeConfig {
    /// Version of the canonical rendering. Must be >= 1; version 0 is reserved.
    ///
    /// Included in the identity hash:
    /// ```text
    /// SHA-256(version.to_be_bytes() || 0x00 || canonical_text_bytes)
    /// ```
    pub version: u32,

    /// Spaces per nesting level. `0` renders the document on a single line
    /// with no insignificant whitespace.
    pub indent_width: usize,

    /// Reject documents whose top-level value is not an object.
    ///
    /// Off by default: arrays and scalars at the root are canonicalized like
    /// any other value. Turn it on to accept only map-shaped documents.
    pub require_object_root: bool,

    /// Upper bound on the raw input size in bytes, checked before decoding.
    pub max_input_bytes: Option<usize>,
}

impl CanonicalizeConfig {
    /// Checks the invariants every canonicalization relies on.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        if self.indent_width > MAX_INDENT_WIDTH {
            return Err(CanonicalError::InvalidConfig(format!(
                "indent_width {} exceeds maximum of {MAX_INDENT_WIDTH}",
                self.indent_width
            )));
        }
        if self.max_input_bytes == Some(0) {
            return Err(CanonicalError::InvalidConfig(
                "max_input_bytes must be > 0 when set".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CanonicalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            indent_width: 2,
            require_object_root: false,
            max_input_bytes: None,
        }
    }
}
