//! Document type produced by the JSON canonical pipeline.
//!
//! A [`CanonicalDocument`] is built fresh for one diff request and never
//! cached. For a fixed config version and input, every field is
//! deterministic.
//!
//! ```rust
//! use canonical::{canonicalize_str, CanonicalizeConfig};
//!
//! let config = CanonicalizeConfig::default();
//! let doc = canonicalize_str(r#"{"b": null, "a": [2, 1]}"#, &config).unwrap();
//!
//! assert_eq!(doc.canonical_text, "{\n  \"a\": [\n    2,\n    1\n  ],\n  \"b\": null\n}");
//! assert_eq!(doc.sha256_hex.len(), 64);
//! assert_eq!(doc.canonical_version, 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::CanonicalizeConfig;

/// Pretty-printed, key-sorted rendering of one JSON document.
///
/// ```text
/// CanonicalDocument
/// ├── canonical_text: String        # Sorted, indented JSON
/// ├── sha256_hex: String            # Version-aware identity hash
/// ├── canonical_version: u32        # Config version used
/// └── config: CanonicalizeConfig    # Config snapshot
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalDocument {
    /// Sorted, indented JSON text. No trailing newline.
    pub canonical_text: String,

    /// `SHA-256(version || 0x00 || canonical_text)` as lowercase hex.
    pub sha256_hex: String,

    /// Copy of [`CanonicalizeConfig::version`].
    pub canonical_version: u32,

    /// Snapshot of the configuration that produced this document.
    pub config: CanonicalizeConfig,
}

impl CanonicalDocument {
    /// True when both documents render to the same canonical text under the
    /// same config version.
    pub fn is_equivalent(&self, other: &CanonicalDocument) -> bool {
        self.sha256_hex == other.sha256_hex && self.canonical_text == other.canonical_text
    }
}
