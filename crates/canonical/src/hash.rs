//! Hashing utilities for canonical JSON documents.
//!
//! ## Document identity hash
//!
//! ```text
//! SHA-256(version.to_be_bytes() || 0x00 || canonical_text_bytes)
//! ```
//!
//! The version is mixed in so that two renderings produced under different
//! config versions never share an identity, even when the text happens to
//! match.
//!
//! ```rust
//! use canonical::{hash_text, hash_canonical_bytes};
//!
//! let hash = hash_text("{}");
//! assert_eq!(hash.len(), 64);
//!
//! let canonical_hash = hash_canonical_bytes(1, b"{}");
//! assert_ne!(hash, canonical_hash);
//! ```

use sha2::{Digest, Sha256};

/// Hash arbitrary text with SHA-256 and return a hex digest.
///
/// Version-agnostic; meant for diagnostics and log fields. Use
/// [`hash_canonical_bytes`] for document identity.
pub fn hash_text(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compute the canonical identity hash for canonical text and version.
///
/// - `version.to_be_bytes()`: 4-byte big-endian version number
/// - `0x00`: discriminator byte (document level)
/// - `canonical_bytes`: UTF-8 bytes of the canonical text
///
/// ```rust
/// use canonical::hash_canonical_bytes;
///
/// let hash_v1 = hash_canonical_bytes(1, b"{\"a\": 1}");
/// let hash_v2 = hash_canonical_bytes(2, b"{\"a\": 1}");
/// assert_ne!(hash_v1, hash_v2);
/// assert_eq!(hash_v1, hash_canonical_bytes(1, b"{\"a\": 1}"));
/// ```
pub fn hash_canonical_bytes(canonical_version: u32, canonical_bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical_version.to_be_bytes());
    hasher.update([0]);
    hasher.update(canonical_bytes);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_text_determinism() {
        let texts = ["", "{}", "{\"k\":\"こんにちは\"}", "[\"\u{1f600}\"]"];

        for text in texts {
            assert_eq!(hash_text(text), hash_text(text));
        }
    }

    #[test]
    fn empty_text_has_known_digest() {
        assert_eq!(
            hash_text(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
