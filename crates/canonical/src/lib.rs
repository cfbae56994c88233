//! JSON canonical layer.
//!
//! This crate turns a JSON document into a deterministic, human-readable text so
//! that two documents which differ only in object key order render identically.
//! The diff itself is somebody else's job; we only produce the text.
//!
//! ## What we do
//!
//! - Decode raw bytes using the declared charset (a byte-order mark wins)
//! - Parse exactly one JSON document, rejecting trailing garbage
//! - Sort every object by key at every depth, including objects inside arrays
//! - Leave arrays in their original order and scalars untouched
//! - Keep explicit `null` values and emit them as `null`
//! - Pretty-print with a fixed indent and hash the result
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no logging. Same bytes + same charset + same config
//! gives the same [`CanonicalDocument`] on any machine.
//!
//! ## Invariants worth knowing
//!
//! - Keys are ordered by Unicode code point (Rust `str` ordering)
//! - Duplicate keys inside one object: last write wins
//! - Numbers keep the text they were written with; no float rounding
//! - Nesting deeper than 128 arrays/objects is rejected as a parse error
//! - Hash = SHA-256(version || 0x00 || canonical_text)
//!
//! ```
//! use canonical::{canonicalize_str, CanonicalizeConfig};
//!
//! let cfg = CanonicalizeConfig::default();
//! let a = canonicalize_str(r#"{"b":1,"a":{"y":2,"x":1}}"#, &cfg).unwrap();
//! let b = canonicalize_str(r#"{"a":{"x":1,"y":2},"b":1}"#, &cfg).unwrap();
//! assert_eq!(a.canonical_text, b.canonical_text);
//! ```

mod charset;
mod config;
mod document;
mod error;
mod hash;
mod pipeline;
mod sort;

pub use crate::charset::{decode, Charset};
pub use crate::config::CanonicalizeConfig;
pub use crate::document::CanonicalDocument;
pub use crate::error::CanonicalError;
pub use crate::hash::{hash_canonical_bytes, hash_text};
pub use crate::pipeline::{canonicalize, canonicalize_str, render};
pub use crate::sort::deep_sort;
