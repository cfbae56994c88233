//! Character decoding for raw file bytes.
//!
//! Hosts hand us bytes plus the charset they believe the file uses. A
//! byte-order mark at the start of the buffer overrides that declaration and
//! is stripped before parsing. Decoding is strict: malformed sequences fail
//! the whole document instead of being replaced.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Character encodings a JSON file may be declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Charset {
    #[default]
    Utf8,
    Utf16Le,
    Utf16Be,
    Latin1,
}

impl Charset {
    /// Canonical label, as used in config files and error messages.
    pub fn label(self) -> &'static str {
        match self {
            Charset::Utf8 => "UTF-8",
            Charset::Utf16Le => "UTF-16LE",
            Charset::Utf16Be => "UTF-16BE",
            Charset::Latin1 => "ISO-8859-1",
        }
    }

    /// Resolves a charset label case-insensitively. Common aliases are accepted.
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "utf-8" | "utf8" => Some(Charset::Utf8),
            "utf-16le" | "utf16le" => Some(Charset::Utf16Le),
            "utf-16be" | "utf16be" | "utf-16" | "utf16" => Some(Charset::Utf16Be),
            "iso-8859-1" | "iso8859-1" | "latin1" | "latin-1" => Some(Charset::Latin1),
            _ => None,
        }
    }

    /// Detects a byte-order mark, returning the charset and the BOM length.
    fn sniff_bom(bytes: &[u8]) -> Option<(Charset, usize)> {
        if bytes.starts_with(UTF8_BOM) {
            Some((Charset::Utf8, UTF8_BOM.len()))
        } else if bytes.starts_with(UTF16_LE_BOM) {
            Some((Charset::Utf16Le, UTF16_LE_BOM.len()))
        } else if bytes.starts_with(UTF16_BE_BOM) {
            Some((Charset::Utf16Be, UTF16_BE_BOM.len()))
        } else {
            None
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Charset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Charset::from_label(s).ok_or_else(|| format!("unsupported charset '{s}'"))
    }
}

impl TryFrom<String> for Charset {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Charset> for String {
    fn from(charset: Charset) -> Self {
        charset.label().to_string()
    }
}

/// Decodes `bytes` into text using `declared`, unless a BOM says otherwise.
pub fn decode(bytes: &[u8], declared: Charset) -> Result<String, CanonicalError> {
    let (charset, body) = match Charset::sniff_bom(bytes) {
        Some((detected, bom_len)) => (detected, &bytes[bom_len..]),
        None => (declared, bytes),
    };

    match charset {
        Charset::Utf8 => std::str::from_utf8(body)
            .map(str::to_owned)
            .map_err(|err| CanonicalError::Decode {
                charset,
                reason: err.to_string(),
            }),
        Charset::Utf16Le => decode_utf16(body, charset, u16::from_le_bytes),
        Charset::Utf16Be => decode_utf16(body, charset, u16::from_be_bytes),
        Charset::Latin1 => Ok(body.iter().map(|&b| char::from(b)).collect()),
    }
}

fn decode_utf16(
    body: &[u8],
    charset: Charset,
    unit: fn([u8; 2]) -> u16,
) -> Result<String, CanonicalError> {
    if body.len() % 2 != 0 {
        return Err(CanonicalError::Decode {
            charset,
            reason: format!("odd byte length {}", body.len()),
        });
    }

    let units = body.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|err| CanonicalError::Decode {
            charset,
            reason: err.to_string(),
        })
}
