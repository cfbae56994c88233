use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::charset::{decode, Charset};
use crate::config::CanonicalizeConfig;
use crate::document::CanonicalDocument;
use crate::error::CanonicalError;
use crate::hash::hash_canonical_bytes;
use crate::sort::deep_sort;

/// Main entry point. Decodes raw file bytes with the declared charset and
/// returns the canonical document.
///
/// Fails on decode errors, malformed JSON, or trailing garbage after the
/// document. There is no best-effort result.
pub fn canonicalize(
    raw: &[u8],
    charset: Charset,
    cfg: &CanonicalizeConfig,
) -> Result<CanonicalDocument, CanonicalError> {
    cfg.validate()?;
    check_size(raw.len(), cfg)?;

    let text = decode(raw, charset)?;
    canonicalize_text(&text, cfg)
}

/// Canonicalizes text that is already decoded.
pub fn canonicalize_str(
    text: &str,
    cfg: &CanonicalizeConfig,
) -> Result<CanonicalDocument, CanonicalError> {
    cfg.validate()?;
    check_size(text.len(), cfg)?;

    canonicalize_text(text, cfg)
}

/// Serializes `value` as JSON, `indent_width` spaces per level.
///
/// Object members come out in the map's iteration order, so pass a
/// [`deep_sort`]ed value for canonical output. `null` is always written out.
/// A width of `0` produces compact single-line JSON.
pub fn render(value: &Value, indent_width: usize) -> Result<String, CanonicalError> {
    let mut out = Vec::with_capacity(256);

    let written = if indent_width == 0 {
        serde_json::to_writer(&mut out, value)
    } else {
        let indent = vec![b' '; indent_width];
        let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&indent));
        value.serialize(&mut ser)
    };
    written.map_err(|err| CanonicalError::Serialize(err.to_string()))?;

    String::from_utf8(out).map_err(|err| CanonicalError::Serialize(err.to_string()))
}

fn canonicalize_text(
    text: &str,
    cfg: &CanonicalizeConfig,
) -> Result<CanonicalDocument, CanonicalError> {
    // serde_json rejects trailing non-whitespace and keeps the last value for
    // duplicate keys.
    let parsed: Value = serde_json::from_str(text)?;

    if cfg.require_object_root && !parsed.is_object() {
        return Err(CanonicalError::NonObjectRoot);
    }

    let sorted = deep_sort(parsed);
    let canonical_text = render(&sorted, cfg.indent_width)?;
    let sha256_hex = hash_canonical_bytes(cfg.version, canonical_text.as_bytes());

    Ok(CanonicalDocument {
        canonical_text,
        sha256_hex,
        canonical_version: cfg.version,
        config: cfg.clone(),
    })
}

fn check_size(size: usize, cfg: &CanonicalizeConfig) -> Result<(), CanonicalError> {
    match cfg.max_input_bytes {
        Some(limit) if size > limit => Err(CanonicalError::InputTooLarge { size, limit }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cfg() -> CanonicalizeConfig {
        CanonicalizeConfig::default()
    }

    #[test]
    fn null_fields_survive() {
        let doc = canonicalize_str(r#"{"b":null,"a":{"c":null}}"#, &cfg()).expect("canonical");
        assert_eq!(
            doc.canonical_text,
            "{\n  \"a\": {\n    \"c\": null\n  },\n  \"b\": null\n}"
        );
    }

    #[test]
    fn duplicate_keys_last_write_wins() {
        let doc = canonicalize_str(r#"{"a":1,"b":2,"a":3}"#, &cfg()).expect("canonical");
        assert_eq!(doc.canonical_text, "{\n  \"a\": 3,\n  \"b\": 2\n}");
    }

    #[test]
    fn trailing_garbage_rejected() {
        let res = canonicalize_str(r#"{"a":1} {"b":2}"#, &cfg());
        assert!(matches!(res, Err(CanonicalError::Parse { .. })));
    }

    #[test]
    fn surrounding_whitespace_is_fine() {
        let doc = canonicalize_str("\n  {\"a\": 1}  \n", &cfg()).expect("canonical");
        assert_eq!(doc.canonical_text, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn empty_input_is_parse_error() {
        for input in ["", "   ", "\n"] {
            let res = canonicalize_str(input, &cfg());
            assert!(
                matches!(res, Err(CanonicalError::Parse { .. })),
                "expected parse error for {input:?}"
            );
        }
    }

    #[test]
    fn parse_error_reports_position() {
        let err = canonicalize_str("{\n  \"a\": tru\n}", &cfg()).unwrap_err();
        match err {
            CanonicalError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn scalar_root_allowed_by_default() {
        let doc = canonicalize_str("42", &cfg()).expect("canonical");
        assert_eq!(doc.canonical_text, "42");
    }

    #[test]
    fn object_root_enforced_when_configured() {
        let strict = CanonicalizeConfig {
            require_object_root: true,
            ..cfg()
        };
        assert!(matches!(
            canonicalize_str("[1, 2]", &strict),
            Err(CanonicalError::NonObjectRoot)
        ));
        assert!(canonicalize_str("{}", &strict).is_ok());
    }

    #[test]
    fn size_limit_checked_on_raw_bytes() {
        let limited = CanonicalizeConfig {
            max_input_bytes: Some(4),
            ..cfg()
        };
        let res = canonicalize(br#"{"a":1}"#, Charset::Utf8, &limited);
        assert_eq!(res, Err(CanonicalError::InputTooLarge { size: 7, limit: 4 }));
    }

    #[test]
    fn invalid_config_rejected_before_parsing() {
        let bad = CanonicalizeConfig {
            version: 0,
            ..cfg()
        };
        assert!(matches!(
            canonicalize(b"not even json", Charset::Utf8, &bad),
            Err(CanonicalError::InvalidConfig(_))
        ));
    }

    #[test]
    fn utf16_input_matches_utf8_input() {
        let text = r#"{"b":"ü","a":1}"#;
        let mut utf16 = vec![0xFF, 0xFE];
        for unit in text.encode_utf16() {
            utf16.extend_from_slice(&unit.to_le_bytes());
        }

        let from_utf8 = canonicalize(text.as_bytes(), Charset::Utf8, &cfg()).expect("utf8");
        let from_utf16 = canonicalize(&utf16, Charset::Utf8, &cfg()).expect("utf16");
        assert!(from_utf8.is_equivalent(&from_utf16));
    }

    #[test]
    fn custom_indent_width() {
        let four = CanonicalizeConfig {
            indent_width: 4,
            ..cfg()
        };
        let doc = canonicalize_str(r#"{"a":[1]}"#, &four).expect("canonical");
        assert_eq!(doc.canonical_text, "{\n    \"a\": [\n        1\n    ]\n}");
    }

    #[test]
    fn render_empty_containers() {
        assert_eq!(render(&json!({}), 2).expect("render"), "{}");
        assert_eq!(render(&json!([]), 2).expect("render"), "[]");
        assert_eq!(render(&json!({"a": {}}), 0).expect("render"), r#"{"a":{}}"#);
    }
}
