//! JSON decoder.
//!
//! Parses into a [`StructuredDocument`] tree. Object key order is preserved
//! (for round-trip fidelity), but queries address keys by name — order is
//! never semantically significant.

use serde_json::Value;

use crate::asset::FormatKind;
use crate::document::StructuredDocument;
use crate::error::DecodeError;

/// Decode JSON bytes into a [`StructuredDocument`].
///
/// # Errors
///
/// Returns [`DecodeError::MalformedInput`] on a syntax error, carrying the
/// parser's line/column message.
pub fn decode_json(bytes: &[u8]) -> Result<StructuredDocument, DecodeError> {
    let root: Value =
        serde_json::from_slice(bytes).map_err(|e| DecodeError::malformed(FormatKind::Json, e))?;
    Ok(StructuredDocument::new(root))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const GLOSSARY: &[u8] = br#"{
        "title": "example glossary",
        "GlossDiv": {"title": "S", "flag": true}
    }"#;

    #[test]
    fn test_glossary_paths() {
        let doc = decode_json(GLOSSARY).unwrap();
        assert_eq!(doc.string_at("title").unwrap(), "example glossary");
        assert_eq!(doc.string_at("GlossDiv.title").unwrap(), "S");
        assert!(doc.bool_at("GlossDiv.flag").unwrap());
    }

    #[test]
    fn test_missing_path_is_field_not_found() {
        let doc = decode_json(GLOSSARY).unwrap();
        let err = doc.path("GlossDiv.missing").unwrap_err();
        assert!(matches!(err, DecodeError::FieldNotFound { .. }), "got: {err}");
    }

    #[test]
    fn test_syntax_error_is_malformed_with_location() {
        let err = decode_json(b"{\"invalid\": json}").unwrap_err();
        let DecodeError::MalformedInput { format, cause } = err else {
            panic!("expected MalformedInput");
        };
        assert_eq!(format, FormatKind::Json);
        assert!(cause.contains("line"), "got: {cause}");
    }

    #[test]
    fn test_key_order_preserved() {
        let doc = decode_json(br#"{"zebra": 1, "apple": 2, "mango": 3}"#).unwrap();
        let keys: Vec<&String> = doc
            .root()
            .as_object()
            .unwrap()
            .keys()
            .collect();
        assert_eq!(keys, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_top_level_array() {
        let doc = decode_json(br#"[{"name": "Ford"}, {"name": "BMW"}]"#).unwrap();
        assert_eq!(doc.string_at("[1].name").unwrap(), "BMW");
    }
}
