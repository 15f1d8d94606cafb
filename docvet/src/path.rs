//! Dotted/indexed path resolution over a JSON value tree.
//!
//! Supports `a.b.c`, `a/b/c`, `items[0]`, `items.[0]`, and mixes such as
//! `entries[0].name`. This is deliberately not a full query language —
//! exact segments and numeric indices only, sufficient for assertion use.

use serde_json::Value;

use crate::error::DecodeError;

/// Resolve a path against a JSON tree, borrowing the target value.
///
/// # Errors
///
/// Returns [`DecodeError::FieldNotFound`] when a segment is missing, an
/// index is out of range or non-numeric, or the path descends into a
/// primitive. The error names the offending segment and lists the fields
/// available at the failure point.
pub fn resolve<'a>(root: &'a Value, path: &str) -> Result<&'a Value, DecodeError> {
    let mut cur = root;
    for seg in segments(path) {
        cur = match cur {
            Value::Object(map) => {
                if seg.starts_with('[') {
                    return Err(DecodeError::field_not_found(
                        path,
                        format!(
                            "segment '{seg}' indexes into an object; available fields: {}",
                            available(cur)
                        ),
                    ));
                }
                map.get(&seg).ok_or_else(|| {
                    DecodeError::field_not_found(
                        path,
                        format!("key '{seg}' not found; available fields: {}", available(cur)),
                    )
                })?
            }
            Value::Array(arr) => {
                let idx = parse_index(&seg).ok_or_else(|| {
                    DecodeError::field_not_found(
                        path,
                        format!("expected a list index at segment '{seg}'"),
                    )
                })?;
                arr.get(idx).ok_or_else(|| {
                    DecodeError::field_not_found(
                        path,
                        format!("index {idx} out of range at segment '{seg}' (length {})", arr.len()),
                    )
                })?
            }
            other => {
                return Err(DecodeError::field_not_found(
                    path,
                    format!("cannot descend into {} at segment '{seg}'", json_kind(other)),
                ));
            }
        };
    }
    Ok(cur)
}

/// Human-readable name of a JSON value's kind, for error messages.
#[must_use]
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Split a path into lookup segments. `/` is normalized to `.`, empty
/// segments are dropped, and `[n]` suffixes become their own segments.
fn segments(path: &str) -> Vec<String> {
    let norm = path.replace('/', ".");
    let mut segs = Vec::new();
    for raw in norm.split('.').filter(|s| !s.is_empty()) {
        expand_brackets(raw, &mut segs);
    }
    segs
}

/// Split `name[0][1]` into `name`, `[0]`, `[1]`. An unclosed bracket is kept
/// verbatim so `resolve` reports it against the original spelling.
fn expand_brackets(raw: &str, out: &mut Vec<String>) {
    let mut rest = raw;
    while let Some(open) = rest.find('[') {
        if open > 0 {
            out.push(rest[..open].to_owned());
        }
        match rest[open..].find(']') {
            Some(close) => {
                out.push(rest[open..=open + close].to_owned());
                rest = &rest[open + close + 1..];
            }
            None => {
                out.push(rest[open..].to_owned());
                return;
            }
        }
    }
    if !rest.is_empty() {
        out.push(rest.to_owned());
    }
}

/// Parse `[3]` or bare `3` as an array index.
fn parse_index(seg: &str) -> Option<usize> {
    let digits = seg
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(seg);
    digits.parse().ok()
}

/// Immediate fields of a node, for `FieldNotFound` context.
fn available(value: &Value) -> String {
    match value {
        Value::Object(map) => map
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Array(arr) => format!("indices 0..{}", arr.len()),
        _ => String::new(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_simple_path() {
        let content = json!({"field": "value"});
        assert_eq!(resolve(&content, "field").unwrap(), &json!("value"));
    }

    #[test]
    fn test_resolve_nested_path() {
        let content = json!({"outer": {"inner": "value"}});
        assert_eq!(resolve(&content, "outer.inner").unwrap(), &json!("value"));
    }

    #[test]
    fn test_resolve_array_index() {
        let content = json!({"items": [1, 2, 3]});
        assert_eq!(resolve(&content, "items[1]").unwrap(), &json!(2));
    }

    #[test]
    fn test_resolve_array_dotted_bracket() {
        let content = json!({"items": [1, 2, 3]});
        assert_eq!(resolve(&content, "items.[1]").unwrap(), &json!(2));
    }

    #[test]
    fn test_resolve_array_bare_numeric_segment() {
        let content = json!({"items": [1, 2, 3]});
        assert_eq!(resolve(&content, "items.2").unwrap(), &json!(3));
    }

    #[test]
    fn test_resolve_slash_notation() {
        let content = json!({"outer": {"inner": "value"}});
        assert_eq!(resolve(&content, "outer/inner").unwrap(), &json!("value"));
    }

    #[test]
    fn test_resolve_empty_path_is_root() {
        let content = json!({"field": "value"});
        assert_eq!(resolve(&content, "").unwrap(), &content);
    }

    #[test]
    fn test_resolve_missing_key_lists_available_fields() {
        let content = json!({"field1": "value", "field2": "other"});
        let err = resolve(&content, "nonexistent").unwrap_err();
        let DecodeError::FieldNotFound { path, cause } = err else {
            panic!("expected FieldNotFound");
        };
        assert_eq!(path, "nonexistent");
        assert!(cause.contains("field1"), "got: {cause}");
        assert!(cause.contains("field2"), "got: {cause}");
    }

    #[test]
    fn test_resolve_index_out_of_range() {
        let content = json!({"items": [1, 2, 3]});
        let err = resolve(&content, "items[10]").unwrap_err();
        assert!(err.to_string().contains("out of range"), "got: {err}");
    }

    #[test]
    fn test_resolve_non_numeric_index() {
        let content = json!({"items": [1, 2, 3]});
        let err = resolve(&content, "items[abc]").unwrap_err();
        assert!(err.to_string().contains("expected a list index"), "got: {err}");
    }

    #[test]
    fn test_resolve_bracket_on_object() {
        let content = json!({"obj": {"field": "value"}});
        let err = resolve(&content, "obj[0]").unwrap_err();
        assert!(err.to_string().contains("indexes into an object"), "got: {err}");
    }

    #[test]
    fn test_resolve_descend_into_primitive() {
        let content = json!({"field": "value"});
        let err = resolve(&content, "field.nested").unwrap_err();
        assert!(err.to_string().contains("cannot descend"), "got: {err}");
    }

    #[test]
    fn test_resolve_deeply_nested() {
        let content = json!({"a": {"b": {"c": {"d": {"e": "deep"}}}}});
        assert_eq!(resolve(&content, "a.b.c.d.e").unwrap(), &json!("deep"));
    }

    #[test]
    fn test_resolve_array_of_arrays() {
        let content = json!({"matrix": [[1, 2], [3, 4], [5, 6]]});
        assert_eq!(resolve(&content, "matrix[1][0]").unwrap(), &json!(3));
    }

    #[test]
    fn test_resolve_mixed_path() {
        let content = json!({"data": [{"name": "first"}, {"name": "second"}]});
        assert_eq!(resolve(&content, "data[1].name").unwrap(), &json!("second"));
    }

    #[test]
    fn test_segments_trailing_dots() {
        assert_eq!(segments("a..b...c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_expand_brackets_multiple() {
        let mut out = Vec::new();
        expand_brackets("arr[0][1]", &mut out);
        assert_eq!(out, vec!["arr", "[0]", "[1]"]);
    }

    #[test]
    fn test_expand_brackets_unclosed() {
        let mut out = Vec::new();
        expand_brackets("field[0", &mut out);
        assert_eq!(out, vec!["field", "[0"]);
    }
}
