//! Recursive whitespace trimming for JSON values.
//!
//! Inputs are assumed acyclic, which `serde_json::Value` guarantees by
//! construction.

use serde_json::{Map, Value};

/// Trim surrounding whitespace from every string inside `value`.
///
/// Returns a new value with the same shape: arrays keep their length and
/// order, objects keep their key set, and numbers, booleans and `null` are
/// copied unchanged.
///
/// # Example
/// ```
/// use nimbus_api::util::sanitize;
/// use serde_json::json;
///
/// let input = json!({"name": "  John  ", "age": 30, "tags": ["  a ", "b"]});
/// assert_eq!(sanitize(&input), json!({"name": "John", "age": 30, "tags": ["a", "b"]}));
/// ```
pub fn sanitize(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(s.trim().to_string()),
        Value::Array(items) => Value::Array(items.iter().map(sanitize).collect()),
        _ => match as_mapping(value, true) {
            Some(map) => Value::Object(sanitize_map(map)),
            None => value.clone(),
        },
    }
}

fn sanitize_map(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| (key.clone(), sanitize(value)))
        .collect()
}

/// Returns the object behind `value` if it should be treated as a mapping.
///
/// With `include_empty == false`, `{}` is not considered a mapping.
pub(crate) fn as_mapping(value: &Value, include_empty: bool) -> Option<&Map<String, Value>> {
    match value {
        Value::Object(map) if include_empty || !map.is_empty() => Some(map),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sanitize_scalars() {
        assert_eq!(sanitize(&json!("  x  ")), json!("x"));
        assert_eq!(sanitize(&json!(42)), json!(42));
        assert_eq!(sanitize(&json!(1.5)), json!(1.5));
        assert_eq!(sanitize(&json!(true)), json!(true));
        assert_eq!(sanitize(&Value::Null), Value::Null);
    }

    #[test]
    fn test_sanitize_whitespace_only_string() {
        assert_eq!(sanitize(&json!(" \t\n ")), json!(""));
    }

    #[test]
    fn test_sanitize_keeps_inner_whitespace() {
        assert_eq!(sanitize(&json!("  John   Smith ")), json!("John   Smith"));
    }

    #[test]
    fn test_sanitize_nested() {
        let input = json!({
            "name": "  John  ",
            "age": 30,
            "tags": ["  a ", "b"],
            "address": {"city": " Paris ", "zip": null}
        });
        let expected = json!({
            "name": "John",
            "age": 30,
            "tags": ["a", "b"],
            "address": {"city": "Paris", "zip": null}
        });
        assert_eq!(sanitize(&input), expected);
    }

    #[test]
    fn test_sanitize_preserves_empty_containers() {
        let input = json!({"list": [], "obj": {}, "nested": [[], {}]});
        assert_eq!(sanitize(&input), input);
        assert_eq!(sanitize(&json!({})), json!({}));
        assert_eq!(sanitize(&json!([])), json!([]));
    }

    #[test]
    fn test_sanitize_does_not_touch_keys() {
        let input = json!({" padded ": " value "});
        assert_eq!(sanitize(&input), json!({" padded ": "value"}));
    }

    #[test]
    fn test_sanitize_preserves_key_order() {
        let input = json!({"z": " 1 ", "a": " 2 ", "m": " 3 "});
        let output = sanitize(&input);
        let keys: Vec<&str> = output
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_sanitize_leaves_input_untouched() {
        let input = json!({"name": "  John  "});
        let _ = sanitize(&input);
        assert_eq!(input, json!({"name": "  John  "}));
    }

    #[test]
    fn test_as_mapping() {
        assert!(as_mapping(&json!({}), true).is_some());
        assert!(as_mapping(&json!({}), false).is_none());
        assert!(as_mapping(&json!({"a": 1}), false).is_some());
        assert!(as_mapping(&Value::Null, true).is_none());
        assert!(as_mapping(&json!([]), true).is_none());
    }
}
