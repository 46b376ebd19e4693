pub mod project;
pub mod testimonial;

use serde_json::Value;

/// Read a scalar text field. Non-empty strings and non-zero numbers count as
/// present; everything else (null, bool, "", 0, arrays, objects) is absent.
pub(crate) fn text_field(obj: &Value, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// Read a list of strings. Non-arrays are empty; scalar entries are coerced,
/// nulls and nested structures are skipped.
pub(crate) fn list_field(obj: &Value, key: &str) -> Vec<String> {
    match obj.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}
