//! Leaf helpers shared by the path and merge operations

use serde_json::Value;

/// Split a dotted key-path into its keys
///
/// The empty string has no keys. Empty keys between dots are kept.
///
/// # Examples
/// ```
/// use utilkit_core::utils::data::split_path;
/// assert_eq!(split_path("a.b.0"), vec!["a", "b", "0"]);
/// assert!(split_path("").is_empty());
/// ```
pub fn split_path(dotted: &str) -> Vec<&str> {
    if dotted.is_empty() {
        return Vec::new();
    }
    dotted.split('.').collect()
}

/// Flatten nested sequences into one, at any depth
///
/// Mappings and scalars are kept as single elements.
pub fn flatten<I>(values: I) -> Vec<Value>
where
    I: IntoIterator<Item = Value>,
{
    let mut flat = Vec::new();
    flatten_into(&mut flat, values);
    flat
}

fn flatten_into<I>(flat: &mut Vec<Value>, values: I)
where
    I: IntoIterator<Item = Value>,
{
    for value in values {
        match value {
            Value::Array(nested) => flatten_into(flat, nested),
            other => flat.push(other),
        }
    }
}

/// True for absent values, `null`, `""` and `[]`
///
/// An empty mapping is not considered empty.
pub fn is_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(_) => false,
    }
}
