//! Runtime classification of nested values
//!
//! Path resolution and merging both dispatch on the shape of a value. That
//! decision is made once here and handed out as a [`ValueKind`].

use serde_json::Value;

/// Shape of a value as seen by the path and merge operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Ordered, index-addressable container (`Value::Array`)
    Sequence,
    /// Key/value container (`Value::Object`)
    Mapping,
    /// Anything else, `null` included
    Scalar,
    /// No value at all
    Absent,
}

impl ValueKind {
    pub fn is_container(self) -> bool {
        matches!(self, ValueKind::Sequence | ValueKind::Mapping)
    }
}

/// Classify a value
///
/// # Examples
/// ```
/// use serde_json::json;
/// use utilkit_core::value::kind::{classify, ValueKind};
/// assert_eq!(classify(&json!([1, 2])), ValueKind::Sequence);
/// assert_eq!(classify(&json!(null)), ValueKind::Scalar);
/// ```
pub fn classify(value: &Value) -> ValueKind {
    match value {
        Value::Array(_) => ValueKind::Sequence,
        Value::Object(_) => ValueKind::Mapping,
        _ => ValueKind::Scalar,
    }
}

pub fn classify_opt(value: Option<&Value>) -> ValueKind {
    value.map_or(ValueKind::Absent, classify)
}

pub fn is_sequence(value: &Value) -> bool {
    classify(value) == ValueKind::Sequence
}

/// True only for plain key/value containers, never for arrays or `null`
pub fn is_mapping(value: &Value) -> bool {
    classify(value) == ValueKind::Mapping
}

pub fn is_iterable_container(value: &Value) -> bool {
    classify(value).is_container()
}
