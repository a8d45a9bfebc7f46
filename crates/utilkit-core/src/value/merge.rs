//! Merging operands into a base sequence or mapping
//!
//! The base is the accumulator. A mapping base is overlaid in place, so its
//! existing entries keep their position. A sequence base is replaced by a
//! freshly built concatenation of itself and the operands.

use super::kind::{ValueKind, classify};
use crate::utils::data::is_empty;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// How mapping operands are laid over a mapping base
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MergeMode {
    /// Top-level keys of later operands replace earlier values
    #[default]
    Shallow,
    /// Nested mappings are merged key by key; everything else is replaced
    Deep,
}

/// Operand after classification
#[derive(Debug)]
enum Operand {
    Sequence(Vec<Value>),
    Mapping(Map<String, Value>),
    /// Non-empty scalar, treated as a one-element sequence
    Wrapped(Value),
}

fn queue<I>(operands: I) -> Vec<Operand>
where
    I: IntoIterator<Item = Value>,
{
    operands
        .into_iter()
        .filter_map(|operand| match operand {
            Value::Array(items) if items.is_empty() => None,
            Value::Array(items) => Some(Operand::Sequence(items)),
            Value::Object(map) if map.is_empty() => None,
            Value::Object(map) => Some(Operand::Mapping(map)),
            scalar if is_empty(Some(&scalar)) => None,
            scalar => Some(Operand::Wrapped(scalar)),
        })
        .collect()
}

/// Merge `operands` into `base` and hand the base back
///
/// - sequence base: sequence operands are spliced onto the end, a mapping
///   operand is appended as one element, non-empty scalars are appended
/// - mapping base: mapping operands overlay the base in argument order, the
///   last write wins; anything else is ignored
/// - any other base is returned untouched
///
/// `null` and `""` operands, as well as empty containers, contribute nothing.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use utilkit_core::value::merge::extend;
///
/// let mut base = json!([1, 2]);
/// extend(&mut base, [json!([3, 4]), json!(5)]);
/// assert_eq!(base, json!([1, 2, 3, 4, 5]));
/// ```
pub fn extend<I>(base: &mut Value, operands: I) -> &mut Value
where
    I: IntoIterator<Item = Value>,
{
    extend_with(base, operands, MergeMode::Shallow)
}

/// Like [`extend`], but nested mappings are merged recursively
pub fn extend_deep<I>(base: &mut Value, operands: I) -> &mut Value
where
    I: IntoIterator<Item = Value>,
{
    extend_with(base, operands, MergeMode::Deep)
}

pub fn extend_with<I>(base: &mut Value, operands: I, mode: MergeMode) -> &mut Value
where
    I: IntoIterator<Item = Value>,
{
    let kind = classify(base);
    if !kind.is_container() {
        log::debug!("extend: base is not a container, leaving it unchanged");
        return base;
    }

    let queued = queue(operands);
    log::debug!("extend: merging {} operand(s) into {:?} base", queued.len(), kind);

    match (kind, &mut *base) {
        (ValueKind::Sequence, Value::Array(items)) => concat_into(items, queued),
        (ValueKind::Mapping, Value::Object(map)) => {
            for operand in queued {
                match operand {
                    Operand::Mapping(overlay) => overlay_into(map, overlay, mode),
                    other => log::trace!("extend: ignoring {:?} on mapping base", other),
                }
            }
        }
        _ => {}
    }
    base
}

fn concat_into(items: &mut Vec<Value>, queued: Vec<Operand>) {
    let extra: usize = queued
        .iter()
        .map(|operand| match operand {
            Operand::Sequence(values) => values.len(),
            _ => 1,
        })
        .sum();

    let mut joined = Vec::with_capacity(items.len() + extra);
    joined.append(items);
    for operand in queued {
        match operand {
            Operand::Sequence(values) => joined.extend(values),
            Operand::Mapping(map) => joined.push(Value::Object(map)),
            Operand::Wrapped(value) => joined.push(value),
        }
    }
    *items = joined;
}

fn overlay_into(base: &mut Map<String, Value>, overlay: Map<String, Value>, mode: MergeMode) {
    for (key, value) in overlay {
        match (mode, value) {
            (MergeMode::Deep, Value::Object(nested)) => match base.get_mut(&key) {
                Some(Value::Object(existing)) => overlay_into(existing, nested, mode),
                _ => {
                    base.insert(key, Value::Object(nested));
                }
            },
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
