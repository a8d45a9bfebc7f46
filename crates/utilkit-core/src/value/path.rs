//! Key-path resolution over nested values
//!
//! A [`KeyPath`] is an ordered list of [`Segment`]s. Paths can be written as a
//! dotted string (`"a.b.0"`), as integer indices, or as any mix of the two
//! nested in lists; everything is flattened into one segment list up front.
//!
//! Resolution never fails loudly. Missing keys, out-of-range indices and
//! stepping into a scalar all end in `None`.

use super::kind::is_iterable_container;
use crate::utils::data::split_path;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

/// One step of a key-path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl Segment {
    /// Index this segment addresses in a sequence, if any
    ///
    /// Keys only count when they are the canonical decimal form of an index,
    /// so `"2"` addresses element 2 while `"02"` and `"-1"` address nothing.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Segment::Index(index) => Some(*index),
            Segment::Key(key) => key
                .parse::<usize>()
                .ok()
                .filter(|index| index.to_string() == *key),
        }
    }

    /// Key this segment addresses in a mapping
    pub fn as_key(&self) -> Cow<'_, str> {
        match self {
            Segment::Key(key) => Cow::Borrowed(key.as_str()),
            Segment::Index(index) => Cow::Owned(index.to_string()),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(key),
            Segment::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Segment::Key(key.to_string())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Segment::Key(key)
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

/// Unflattened path input
#[derive(Debug, Clone, PartialEq)]
pub enum PathPart {
    /// Dot-delimited keys, split on `.`
    Dotted(String),
    Index(usize),
    Many(Vec<PathPart>),
}

impl From<&str> for PathPart {
    fn from(dotted: &str) -> Self {
        PathPart::Dotted(dotted.to_string())
    }
}

impl From<String> for PathPart {
    fn from(dotted: String) -> Self {
        PathPart::Dotted(dotted)
    }
}

impl From<usize> for PathPart {
    fn from(index: usize) -> Self {
        PathPart::Index(index)
    }
}

impl<T: Into<PathPart>> From<Vec<T>> for PathPart {
    fn from(parts: Vec<T>) -> Self {
        PathPart::Many(parts.into_iter().map(Into::into).collect())
    }
}

/// Flattened, ordered list of segments
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<Segment>,
}

impl KeyPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten any mix of dotted strings, indices and nested part lists
    ///
    /// # Examples
    /// ```
    /// use utilkit_core::value::path::{KeyPath, PathPart, Segment};
    /// let path = KeyPath::from_parts([PathPart::from("a.b"), PathPart::from(1usize)]);
    /// assert_eq!(
    ///     path.segments(),
    ///     &[Segment::from("a"), Segment::from("b"), Segment::Index(1)]
    /// );
    /// ```
    pub fn from_parts<I, P>(parts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathPart>,
    {
        let mut path = Self::new();
        for part in parts {
            path.push_part(part.into());
        }
        path
    }

    /// Append a part, flattening it into segments
    pub fn push(mut self, part: impl Into<PathPart>) -> Self {
        self.push_part(part.into());
        self
    }

    fn push_part(&mut self, part: PathPart) {
        match part {
            // An empty string names the root rather than the "" key.
            PathPart::Dotted(dotted) => self
                .segments
                .extend(split_path(&dotted).into_iter().map(Segment::from)),
            PathPart::Index(index) => self.segments.push(Segment::Index(index)),
            PathPart::Many(parts) => {
                for part in parts {
                    self.push_part(part);
                }
            }
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl From<PathPart> for KeyPath {
    fn from(part: PathPart) -> Self {
        Self::from_parts([part])
    }
}

impl From<&str> for KeyPath {
    fn from(dotted: &str) -> Self {
        Self::from_parts([dotted])
    }
}

impl From<String> for KeyPath {
    fn from(dotted: String) -> Self {
        Self::from_parts([dotted])
    }
}

impl From<usize> for KeyPath {
    fn from(index: usize) -> Self {
        Self::from_parts([index])
    }
}

impl<T: Into<PathPart>> From<Vec<T>> for KeyPath {
    fn from(parts: Vec<T>) -> Self {
        Self::from_parts(parts)
    }
}

impl From<&KeyPath> for KeyPath {
    fn from(path: &KeyPath) -> Self {
        path.clone()
    }
}

/// Build a [`KeyPath`] from a mix of dotted strings, indices and part lists
///
/// ```
/// use serde_json::json;
/// use utilkit_core::key_path;
/// use utilkit_core::value::path::get;
///
/// let doc = json!({"a": [1, 2, 3]});
/// assert_eq!(get(&doc, key_path!("a", 1usize)), Some(&json!(2)));
/// ```
#[macro_export]
macro_rules! key_path {
    ($($part:expr),* $(,)?) => {{
        let parts: ::std::vec::Vec<$crate::value::path::PathPart> =
            vec![$($crate::value::path::PathPart::from($part)),*];
        $crate::value::path::KeyPath::from_parts(parts)
    }};
}

fn step<'a>(value: &'a Value, segment: &Segment) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment.as_key().as_ref()),
        Value::Array(items) => segment.as_index().and_then(|index| items.get(index)),
        _ => None,
    }
}

fn step_mut<'a>(value: &'a mut Value, segment: &Segment) -> Option<&'a mut Value> {
    match value {
        Value::Object(map) => map.get_mut(segment.as_key().as_ref()),
        Value::Array(items) => segment.as_index().and_then(move |index| items.get_mut(index)),
        _ => None,
    }
}

/// Resolve an already flattened path
///
/// Unlike [`get`], a scalar root is accepted and resolves only for the empty
/// path.
pub fn resolve<'a>(root: &'a Value, path: &KeyPath) -> Option<&'a Value> {
    let mut current = root;
    for (depth, segment) in path.segments().iter().enumerate() {
        match step(current, segment) {
            Some(next) => current = next,
            None => {
                log::trace!("path '{}' ends at segment {} ('{}')", path, depth, segment);
                return None;
            }
        }
    }
    Some(current)
}

/// Look up the value at `path`
///
/// Returns `None` when `container` is not a sequence or mapping, or when any
/// segment along the way is missing. An empty path yields the container.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use utilkit_core::value::path::get;
/// let doc = json!({"a": {"b": {"c": 1}}});
/// assert_eq!(get(&doc, "a.b.c"), Some(&json!(1)));
/// assert_eq!(get(&doc, "a.b.x"), None);
/// ```
pub fn get<'a>(container: &'a Value, path: impl Into<KeyPath>) -> Option<&'a Value> {
    if !is_iterable_container(container) {
        return None;
    }
    resolve(container, &path.into())
}

pub fn get_mut<'a>(container: &'a mut Value, path: impl Into<KeyPath>) -> Option<&'a mut Value> {
    if !is_iterable_container(container) {
        return None;
    }
    let path = path.into();
    let mut current = container;
    for segment in path.segments() {
        current = step_mut(current, segment)?;
    }
    Some(current)
}

/// Whether anything is stored at `path`
///
/// A stored `null` counts as present.
pub fn has(container: &Value, path: impl Into<KeyPath>) -> bool {
    get(container, path).is_some()
}

/// Remove a single key or index from `container`
///
/// Keys address sequences the same way [`get`] does, so `"1"` and `1` both
/// name element 1. Sequences lose the element at the index and close the gap;
/// mappings drop the key and keep the order of the remaining entries.
/// Anything else is left alone. The removed value is returned.
pub fn unset(container: &mut Value, key: impl Into<Segment>) -> Option<Value> {
    let key = key.into();
    match container {
        Value::Array(items) => match key.as_index() {
            Some(index) if index < items.len() => Some(items.remove(index)),
            _ => None,
        },
        Value::Object(map) => map.shift_remove(key.as_key().as_ref()),
        _ => None,
    }
}
