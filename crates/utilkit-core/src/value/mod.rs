//! Nested value operations
//!
//! Everything here works on `serde_json::Value` trees and never fails: missing
//! data shows up as `None`, `false`, or an unchanged value.

/// Sequence / mapping / scalar classification
pub mod kind;

/// Merging operands into a base container
pub mod merge;

/// Key-path lookup, existence checks and removal
pub mod path;

pub use kind::{ValueKind, classify, is_iterable_container, is_mapping, is_sequence};
pub use merge::{MergeMode, extend, extend_deep, extend_with};
pub use path::{KeyPath, PathPart, Segment, get, get_mut, has, unset};
