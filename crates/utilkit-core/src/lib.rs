//! # utilkit-core
//!
//! Path access, merging and small predicates over nested `serde_json` values.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use utilkit_core::prelude::*;
//!
//! let mut doc = json!({"user": {"tags": ["a", "b"]}});
//!
//! assert_eq!(get(&doc, "user.tags.1"), Some(&json!("b")));
//! assert!(has(&doc, key_path!("user", "tags", 0usize)));
//!
//! unset(&mut doc, "user");
//! extend(&mut doc, [json!({"id": 7})]);
//! assert_eq!(doc, json!({"id": 7}));
//! ```
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │          Value Layer                │  classify, get/has/unset, extend
//! ├─────────────────────────────────────┤
//! │        Storage Layer                │  TOML configuration
//! ├─────────────────────────────────────┤
//! │         Utils Layer                 │  splitting, predicates, text, input
//! └─────────────────────────────────────┘
//! ```
//!
//! Value operations never return errors. [`AppError`] covers the edges:
//! reading input, configuration and command line arguments.

pub use error::AppError;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::Result;
    pub use crate::error::AppError;
    pub use crate::key_path;

    pub use crate::value::kind::{ValueKind, classify, is_iterable_container, is_mapping, is_sequence};
    pub use crate::value::merge::{MergeMode, extend, extend_deep, extend_with};
    pub use crate::value::path::{KeyPath, PathPart, Segment, get, get_mut, has, unset};

    pub use crate::storage::config::Config;
}

/// Value layer - classification, key-path access and merging.
pub mod value;

/// Storage layer - configuration persistence.
pub mod storage;

/// Utilities layer - shared helpers and common functionality.
///
/// - [`utils::data`]: path splitting, flattening, emptiness
/// - [`utils::predicates`]: type and format checks
/// - [`utils::text`]: case conversion
/// - [`utils::input`]: JSON input and environment settings
/// - [`utils::timing`]: fixed-delay waiting
pub mod utils;

/// Error handling - hierarchical error system.
pub mod error;

/// Convenient Result type alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
