//! Utils module - Shared utilities and helpers
//!
//! Leaf helpers used by the value operations, plus the input, logging and
//! predicate utilities used around them.

/// Path splitting, flattening and emptiness checks
pub mod data;

/// Reading JSON input and environment settings
pub mod input;

/// Verbose and error output
pub mod logging;

/// Type and format predicates
pub mod predicates;

/// Case conversion
pub mod text;

/// Fixed-delay waiting
pub mod timing;
