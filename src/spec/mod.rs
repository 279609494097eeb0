//! Spec layer: operations.json schema + validated in-memory operations.
//!
//! This module is intentionally separate from record loading and rendering.
//! It owns:
//! - FieldPath (where a number lives inside a record)
//! - Function (which aggregate to compute)
//! - Ops spec (raw operations and their validation)

pub mod function;
pub mod ops;
pub mod path;

pub use function::Function;
pub use ops::{NameFilter, Operation, OpsSpec, RawOperation};
pub use path::{FieldPath, FieldSpec};
