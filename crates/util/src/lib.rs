//! json-joy-util - JSON value model and utilities for json-joy
//!
//! Provides the [`JsonValue`] document representation shared by the
//! pointer and patch crates, along with deep copy and deep equality.

pub mod json_clone;
pub mod json_equal;
pub mod value;

// Re-exports for convenience
pub use json_clone::clone;
pub use json_equal::deep_equal;
pub use value::{JsonObject, JsonValue};
