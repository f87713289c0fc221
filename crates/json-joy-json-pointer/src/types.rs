//! Type definitions for JSON Pointer.

/// A decoded reference token: an object key, or an array index in its
/// decimal string form.
pub type PathStep = String;

/// A JSON Pointer as a sequence of decoded reference tokens. The empty
/// path addresses the document root.
pub type Path = Vec<PathStep>;

/// Token meaning "one past the last array element". Only insertion
/// accepts it.
pub const END_OF_ARRAY: &str = "-";
