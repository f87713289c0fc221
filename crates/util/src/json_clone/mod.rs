//! Deep copy of JSON values.

mod clone;

pub use clone::clone;
