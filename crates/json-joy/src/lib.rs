//! json-joy - JSON Patch (RFC 6902 plus string, boolean and counter
//! extensions) over the [`json_joy_util::JsonValue`] document model.
//!
//! Pointer handling lives in `json-joy-json-pointer`; this crate decodes,
//! validates and applies patches, and backs the `json-patch` and
//! `json-pointer` command-line tools.

pub mod json_cli;
pub mod json_patch;
