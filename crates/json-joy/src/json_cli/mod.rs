//! `json-cli` - command-line tools for JSON Patch and JSON Pointer.
//!
//! Provides the core logic used by the binary entry points, which call
//! [`run`] with their first argument and stdin:
//! - `json-patch`  - apply a JSON Patch to a document
//! - `json-pointer` - look up a JSON Pointer in a document

use std::io::Read;

use json_joy_json_pointer::{get, parse_json_pointer, JsonPointerError};
use json_joy_util::JsonValue;
use thiserror::Error;

use crate::json_patch::{ApplyError, ApplyPatchOptions, DecodeError, DecodeOptions, Patch};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("First argument must be {0}.")]
    MissingArgument(&'static str),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Decode(#[from] DecodeError),
    #[error("{0}")]
    Apply(#[from] ApplyError),
    #[error("{0}")]
    Pointer(#[from] JsonPointerError),
}

// ── Entry point ───────────────────────────────────────────────────────────

/// The tools backed by this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `json-patch '<patch>'`
    Patch,
    /// `json-pointer '<pointer>'`
    Pointer,
}

impl Command {
    fn argument(self) -> &'static str {
        match self {
            Command::Patch => "a JSON patch array",
            Command::Pointer => "a JSON Pointer",
        }
    }
}

/// Read a document from `input` and run `command` on it with `arg`.
pub fn run<R: Read>(command: Command, arg: Option<&str>, mut input: R) -> Result<String, CliError> {
    let arg = arg.ok_or(CliError::MissingArgument(command.argument()))?;
    let mut doc = String::new();
    input.read_to_string(&mut doc)?;
    log::debug!("{command:?}: {} byte document, argument {arg:?}", doc.len());
    match command {
        Command::Patch => apply_json_patch(doc.trim(), arg),
        Command::Pointer => lookup_pointer(doc.trim(), arg),
    }
}

// ── json-patch ────────────────────────────────────────────────────────────

/// Apply a JSON Patch (RFC 6902) to a document.
///
/// `doc_json`: the document as a JSON string.
/// `patch_json`: the patch operations as a JSON array string.
///
/// Returns the patched document as a pretty-printed JSON string.
pub fn apply_json_patch(doc_json: &str, patch_json: &str) -> Result<String, CliError> {
    let mut doc: JsonValue = serde_json::from_str(doc_json)?;
    let raw: JsonValue = serde_json::from_str(patch_json)?;
    let patch = Patch::from_json(&raw, &DecodeOptions::default())?;
    patch.apply(&mut doc, &ApplyPatchOptions::default())?;
    Ok(serde_json::to_string_pretty(&doc)?)
}

// ── json-pointer ──────────────────────────────────────────────────────────

/// Look up a JSON Pointer (RFC 6901) in a document.
///
/// `doc_json`: the document as a JSON string.
/// `pointer`: the JSON Pointer string (e.g., `/foo/bar`).
///
/// Returns the found value as a pretty-printed JSON string. Lookup failures
/// display as `NOT_FOUND`, `INVALID_INDEX` or `POINTER_INVALID`.
pub fn lookup_pointer(doc_json: &str, pointer: &str) -> Result<String, CliError> {
    let doc: JsonValue = serde_json::from_str(doc_json)?;
    let path = parse_json_pointer(pointer)?;
    let val = get(&doc, &path)?;
    Ok(serde_json::to_string_pretty(val)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────
