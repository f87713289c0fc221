use crate::types::END_OF_ARRAY;
use crate::JsonPointerError;

/// Unescapes a JSON Pointer path component.
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // ~1 first, so that "~01" decodes to "~1" and not "/"
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a JSON Pointer path component.
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Validate a JSON Pointer string: it must be empty or start with `/`.
pub fn validate_json_pointer(pointer: &str) -> Result<(), JsonPointerError> {
    if pointer.is_empty() || pointer.starts_with('/') {
        Ok(())
    } else {
        Err(JsonPointerError::PointerInvalid)
    }
}

/// Parse a JSON Pointer string into path components.
pub fn parse_json_pointer(pointer: &str) -> Result<Vec<String>, JsonPointerError> {
    validate_json_pointer(pointer)?;
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    Ok(pointer[1..].split('/').map(unescape_component).collect())
}

/// Format path components into a JSON Pointer string.
pub fn format_json_pointer(path: &[String]) -> String {
    let mut out = String::new();
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}

/// Check if a path points to the root value.
pub fn is_root(path: &[String]) -> bool {
    path.is_empty()
}

/// Check if `parent` is a proper prefix of `child`.
pub fn is_child(parent: &[String], child: &[String]) -> bool {
    parent.len() < child.len() && child[..parent.len()] == *parent
}

/// Check if two paths are equal.
pub fn is_path_equal(p1: &[String], p2: &[String]) -> bool {
    p1 == p2
}

/// Get the parent path of a given path.
pub fn parent(path: &[String]) -> Result<Vec<String>, JsonPointerError> {
    match path.split_last() {
        Some((_, init)) => Ok(init.to_vec()),
        None => Err(JsonPointerError::NoParent),
    }
}

/// Check if a string represents a valid non-negative integer array index.
///
/// Leading zeros are rejected, so every index has exactly one spelling.
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

/// Convert a token to an array index without any bounds check.
pub fn to_index(token: &str) -> Result<usize, JsonPointerError> {
    if !is_valid_index(token) {
        return Err(JsonPointerError::InvalidIndex);
    }
    token.parse().map_err(|_| JsonPointerError::InvalidIndex)
}

/// Resolve a token to the index of an existing element of an array of
/// length `len`.
pub fn parse_index(token: &str, len: usize) -> Result<usize, JsonPointerError> {
    let idx = to_index(token)?;
    if idx >= len {
        return Err(JsonPointerError::InvalidIndex);
    }
    Ok(idx)
}

/// Resolve a token to an insertion slot in an array of length `len`.
///
/// `-` and `len` both mean "append".
pub fn parse_insert_index(token: &str, len: usize) -> Result<usize, JsonPointerError> {
    if token == END_OF_ARRAY {
        return Ok(len);
    }
    let idx = to_index(token)?;
    if idx > len {
        return Err(JsonPointerError::InvalidIndex);
    }
    Ok(idx)
}
