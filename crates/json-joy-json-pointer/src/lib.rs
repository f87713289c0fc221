//! JSON Pointer (RFC 6901) utilities.
//!
//! This crate implements helper functions for [JSON Pointer (RFC 6901)](https://tools.ietf.org/html/rfc6901)
//! over the [`JsonValue`](json_joy_util::JsonValue) document model.
//!
//! # Example
//!
//! ```
//! use json_joy_json_pointer::{parse_json_pointer, format_json_pointer, get};
//! use json_joy_util::JsonValue;
//!
//! // Parse a JSON pointer string into path components
//! let path = parse_json_pointer("/foo/bar").unwrap();
//! assert_eq!(path, vec!["foo".to_string(), "bar".to_string()]);
//!
//! // Format path components back to a JSON pointer string
//! let pointer = format_json_pointer(&path);
//! assert_eq!(pointer, "/foo/bar");
//!
//! // Get a value from a JSON document
//! let doc = JsonValue::from(serde_json::json!({"foo": {"bar": 42}}));
//! let val = get(&doc, &path).unwrap();
//! assert_eq!(val, &JsonValue::Number(42.0));
//! ```

use thiserror::Error;

mod get;
mod locate;
pub mod types;
mod util;

pub use get::{get, get_mut, resolve};
pub use locate::{locate, locate_mut};
pub use types::{Path, PathStep, END_OF_ARRAY};
pub use util::{
    escape_component, format_json_pointer, is_child, is_path_equal, is_root, is_valid_index,
    parent, parse_index, parse_insert_index, parse_json_pointer, to_index, unescape_component,
    validate_json_pointer,
};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum JsonPointerError {
    #[error("POINTER_INVALID")]
    PointerInvalid,
    #[error("NOT_FOUND")]
    NotFound,
    #[error("INVALID_INDEX")]
    InvalidIndex,
    #[error("NO_PARENT")]
    NoParent,
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_joy_util::JsonValue;
    use serde_json::json;

    fn v(value: serde_json::Value) -> JsonValue {
        value.into()
    }

    fn p(pointer: &str) -> Path {
        parse_json_pointer(pointer).unwrap()
    }

    #[test]
    fn test_unescape_component() {
        // No escapes needed
        assert_eq!(unescape_component("foo"), "foo");

        // Escape sequences
        assert_eq!(unescape_component("a~0b"), "a~b");
        assert_eq!(unescape_component("c~1d"), "c/d");
        assert_eq!(unescape_component("a~0b~1c"), "a~b/c");

        // Decode order: "~01" is an escaped "~" followed by "1"
        assert_eq!(unescape_component("~01"), "~1");
        assert_eq!(unescape_component("~1~1"), "//");
    }

    #[test]
    fn test_escape_component() {
        assert_eq!(escape_component("foo"), "foo");
        assert_eq!(escape_component("a~b"), "a~0b");
        assert_eq!(escape_component("c/d"), "c~1d");
        assert_eq!(escape_component("~1"), "~01");
        assert_eq!(escape_component("//"), "~1~1");
    }

    #[test]
    fn test_parse_json_pointer() {
        // Root
        assert_eq!(p(""), Vec::<String>::new());

        // Single empty component
        assert_eq!(p("/"), vec![""]);

        assert_eq!(p("/foo/bar"), vec!["foo", "bar"]);
        assert_eq!(p("/a~0b/c~1d"), vec!["a~b", "c/d"]);
        assert_eq!(p("/foo///"), vec!["foo", "", "", ""]);
        assert_eq!(p("/foo~1bar"), vec!["foo/bar"]);
    }

    #[test]
    fn test_parse_rejects_relative_pointer() {
        assert_eq!(parse_json_pointer("foo"), Err(JsonPointerError::PointerInvalid));
        assert_eq!(parse_json_pointer("asdf/adsf"), Err(JsonPointerError::PointerInvalid));
        assert!(validate_json_pointer("/ok").is_ok());
    }

    #[test]
    fn test_format_json_pointer() {
        // Root formats to "", never "/"
        assert_eq!(format_json_pointer(&[]), "");
        assert_eq!(format_json_pointer(&["".to_string()]), "/");
        assert_eq!(format_json_pointer(&["foo".to_string()]), "/foo");
        assert_eq!(
            format_json_pointer(&["a~b".to_string(), "c/d".to_string()]),
            "/a~0b/c~1d"
        );
        assert_eq!(format_json_pointer(&["foo/bar".to_string()]), "/foo~1bar");
    }

    #[test]
    fn test_is_root() {
        assert!(is_root(&[]));
        assert!(!is_root(&["foo".to_string()]));
    }

    #[test]
    fn test_is_child_and_parent() {
        let parent_path = p("/foo");
        let child = p("/foo/bar");
        assert!(is_child(&parent_path, &child));
        assert!(!is_child(&child, &parent_path));
        assert!(!is_child(&parent_path, &parent_path));
        assert!(is_path_equal(&child, &p("/foo/bar")));

        assert_eq!(parent(&child).unwrap(), parent_path);
        assert_eq!(parent(&[]), Err(JsonPointerError::NoParent));
    }

    #[test]
    fn test_is_valid_index() {
        assert!(is_valid_index("0"));
        assert!(is_valid_index("123"));
        assert!(!is_valid_index("-1"));
        assert!(!is_valid_index("+1"));
        assert!(!is_valid_index("1.5"));
        assert!(!is_valid_index("abc"));
        assert!(!is_valid_index(""));
        assert!(!is_valid_index("01"));
    }

    #[test]
    fn test_index_parsing_bounds() {
        assert_eq!(parse_index("2", 3), Ok(2));
        assert_eq!(parse_index("3", 3), Err(JsonPointerError::InvalidIndex));
        assert_eq!(parse_index("-", 3), Err(JsonPointerError::InvalidIndex));
        assert_eq!(parse_insert_index("3", 3), Ok(3));
        assert_eq!(parse_insert_index("-", 3), Ok(3));
        assert_eq!(parse_insert_index("4", 3), Err(JsonPointerError::InvalidIndex));
        assert_eq!(
            to_index("99999999999999999999999"),
            Err(JsonPointerError::InvalidIndex)
        );
    }

    #[test]
    fn test_get_scalar_root() {
        assert_eq!(get(&v(json!(123)), &[]), Ok(&v(json!(123))));
        assert_eq!(get(&v(json!(false)), &[]), Ok(&JsonValue::Bool(false)));
    }

    #[test]
    fn test_get_object_key() {
        let doc = v(json!({"foo": "bar"}));
        assert_eq!(get(&doc, &p("/foo")), Ok(&v(json!("bar"))));
        assert_eq!(get(&doc, &p("/missing")), Err(JsonPointerError::NotFound));
    }

    #[test]
    fn test_get_array_element() {
        let doc = v(json!([1, 2, 3]));
        assert_eq!(get(&doc, &p("/0")), Ok(&JsonValue::Number(1.0)));
        assert_eq!(get(&doc, &p("/2")), Ok(&JsonValue::Number(3.0)));
        assert_eq!(get(&doc, &p("/3")), Err(JsonPointerError::InvalidIndex));
        assert_eq!(get(&doc, &p("/-")), Err(JsonPointerError::InvalidIndex));
        assert_eq!(get(&doc, &p("/x")), Err(JsonPointerError::InvalidIndex));
    }

    #[test]
    fn test_get_through_scalar_is_not_found() {
        let doc = v(json!({"a": 123}));
        assert_eq!(get(&doc, &p("/a/b")), Err(JsonPointerError::NotFound));
    }

    #[test]
    fn test_get_explicit_null() {
        let doc = v(json!({"foo": null}));
        assert_eq!(get(&doc, &p("/foo")), Ok(&JsonValue::Null));
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut doc = v(json!({"a": {"b": [1, 2, 3]}}));
        *get_mut(&mut doc, &p("/a/b/1")).unwrap() = JsonValue::from("two");
        assert_eq!(doc, v(json!({"a": {"b": [1, "two", 3]}})));
        assert!(get_mut(&mut doc, &p("/a/c")).is_err());
    }

    #[test]
    fn test_resolve_root_is_empty() {
        let doc = v(json!({"foo": "bar"}));
        assert!(resolve(&doc, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_resolve_returns_every_step() {
        let doc = v(json!([1, ["a", [null, "abc"]]]));
        let values = resolve(&doc, &p("/1/1/1")).unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values[0], &v(json!(["a", [null, "abc"]])));
        assert_eq!(values[1], &v(json!([null, "abc"])));
        assert_eq!(values[2], &v(json!("abc")));
    }

    #[test]
    fn test_locate_root_has_no_parent() {
        let doc = v(json!({"foo": "bar"}));
        assert_eq!(locate(&doc, &[]), Ok(None));
    }

    #[test]
    fn test_locate_returns_parent_and_key() {
        let doc = v(json!({"foo": {"a": 1, "c": 2}}));
        let path = p("/foo/c");
        let (container, key) = locate(&doc, &path).unwrap().unwrap();
        assert_eq!(key, "c");
        assert_eq!(container, &v(json!({"a": 1, "c": 2})));
    }

    #[test]
    fn test_locate_in_array_does_not_check_last_token() {
        let doc = v(json!(["a", [1, 2, 3], "c"]));
        let path = p("/1/-");
        let (container, key) = locate(&doc, &path).unwrap().unwrap();
        assert_eq!(key, "-");
        assert_eq!(container, &v(json!([1, 2, 3])));
    }

    #[test]
    fn test_locate_errors() {
        let doc = v(json!({"q": {"bar": 2}}));
        assert_eq!(locate(&doc, &p("/a/b")), Err(JsonPointerError::NotFound));
        assert_eq!(locate(&doc, &p("/q/bar/x")), Err(JsonPointerError::NotFound));
        let doc = v(json!({"arr": [1]}));
        assert_eq!(locate(&doc, &p("/arr/5/x")), Err(JsonPointerError::InvalidIndex));
    }

    #[test]
    fn test_locate_mut_allows_array_growth() {
        let mut doc = v(json!({"a": [1, 2]}));
        let path = p("/a/1");
        let (container, key) = locate_mut(&mut doc, &path).unwrap().unwrap();
        let arr = container.as_array_mut().unwrap();
        let idx = parse_insert_index(key, arr.len()).unwrap();
        arr.insert(idx, JsonValue::Number(3.0));
        assert_eq!(doc, v(json!({"a": [1, 3, 2]})));
    }
}
