//! JSON reshaping helpers
//!
//! xCAT answers with loosely shaped JSON. These helpers decode the few shapes
//! the client relies on into typed values and reject everything else with
//! [`XcatError::UnexpectedShape`].

use crate::error::{Result, XcatError};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

/// Indent used for pretty-printed output (three spaces)
pub const PRETTY_INDENT: &[u8] = b"   ";

/// Serialize `value` as JSON indented with [`PRETTY_INDENT`].
///
/// # Errors
///
/// Returns [`XcatError::SerializationError`] if `value` cannot be serialized.
pub fn to_pretty_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(PRETTY_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| XcatError::SerializationError(e.to_string()))?;
    Ok(out)
}

/// Re-indent an arbitrary JSON body.
///
/// # Errors
///
/// Returns [`XcatError::DeserializationError`] if `body` is not JSON.
pub fn prettify(body: &[u8]) -> Result<Vec<u8>> {
    let value: Value = serde_json::from_slice(body)?;
    to_pretty_vec(&value)
}

/// Decode `body` as a JSON object.
///
/// A `null` body decodes to an empty object.
///
/// # Errors
///
/// Fails if `body` is not JSON or is JSON of another type.
pub fn decode_object(body: &[u8]) -> Result<Map<String, Value>> {
    match serde_json::from_slice(body)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(XcatError::UnexpectedShape(format!(
            "expected a JSON object, got {}",
            kind(&other)
        ))),
    }
}

/// Node names (the top-level keys) of a node-range response.
///
/// # Errors
///
/// Fails if `body` is not a JSON object.
pub fn node_names(body: &[u8]) -> Result<Vec<String>> {
    Ok(decode_object(body)?.into_iter().map(|(name, _)| name).collect())
}

/// Join a JSON array of network names into a comma separated list.
///
/// `["net1","net2"]` becomes `net1,net2`; an empty array becomes an empty
/// string.
///
/// # Errors
///
/// Fails if `body` is not JSON, not an array, or holds a non-string element.
pub fn network_names_csv(body: &[u8]) -> Result<String> {
    let Value::Array(items) = serde_json::from_slice(body)? else {
        return Err(XcatError::UnexpectedShape(
            "expected a JSON array of network names".to_string(),
        ));
    };

    let names = items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            item.as_str().ok_or_else(|| {
                XcatError::UnexpectedShape(format!(
                    "network name at index {idx} is a {}, not a string",
                    kind(item)
                ))
            })
        })
        .collect::<Result<Vec<&str>>>()?;

    Ok(names.join(","))
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_array_pretty() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(to_pretty_vec(&empty).unwrap(), b"[]");
    }

    #[test]
    fn test_three_space_indent() {
        let out = to_pretty_vec(&json!({"n1": ["a", "b"]})).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\n   \"n1\": [\n      \"a\",\n      \"b\"\n   ]\n}"
        );
    }

    #[test]
    fn test_prettify_rejects_garbage() {
        assert!(matches!(
            prettify(b"<html>"),
            Err(XcatError::DeserializationError(_))
        ));
    }

    #[test]
    fn test_csv_joins_names() {
        assert_eq!(network_names_csv(br#"["net1","net2"]"#).unwrap(), "net1,net2");
        assert_eq!(network_names_csv(br#"["only"]"#).unwrap(), "only");
        assert_eq!(network_names_csv(b"[]").unwrap(), "");
    }

    #[test]
    fn test_csv_rejects_object() {
        let err = network_names_csv(br#"{"net1":{}}"#).unwrap_err();
        assert!(matches!(err, XcatError::UnexpectedShape(_)));
    }

    #[test]
    fn test_csv_rejects_non_string_element() {
        let err = network_names_csv(br#"["net1", 7]"#).unwrap_err();
        match err {
            XcatError::UnexpectedShape(msg) => assert!(msg.contains("index 1"), "{msg}"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_csv_rejects_invalid_json() {
        assert!(matches!(
            network_names_csv(b"not json"),
            Err(XcatError::DeserializationError(_))
        ));
    }

    #[test]
    fn test_node_names_from_object() {
        let body = br#"{"n1":{"groups":"all"},"n2":{"groups":"all"}}"#;
        assert_eq!(node_names(body).unwrap(), vec!["n1", "n2"]);
    }

    #[test]
    fn test_null_is_empty_object() {
        assert!(decode_object(b"null").unwrap().is_empty());
        assert!(node_names(b" null\n").unwrap().is_empty());
    }

    #[test]
    fn test_decode_object_rejects_array() {
        let err = decode_object(b"[1,2]").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unexpected response shape: expected a JSON object, got array"
        );
    }
}
