//! Shared wire-format helpers: lenient scalars and collection shapes.
//!
//! Vultr v1 is loose about JSON types: ids and counts often arrive as decimal
//! strings, flags as `"yes"`/`"no"`, and empty collections as `[]` instead of
//! `{}`. The types here absorb that so the per-resource modules can declare
//! plain serde structs.

use std::collections::BTreeMap;

use serde::de::{DeserializeOwned, Error as DeError};
use serde::{Deserialize, Deserializer};
use serde_json::value::RawValue;

use crate::domain::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected JSON {expected} but got {actual}")]
    UnexpectedShape {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("response contains invalid identifier key: {key}")]
    InvalidIdKey { key: String },

    #[error("response contains an invalid value: {0}")]
    Validation(#[from] ValidationError),
}

/// Text value returned as either JSON string or JSON number.
///
/// For numbers, the raw JSON token is preserved to avoid formatting drift
/// (`10.00` remains `"10.00"` instead of becoming `"10.0"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportText(String);

impl TransportText {
    pub fn into_string(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for TransportText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Box<RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first().copied() {
            Some(b'"') => {
                let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
                Ok(Self(parsed))
            }
            Some(b'-' | b'0'..=b'9') => Ok(Self(token.to_owned())),
            _ => Err(D::Error::custom(
                "expected text field to be JSON string or number",
            )),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum LenientUint {
    Int(u64),
    String(String),
}

/// Unsigned integer returned as either JSON number or decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportUint(pub u64);

impl TransportUint {
    pub fn into_u32<E: DeError>(self) -> Result<u32, E> {
        u32::try_from(self.0).map_err(|_| E::custom(format!("integer out of range: {}", self.0)))
    }
}

impl<'de> Deserialize<'de> for TransportUint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match LenientUint::deserialize(deserializer)? {
            LenientUint::Int(value) => Ok(Self(value)),
            LenientUint::String(value) => value
                .trim()
                .parse::<u64>()
                .map(Self)
                .map_err(|_| D::Error::custom(format!("expected unsigned integer, got {value:?}"))),
        }
    }
}

/// Deserialize a `u32` from a JSON number or decimal string.
pub fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    TransportUint::deserialize(deserializer)?.into_u32()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum LenientFloat {
    Number(f64),
    String(String),
}

/// Float returned as either JSON number or decimal string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportFloat(pub f64);

impl<'de> Deserialize<'de> for TransportFloat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match LenientFloat::deserialize(deserializer)? {
            LenientFloat::Number(value) => Ok(Self(value)),
            LenientFloat::String(value) => value
                .trim()
                .parse::<f64>()
                .map(Self)
                .map_err(|_| D::Error::custom(format!("expected number, got {value:?}"))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum LenientBool {
    Bool(bool),
    Int(u64),
    String(String),
}

/// Flag returned as JSON boolean, `0`/`1`, or `"yes"`/`"no"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportBool(pub bool);

impl<'de> Deserialize<'de> for TransportBool {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match LenientBool::deserialize(deserializer)? {
            LenientBool::Bool(value) => Ok(Self(value)),
            LenientBool::Int(0) => Ok(Self(false)),
            LenientBool::Int(1) => Ok(Self(true)),
            LenientBool::Int(other) => Err(D::Error::custom(format!(
                "expected boolean flag, got {other}"
            ))),
            LenientBool::String(value) => match value.trim().to_ascii_lowercase().as_str() {
                "yes" | "true" | "1" => Ok(Self(true)),
                "no" | "false" | "0" => Ok(Self(false)),
                _ => Err(D::Error::custom(format!(
                    "expected boolean flag, got {value:?}"
                ))),
            },
        }
    }
}

/// Outbound boolean encoding used by every Vultr form parameter.
pub fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn shape_name(raw: &RawValue) -> &'static str {
    match raw.get().as_bytes().first().copied() {
        Some(b'{') => "object",
        Some(b'[') => "array",
        Some(b'"') => "string",
        Some(b't' | b'f') => "boolean",
        Some(b'n') => "null",
        _ => "number",
    }
}

/// Decode a single JSON object into `J`.
///
/// A JSON array is rejected even though serde would accept it for structs.
pub fn decode_object<J: DeserializeOwned>(json: &str) -> Result<J, TransportError> {
    let raw: Box<RawValue> = serde_json::from_str(json)?;
    match shape_name(&raw) {
        "object" => Ok(serde_json::from_str(raw.get())?),
        actual => Err(TransportError::UnexpectedShape {
            expected: "object",
            actual,
        }),
    }
}

/// Decode a JSON array of scalars into `Vec<J>`; any other body shape is an error.
pub fn decode_array<J: DeserializeOwned>(json: &str) -> Result<Vec<J>, TransportError> {
    let raw: Box<RawValue> = serde_json::from_str(json)?;
    match shape_name(&raw) {
        "array" => Ok(serde_json::from_str(raw.get())?),
        actual => Err(TransportError::UnexpectedShape {
            expected: "array",
            actual,
        }),
    }
}

/// Decode an id-keyed JSON object into an ordered map.
///
/// Values that are not JSON objects are skipped. An empty JSON array is read
/// as an empty collection; any other non-object body is an error.
pub fn decode_object_map<K, J, T>(
    json: &str,
    parse_key: impl Fn(&str) -> Option<K>,
    convert: impl Fn(J) -> Result<T, TransportError>,
) -> Result<BTreeMap<K, T>, TransportError>
where
    K: Ord,
    J: DeserializeOwned,
{
    let raw: Box<RawValue> = serde_json::from_str(json)?;
    match shape_name(&raw) {
        "object" => {}
        "array" if serde_json::from_str::<Vec<Box<RawValue>>>(raw.get())?.is_empty() => {
            return Ok(BTreeMap::new());
        }
        actual => {
            return Err(TransportError::UnexpectedShape {
                expected: "object",
                actual,
            });
        }
    }

    let object: BTreeMap<String, Box<RawValue>> = serde_json::from_str(raw.get())?;
    let mut entries = BTreeMap::new();
    for (key, value) in object {
        if shape_name(&value) != "object" {
            continue;
        }
        let id = parse_key(&key).ok_or_else(|| TransportError::InvalidIdKey { key: key.clone() })?;
        let parsed: J = serde_json::from_str(value.get())?;
        entries.insert(id, convert(parsed)?);
    }
    Ok(entries)
}

/// Decode a JSON array of objects, skipping elements that are not objects.
pub fn decode_object_list<J, T>(
    json: &str,
    convert: impl Fn(J) -> Result<T, TransportError>,
) -> Result<Vec<T>, TransportError>
where
    J: DeserializeOwned,
{
    let raw: Box<RawValue> = serde_json::from_str(json)?;
    let actual = shape_name(&raw);
    if actual != "array" {
        return Err(TransportError::UnexpectedShape {
            expected: "array",
            actual,
        });
    }

    let items: Vec<Box<RawValue>> = serde_json::from_str(raw.get())?;
    items
        .into_iter()
        .filter(|item| shape_name(item) == "object")
        .map(|item| convert(serde_json::from_str(item.get())?))
        .collect()
}

/// Parse a numeric id-map key (`"576965"`).
pub fn numeric_key(key: &str) -> Option<u64> {
    key.trim().parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Item {
        name: String,
    }

    fn by_name(item: Item) -> Result<String, TransportError> {
        Ok(item.name)
    }

    #[test]
    fn text_preserves_numeric_token_and_unquotes_strings() {
        let parsed: TransportText = serde_json::from_str("10.00").unwrap();
        assert_eq!(parsed.into_string(), "10.00");

        let parsed: TransportText = serde_json::from_str(r#""-5519.11""#).unwrap();
        assert_eq!(parsed.into_string(), "-5519.11");

        assert!(serde_json::from_str::<TransportText>("true").is_err());
    }

    #[test]
    fn uint_accepts_numbers_and_decimal_strings() {
        let parsed: TransportUint = serde_json::from_str("28").unwrap();
        assert_eq!(parsed, TransportUint(28));

        let parsed: TransportUint = serde_json::from_str(r#"" 576965 ""#).unwrap();
        assert_eq!(parsed, TransportUint(576965));

        assert!(serde_json::from_str::<TransportUint>(r#""abc""#).is_err());
        assert!(serde_json::from_str::<TransportUint>("-1").is_err());
    }

    #[test]
    fn float_accepts_numbers_and_decimal_strings() {
        let parsed: TransportFloat = serde_json::from_str("131.512").unwrap();
        assert_eq!(parsed, TransportFloat(131.512));

        let parsed: TransportFloat = serde_json::from_str(r#""1000""#).unwrap();
        assert_eq!(parsed, TransportFloat(1000.0));
    }

    #[test]
    fn bool_accepts_json_booleans_and_yes_no() {
        for (json, expected) in [
            ("true", true),
            ("false", false),
            ("1", true),
            ("0", false),
            (r#""yes""#, true),
            (r#""no""#, false),
            (r#""YES""#, true),
        ] {
            let parsed: TransportBool = serde_json::from_str(json).unwrap();
            assert_eq!(parsed, TransportBool(expected), "json: {json}");
        }
        assert!(serde_json::from_str::<TransportBool>(r#""maybe""#).is_err());
    }

    #[test]
    fn yes_no_encodes_flags() {
        assert_eq!(yes_no(true), "yes");
        assert_eq!(yes_no(false), "no");
    }

    #[test]
    fn object_map_skips_non_object_values() {
        let json = r#"{ "1": { "name": "first" }, "2": "not an object" }"#;
        let parsed = decode_object_map(json, numeric_key, by_name).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.get(&1).map(String::as_str), Some("first"));
    }

    #[test]
    fn object_map_reads_empty_array_as_empty() {
        let parsed = decode_object_map("[]", numeric_key, by_name).unwrap();
        assert!(parsed.is_empty());

        let err = decode_object_map("[1]", numeric_key, by_name).unwrap_err();
        assert!(matches!(
            err,
            TransportError::UnexpectedShape {
                expected: "object",
                actual: "array"
            }
        ));
    }

    #[test]
    fn object_map_rejects_non_numeric_keys() {
        let json = r#"{ "abc": { "name": "first" } }"#;
        let err = decode_object_map(json, numeric_key, by_name).unwrap_err();
        match err {
            TransportError::InvalidIdKey { key } => assert_eq!(key, "abc"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn object_map_fails_on_missing_required_field() {
        let json = r#"{ "1": { "label": "no name" } }"#;
        let err = decode_object_map(json, numeric_key, by_name).unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }

    #[test]
    fn object_list_skips_scalar_elements() {
        let json = r#"[ { "name": "kept" }, 42 ]"#;
        let parsed = decode_object_list(json, by_name).unwrap();
        assert_eq!(parsed, vec!["kept".to_owned()]);
    }

    #[test]
    fn object_list_rejects_object_body() {
        let err = decode_object_list(r#"{ "name": "x" }"#, by_name).unwrap_err();
        assert!(matches!(
            err,
            TransportError::UnexpectedShape {
                expected: "array",
                actual: "object"
            }
        ));
    }

    #[test]
    fn array_rejects_non_array_bodies() {
        let parsed: Vec<TransportUint> = decode_array("[1, \"2\"]").unwrap();
        assert_eq!(parsed, vec![TransportUint(1), TransportUint(2)]);

        let err = decode_array::<TransportUint>("null").unwrap_err();
        assert!(matches!(
            err,
            TransportError::UnexpectedShape {
                expected: "array",
                actual: "null"
            }
        ));
    }

    #[test]
    fn decode_object_rejects_arrays() {
        let err = decode_object::<Item>(r#"["x"]"#).unwrap_err();
        assert!(matches!(err, TransportError::UnexpectedShape { .. }));
    }
}
