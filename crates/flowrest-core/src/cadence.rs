//! JSON-Cadence argument encoding.
//!
//! Scripts and transactions carry their source and arguments base64-encoded.
//! Each argument is a JSON object `{"type": ..., "value": ...}`; numeric
//! values travel as decimal strings.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Script;

/// A typed script or transaction argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Argument {
    String(String),
    Bool(bool),
    Int(String),
    Int64(String),
    UInt64(String),
    Fix64(String),
    Address(String),
    Array(Vec<Argument>),
    Dictionary(Vec<DictionaryEntry>),
    Optional(Option<Box<Argument>>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub key: Argument,
    pub value: Argument,
}

impl Argument {
    /// Build a `Dictionary` from key/value pairs, keeping their order.
    pub fn dictionary<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Argument>,
        V: Into<Argument>,
    {
        Self::Dictionary(
            entries
                .into_iter()
                .map(|(key, value)| DictionaryEntry {
                    key: key.into(),
                    value: value.into(),
                })
                .collect(),
        )
    }

    pub fn array<T: Into<Argument>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for Argument {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Argument {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for Argument {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Argument {
    fn from(n: i64) -> Self {
        Self::Int(n.to_string())
    }
}

/// Fix64 carries exactly eight fractional digits.
impl From<f64> for Argument {
    fn from(n: f64) -> Self {
        Self::Fix64(format!("{n:.8}"))
    }
}

impl<T: Into<Argument>> From<Option<T>> for Argument {
    fn from(value: Option<T>) -> Self {
        Self::Optional(value.map(|v| Box::new(v.into())))
    }
}

/// Base64 of the UTF-8 script source.
pub fn encode_script(source: &str) -> String {
    STANDARD.encode(source.as_bytes())
}

pub fn encode_argument(argument: &Argument) -> Result<String, CoreError> {
    let json = serde_json::to_vec(argument)
        .map_err(|e| CoreError::InvalidArgument(format!("encode argument: {e}")))?;
    Ok(STANDARD.encode(json))
}

pub fn encode_arguments(arguments: &[Argument]) -> Result<Vec<String>, CoreError> {
    arguments.iter().map(encode_argument).collect()
}

/// Inverse of [`encode_argument`].
pub fn decode_argument(encoded: &str) -> Result<Argument, CoreError> {
    let bytes = decode_base64(encoded)?;
    serde_json::from_slice(&bytes)
        .map_err(|e| CoreError::InvalidResponse(format!("decode JSON-Cadence argument: {e}")))
}

/// Decode a base64 JSON document (script results, event payloads) into an
/// untyped value.
pub fn decode_payload(encoded: &str) -> Result<serde_json::Value, CoreError> {
    let bytes = decode_base64(encoded)?;
    serde_json::from_slice(&bytes)
        .map_err(|e| CoreError::InvalidResponse(format!("decode base64 JSON payload: {e}")))
}

fn decode_base64(encoded: &str) -> Result<Vec<u8>, CoreError> {
    STANDARD
        .decode(encoded.trim())
        .map_err(|e| CoreError::InvalidResponse(format!("invalid base64: {e}")))
}

impl Script {
    /// Encode a script source and its arguments into a request.
    pub fn new(source: &str, arguments: &[Argument]) -> Result<Self, CoreError> {
        Ok(Self {
            script: encode_script(source),
            arguments: encode_arguments(arguments)?,
        })
    }
}
