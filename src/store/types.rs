//! Record types shared by the store, the HTTP surface, and the client.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Identifier assigned by the store. Starts at 1 and is never reused.
pub type TeaId = u64;

/// A stored tea record.
///
/// `name` and `price` hold whatever JSON the caller supplied, `null` included; fields the caller
/// never sent are omitted when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tea {
    /// Store-assigned identifier.
    pub id: TeaId,
    /// Free-form name.
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<Value>,
    /// Free-form price.
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Value>,
}

impl Tea {
    /// Render the name the way it appears in confirmation messages.
    ///
    /// Follows script string conversion: strings are written raw, a missing name reads
    /// `undefined`, arrays join their elements with commas and objects read `[object Object]`.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(value) => script_string(value),
            None => "undefined".to_string(),
        }
    }
}

/// Client-supplied fields for create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeaDraft {
    /// Name to store, if any.
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<Value>,
    /// Price to store, if any.
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Value>,
}

/// Keep an explicit `null` as `Some(Value::Null)`; only a missing field becomes `None`.
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn script_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => script_number(number),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => script_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn script_number(number: &Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    match number.as_f64() {
        Some(float) if float == 0.0 => "0".to_string(),
        Some(float) if float.fract() == 0.0 && float.abs() < 1e21 => format!("{float:.0}"),
        Some(float) => float.to_string(),
        None => number.to_string(),
    }
}
