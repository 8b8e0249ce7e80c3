use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub fn parse_json_value<T: DeserializeOwned>(value: Value) -> Result<T, serde_json::Error> {
    serde_json::from_value(value)
}

pub fn to_json_value<T: Serialize>(value: T) -> Result<Value, serde_json::Error> {
    serde_json::to_value(value)
}

/// Parses a bare text column as a unit enum variant, e.g. `Manhattan`.
pub fn parse_json_variant<T: DeserializeOwned>(text: &str) -> Result<T, serde_json::Error> {
    serde_json::from_value(Value::String(text.to_string()))
}
