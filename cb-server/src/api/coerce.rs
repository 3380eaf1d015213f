//! Deserialization helpers for fields clients send as either a number or a
//! numeric string (`"price": "50000"` and `"price": 50000` are both valid).
//! Non-numeric strings are rejected so NaN never reaches the store.

use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

/// Deserialize an `f64` from a JSON number or a numeric string.
pub fn flexible_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("expected a number, got {:?}", s))),
    }
}
