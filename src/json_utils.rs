use serde::de::{self, Deserializer};
use serde::Deserialize;

// @module: Helpers for decoding host JSON

// Hosts store numbers read back from the database as strings ("10", "1")
#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

/// Deserialize an integer given either as a JSON number or as a string of
/// digits. Surrounding whitespace in the string form is ignored.
pub fn int_or_numeric_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(value) => Ok(value),
        IntOrString::Str(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("expected an integer, got \"{}\"", raw))),
    }
}
