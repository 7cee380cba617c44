//! Lenient field deserializers for request bodies.
//!
//! HTML forms post every value as a string, so `"8.5"` must be accepted
//! wherever `8.5` is. Use with `#[serde(deserialize_with = "...")]`:
//!
//! ```
//! use placement_core::lenient;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Form {
//!     #[serde(deserialize_with = "lenient::number")]
//!     cgpa: f64,
//!     #[serde(default, deserialize_with = "lenient::optional_number")]
//!     department_id: Option<i64>,
//! }
//!
//! let form: Form = serde_json::from_str(r#"{"cgpa": "8.5", "department_id": ""}"#).unwrap();
//! assert_eq!(form.cgpa, 8.5);
//! assert_eq!(form.department_id, None);
//! ```

use std::fmt::Display;
use std::str::FromStr;

use serde::de::Error;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText<T> {
    Number(T),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
}

fn parse_number<T, E>(text: &str) -> Result<T, E>
where
    T: FromStr,
    T::Err: Display,
    E: Error,
{
    text.trim()
        .parse::<T>()
        .map_err(|e| E::custom(format!("invalid number {text:?}: {e}")))
}

/// A required number given either as a JSON number or a numeric string.
pub fn number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match NumberOrText::<T>::deserialize(deserializer)? {
        NumberOrText::Number(value) => Ok(value),
        NumberOrText::Text(text) => parse_number(&text),
    }
}

/// An optional number. `null` and blank strings both mean absent.
///
/// Pair with `#[serde(default)]` so a missing key is also accepted.
pub fn optional_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match Option::<NumberOrText<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(value)) => Ok(Some(value)),
        Some(NumberOrText::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(NumberOrText::Text(text)) => parse_number(&text).map(Some),
    }
}

/// A required string that may also arrive as a bare JSON number
/// (e.g. a roll number typed as `101`).
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => text,
        Scalar::Integer(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
    })
}
