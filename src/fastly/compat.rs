//! Wire compatibility helpers
//!
//! The Fastly API is loosely typed: integers sometimes arrive as strings,
//! booleans as `0`/`1`, `"true"` or `""`, and timestamps as empty strings. The
//! deserializers here accept all of those. On the way out, booleans are form
//! encoded as `"1"`/`"0"`.

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// A boolean that form encodes as `"1"` or `"0"`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Compatibool(pub bool);

impl From<bool> for Compatibool {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<Compatibool> for bool {
    fn from(value: Compatibool) -> Self {
        value.0
    }
}

impl Compatibool {
    pub fn as_str(self) -> &'static str {
        if self.0 {
            "1"
        } else {
            "0"
        }
    }
}

impl Serialize for Compatibool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Compatibool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        value_to_bool(&value)
            .map(|b| Compatibool(b.unwrap_or(false)))
            .map_err(de::Error::custom)
    }
}

fn value_to_u32(value: &Value) -> Result<Option<u32>, String> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .or_else(|| {
                n.as_f64()
                    .filter(|f| *f >= 0.0 && *f <= f64::from(u32::MAX) && f.fract() == 0.0)
                    .map(|f| f as u32)
            })
            .map(Some)
            .ok_or_else(|| format!("number {} is not a valid u32", n)),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| format!("string {:?} is not a valid u32", s)),
        Value::Bool(b) => Ok(Some(u32::from(*b))),
        other => Err(format!("expected an integer, found {}", other)),
    }
}

fn value_to_bool(value: &Value) -> Result<Option<bool>, String> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(*b)),
        Value::Number(n) => Ok(Some(n.as_f64().map(|f| f != 0.0).unwrap_or(false))),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "" => Ok(None),
            "1" | "t" | "true" => Ok(Some(true)),
            "0" | "f" | "false" => Ok(Some(false)),
            _ => Err(format!("string {:?} is not a valid boolean", s)),
        },
        other => Err(format!("expected a boolean, found {}", other)),
    }
}

/// Optional integer, accepting numbers and numeric strings
pub fn opt_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    value_to_u32(&value).map_err(de::Error::custom)
}

/// Integer that falls back to zero for `null` or empty strings
pub fn u32_weak<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    opt_u32(deserializer).map(|v| v.unwrap_or(0))
}

/// Optional boolean, accepting booleans, `0`/`1` and their string forms
pub fn opt_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    value_to_bool(&value).map_err(de::Error::custom)
}

/// Boolean that falls back to `false` for `null` or empty strings
pub fn bool_weak<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    opt_bool(deserializer).map(|v| v.unwrap_or(false))
}

/// Optional string that also accepts numbers and booleans
pub fn opt_string_weak<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(de::Error::custom(format!("expected a string, found {}", other))),
    }
}

/// String that falls back to empty for `null`
pub fn string_weak<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    opt_string_weak(deserializer).map(|v| v.unwrap_or_default())
}

/// RFC 3339 timestamp; `null` and `""` are `None`
pub fn opt_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => DateTime::parse_from_rfc3339(s.trim())
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| de::Error::custom(format!("invalid timestamp {:?}: {}", s, e))),
    }
}

/// Optional value of any type where `null` and `""` mean absent
pub fn opt_non_empty<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: de::DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        value => T::deserialize(value).map(Some).map_err(de::Error::custom),
    }
}

/// List that treats `null` as empty
pub fn vec_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Sort a list of resources by name, ascending
pub fn sort_by_name<T>(items: &mut [T], name: impl Fn(&T) -> &str) {
    items.sort_by(|a, b| name(a).cmp(name(b)));
}
