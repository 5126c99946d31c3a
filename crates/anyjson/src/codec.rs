//! Conversion to and from JSON text.
//!
//! Tokenizing and printing are delegated to `serde_json`. Parsing goes
//! through the host tree ([`Value::from_native`]), accepts a bare scalar at
//! the root, and keeps explicit `null` members. Serialization comes in two
//! [`SerializeMode`]s and yields `None` when the tree holds a NaN or infinite
//! number.
//!
//! `Value` also implements `serde::Serialize` / `Deserialize` for use inside
//! other serde data. Structured decode tries, in order: null, bool, `i64`,
//! `u64`, `f64`, string, array, object. Structured encode drops `Null`
//! object members and fails on a NaN or infinite number.

use std::fmt;
use std::str::FromStr;

use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Error as _, Serialize, SerializeMap, Serializer};

use crate::error::{Result, ValueError};
use crate::number::{Number, NumberKind};
use crate::value::{Object, Value};

/// Whether serialization keeps explicit nulls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SerializeMode {
    /// Emit `null` members and elements as they are.
    #[default]
    Raw,
    /// Strip every `Null` object member and array element, at all depths.
    Compact,
}

impl Value {
    /// Parse JSON text.
    ///
    /// ```
    /// use anyjson::Value;
    ///
    /// let v = Value::parse(r#"{"list":["x","y"]}"#).unwrap();
    /// assert_eq!(v["list"][1], Value::from("y"));
    /// ```
    pub fn parse(text: &str) -> Result<Value> {
        let native: serde_json::Value = serde_json::from_str(text)?;
        Ok(Value::from_native(native))
    }

    /// Parse JSON bytes (UTF-8).
    pub fn parse_slice(bytes: &[u8]) -> Result<Value> {
        let native: serde_json::Value = serde_json::from_slice(bytes)?;
        Ok(Value::from_native(native))
    }

    fn wire_tree(&self, mode: SerializeMode) -> Option<serde_json::Value> {
        match mode {
            SerializeMode::Raw => self.to_native(),
            SerializeMode::Compact => self.to_compact_native(),
        }
    }

    /// Minified JSON bytes.
    pub fn serialize(&self, mode: SerializeMode) -> Option<Vec<u8>> {
        serde_json::to_vec(&self.wire_tree(mode)?).ok()
    }

    /// Minified JSON text.
    pub fn serialize_string(&self, mode: SerializeMode) -> Option<String> {
        serde_json::to_string(&self.wire_tree(mode)?).ok()
    }

    /// Indented JSON text.
    pub fn serialize_pretty(&self, mode: SerializeMode) -> Option<String> {
        serde_json::to_string_pretty(&self.wire_tree(mode)?).ok()
    }
}

impl FromStr for Value {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self> {
        Value::parse(s)
    }
}

impl fmt::Display for Value {
    /// Pretty-printed raw JSON.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.serialize_pretty(SerializeMode::Raw) {
            Some(text) => f.write_str(&text),
            None => f.write_str("<invalid JSON value>"),
        }
    }
}

// ============================================================================
// Structured encode
// ============================================================================

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !self.is_finite() {
            return Err(S::Error::custom(format!(
                "non-finite number {} cannot be encoded",
                self
            )));
        }
        match self.kind() {
            NumberKind::Float32 | NumberKind::Float64 => serializer.serialize_f64(self.to_f64()),
            NumberKind::UInt64 => serializer.serialize_u64(self.to_u64()),
            _ => serializer.serialize_i64(self.to_i64()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => serializer.collect_seq(arr),
            Value::Object(map) => {
                let members = map.iter().filter(|(_, v)| !v.is_null());
                let mut out = serializer.serialize_map(None)?;
                for (k, v) in members {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}

// ============================================================================
// Structured decode
// ============================================================================

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any JSON value")
    }

    fn visit_unit<E>(self) -> std::result::Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> std::result::Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Deserialize::deserialize(deserializer)
    }

    fn visit_bool<E>(self, value: bool) -> std::result::Result<Value, E> {
        Ok(Value::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> std::result::Result<Value, E> {
        Ok(Value::Number(Number::from(value)))
    }

    fn visit_u64<E>(self, value: u64) -> std::result::Result<Value, E> {
        Ok(Value::Number(integer_number(value)))
    }

    /// An integral float token decodes as the first integer width that holds
    /// it exactly.
    fn visit_f64<E>(self, value: f64) -> std::result::Result<Value, E> {
        let integral = value.fract() == 0.0;
        let number = if integral && value >= i64::MIN as f64 && value < i64::MAX as f64 {
            Number::from(value as i64)
        } else if integral && value >= 0.0 && value < u64::MAX as f64 {
            Number::from(value as u64)
        } else {
            Number::from(value)
        };
        Ok(Value::Number(number))
    }

    fn visit_str<E>(self, value: &str) -> std::result::Result<Value, E> {
        Ok(Value::String(value.to_string()))
    }

    fn visit_string<E>(self, value: String) -> std::result::Result<Value, E> {
        Ok(Value::String(value))
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut arr = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(elem) = seq.next_element()? {
            arr.push(elem);
        }
        Ok(Value::Array(arr))
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut members = Object::new();
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            members.insert(key, value);
        }
        Ok(Value::Object(members))
    }
}

/// `i64` when the magnitude fits, `u64` otherwise.
fn integer_number(value: u64) -> Number {
    match i64::try_from(value) {
        Ok(i) => Number::from(i),
        Err(_) => Number::from(value),
    }
}
