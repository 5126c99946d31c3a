//! Bridge between [`Value`] and the host's heterogeneous data.
//!
//! The host tree is `serde_json::Value`, the representation every JSON-aware
//! Rust library already speaks. Type-erased input (`&dyn Any`) is also
//! accepted; anything not recognized there becomes `Null`.

use std::any::Any;
use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use serde_json::{Map, Value as JsonValue};

use crate::number::Number;
use crate::value::{Object, Value};

impl Value {
    /// Build a value from a `serde_json` tree. Numbers classify as `i64`,
    /// then `u64`, then `f64`; `null` members are kept.
    pub fn from_native(native: JsonValue) -> Value {
        match native {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => Value::Number(Number::from_json_number(&n)),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(arr) => Value::Array(arr.into_iter().map(Value::from_native).collect()),
            JsonValue::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from_native(v)))
                    .collect(),
            ),
        }
    }

    /// Convert back to a `serde_json` tree, keeping explicit nulls.
    ///
    /// Returns `None` if the tree holds a NaN or infinite number, which
    /// `serde_json` cannot represent.
    pub fn to_native(&self) -> Option<JsonValue> {
        Some(match self {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Number(n) => JsonValue::Number(n.to_json_number()?),
            Value::String(s) => JsonValue::String(s.clone()),
            Value::Array(arr) => {
                JsonValue::Array(arr.iter().map(Value::to_native).collect::<Option<Vec<_>>>()?)
            }
            Value::Object(map) => JsonValue::Object(
                map.iter()
                    .map(|(k, v)| v.to_native().map(|n| (k.clone(), n)))
                    .collect::<Option<Map<String, JsonValue>>>()?,
            ),
        })
    }

    /// Like [`Value::to_native`] but with every `Null` member and element
    /// removed first.
    pub fn to_compact_native(&self) -> Option<JsonValue> {
        self.compacted().to_native()
    }

    /// A copy of this tree with every `Null`-valued object member and every
    /// `Null` array element removed, at all depths. A `Null` root stays `Null`.
    pub fn compacted(&self) -> Value {
        match self {
            Value::Array(arr) => Value::Array(
                arr.iter()
                    .filter(|v| !v.is_null())
                    .map(Value::compacted)
                    .collect(),
            ),
            Value::Object(map) => Value::Object(
                map.iter()
                    .filter(|(_, v)| !v.is_null())
                    .map(|(k, v)| (k.clone(), v.compacted()))
                    .collect(),
            ),
            other => other.clone(),
        }
    }

    /// Build a value from type-erased input.
    ///
    /// Recognized inputs: `Value`, `Number`, `bool`, every primitive integer
    /// and float width, `String`, `&'static str`, `serde_json::Value`,
    /// `Option<Box<dyn Any>>`, and `Vec` / `HashMap<String, _>` /
    /// `BTreeMap<String, _>` / `IndexMap<String, _>` holding `Value`,
    /// `Box<dyn Any>`, `String`, `&'static str`, `bool`, `i32`, `i64`, `u64`
    /// or `f64`. Everything else, including `()`, becomes `Null`.
    pub fn from_any(input: &dyn Any) -> Value {
        if let Some(v) = input.downcast_ref::<Value>() {
            return v.clone();
        }
        if let Some(n) = input.downcast_ref::<Number>() {
            return Value::from(*n);
        }
        if let Some(native) = input.downcast_ref::<JsonValue>() {
            return Value::from_native(native.clone());
        }
        if let Some(v) = scalar_from_any(input) {
            return v;
        }
        if let Some(opt) = input.downcast_ref::<Option<Box<dyn Any>>>() {
            return opt
                .as_deref()
                .map(Value::from_any)
                .unwrap_or(Value::Null);
        }
        if let Some(v) = array_from_any(input) {
            return v;
        }
        if let Some(v) = object_from_any(input) {
            return v;
        }
        Value::Null
    }
}

macro_rules! downcast_scalars {
    ($input:expr, $($ty:ty),*) => {
        $(
            if let Some(v) = $input.downcast_ref::<$ty>() {
                return Some(Value::from(*v));
            }
        )*
    };
}

fn scalar_from_any(input: &dyn Any) -> Option<Value> {
    downcast_scalars!(input, bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
    if let Some(s) = input.downcast_ref::<String>() {
        return Some(Value::String(s.clone()));
    }
    if let Some(s) = input.downcast_ref::<&'static str>() {
        return Some(Value::String((*s).to_string()));
    }
    None
}

macro_rules! downcast_vecs {
    ($input:expr, $($ty:ty),*) => {
        $(
            if let Some(arr) = $input.downcast_ref::<Vec<$ty>>() {
                return Some(Value::Array(arr.iter().cloned().map(Value::from).collect()));
            }
        )*
    };
}

macro_rules! downcast_maps {
    ($input:expr, $($ty:ty),*) => {
        $(
            if let Some(map) = $input.downcast_ref::<IndexMap<String, $ty>>() {
                return Some(typed_members(map.iter()));
            }
            if let Some(map) = $input.downcast_ref::<HashMap<String, $ty>>() {
                return Some(typed_members(map.iter()));
            }
            if let Some(map) = $input.downcast_ref::<BTreeMap<String, $ty>>() {
                return Some(typed_members(map.iter()));
            }
        )*
    };
}

fn array_from_any(input: &dyn Any) -> Option<Value> {
    if let Some(arr) = input.downcast_ref::<Vec<Value>>() {
        return Some(Value::Array(arr.clone()));
    }
    if let Some(arr) = input.downcast_ref::<Vec<Box<dyn Any>>>() {
        return Some(Value::Array(
            arr.iter().map(|item| Value::from_any(item.as_ref())).collect(),
        ));
    }
    downcast_vecs!(input, String, &'static str, bool, i32, i64, u64, f64);
    None
}

fn object_from_any(input: &dyn Any) -> Option<Value> {
    if let Some(map) = input.downcast_ref::<IndexMap<String, Value>>() {
        return Some(Value::Object(map.clone()));
    }
    if let Some(map) = input.downcast_ref::<HashMap<String, Value>>() {
        return Some(Value::Object(
            map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        ));
    }
    if let Some(map) = input.downcast_ref::<BTreeMap<String, Value>>() {
        return Some(Value::Object(
            map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        ));
    }
    if let Some(map) = input.downcast_ref::<IndexMap<String, Box<dyn Any>>>() {
        return Some(erased_members(map.iter()));
    }
    if let Some(map) = input.downcast_ref::<HashMap<String, Box<dyn Any>>>() {
        return Some(erased_members(map.iter()));
    }
    if let Some(map) = input.downcast_ref::<BTreeMap<String, Box<dyn Any>>>() {
        return Some(erased_members(map.iter()));
    }
    downcast_maps!(input, String, &'static str, bool, i32, i64, u64, f64);
    None
}

fn typed_members<'a, T>(members: impl Iterator<Item = (&'a String, &'a T)>) -> Value
where
    T: Clone + Into<Value> + 'a,
{
    let object: Object = members.map(|(k, v)| (k.clone(), v.clone().into())).collect();
    Value::Object(object)
}

fn erased_members<'a>(members: impl Iterator<Item = (&'a String, &'a Box<dyn Any>)>) -> Value {
    let object: Object = members
        .map(|(k, v)| (k.clone(), Value::from_any(v.as_ref())))
        .collect();
    Value::Object(object)
}

impl From<JsonValue> for Value {
    fn from(native: JsonValue) -> Self {
        Value::from_native(native)
    }
}
