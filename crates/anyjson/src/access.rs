//! Typed accessors over [`Value`].
//!
//! The coercing accessors convert across scalar variants where the
//! conversion is well defined and return `None` otherwise:
//!
//! | Accessor    | Bool              | Number                 | String                  | Array / Object / Null |
//! |-------------|-------------------|------------------------|-------------------------|-----------------------|
//! | `as_bool`   | itself            | only when `BoolLike`   | exactly `true`/`false`  | `None`                |
//! | `as_number` | `BoolLike` 0 / 1  | itself                 | decimal parse           | `None`                |
//! | `as_string` | `"true"`/`"false"`| decimal text           | itself                  | `None`                |
//!
//! `as_array` and `as_object` never convert. Every accessor has an
//! `_or_default` form that yields the zero/empty value instead of `None`.
//! The `strict_*` accessors never convert.

use std::borrow::Cow;

use crate::number::Number;
use crate::value::{Object, Value};

impl Value {
    // ------------------------------------------------------------------------
    // Predicates
    // ------------------------------------------------------------------------

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    // ------------------------------------------------------------------------
    // Coercing accessors
    // ------------------------------------------------------------------------

    /// Boolean view. Numbers qualify only when boolean-like; there is no
    /// general numeric truthiness.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Number(n) if n.is_bool_like() => Some(n.to_i64() != 0),
            Value::String(s) => match s.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Numeric view. Booleans become boolean-like 0/1; strings are parsed as
    /// decimal literals.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Bool(b) => Some(Number::from(*b)),
            Value::Number(n) => Some(*n),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Text view. Numbers render as decimal text.
    pub fn as_string(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::String(s) => Some(Cow::Borrowed(s)),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn bool_or_default(&self) -> bool {
        self.as_bool().unwrap_or_default()
    }

    pub fn number_or_default(&self) -> Number {
        self.as_number().unwrap_or_else(|| Number::from(0i64))
    }

    pub fn string_or_default(&self) -> String {
        self.as_string().map(Cow::into_owned).unwrap_or_default()
    }

    pub fn array_or_default(&self) -> Vec<Value> {
        self.as_array().cloned().unwrap_or_default()
    }

    pub fn object_or_default(&self) -> Object {
        self.as_object().cloned().unwrap_or_default()
    }

    // ------------------------------------------------------------------------
    // Strict accessors
    // ------------------------------------------------------------------------

    pub fn strict_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn strict_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn strict_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

// Typed numeric accessors: casts of `as_number`'s magnitude, no range checks.
macro_rules! numeric_accessors {
    ($($ty:ty => $name:ident, $or_default:ident, $cast:ident;)*) => {
        impl Value {
            $(
                #[doc = concat!("[`Value::as_number`] cast to `", stringify!($ty), "`.")]
                pub fn $name(&self) -> Option<$ty> {
                    self.as_number().map(|n| n.$cast())
                }

                #[doc = concat!("[`Value::", stringify!($name), "`], or 0.")]
                pub fn $or_default(&self) -> $ty {
                    self.$name().unwrap_or_default()
                }
            )*
        }
    };
}

numeric_accessors! {
    i8 => as_i8, i8_or_default, to_i8;
    i16 => as_i16, i16_or_default, to_i16;
    i32 => as_i32, i32_or_default, to_i32;
    i64 => as_i64, i64_or_default, to_i64;
    isize => as_isize, isize_or_default, to_isize;
    u8 => as_u8, u8_or_default, to_u8;
    u16 => as_u16, u16_or_default, to_u16;
    u32 => as_u32, u32_or_default, to_u32;
    u64 => as_u64, u64_or_default, to_u64;
    usize => as_usize, usize_or_default, to_usize;
    f32 => as_f32, f32_or_default, to_f32;
    f64 => as_f64, f64_or_default, to_f64;
}
