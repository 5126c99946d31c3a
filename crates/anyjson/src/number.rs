//! Numeric classification.
//!
//! A [`Number`] is a magnitude plus the [`NumberKind`] it was built from. The
//! kind records the width and signedness of the source so that a value which
//! came from a boolean-typed slot (`BoolLike`) can be told apart from one that
//! came from an integer slot, and so that encoding can pick the right wire
//! width. Equality and hashing look only at the magnitude: an `Int8` 1 equals a
//! `Float64` 1.0.
//!
//! # Classification
//!
//! | Source            | Kind       |
//! |-------------------|------------|
//! | `bool`            | `BoolLike` |
//! | `i8` of 0 or 1    | `BoolLike` |
//! | `i8`              | `Int8`     |
//! | `u8`, `i16`       | `Int16`    |
//! | `u16`, `i32`      | `Int32`    |
//! | `u32`, `i64`, `isize` | `Int64` |
//! | `u64`, `usize`    | `UInt64`   |
//! | `f32`             | `Float32`  |
//! | `f64`             | `Float64`  |

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::ParseNumberError;

/// Width/signedness classification of a [`Number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// Single-byte 0/1 that originated from a boolean-like slot.
    BoolLike,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt64,
    Float32,
    Float64,
}

impl NumberKind {
    /// True for `Float32` and `Float64`.
    pub fn is_float(self) -> bool {
        matches!(self, NumberKind::Float32 | NumberKind::Float64)
    }
}

/// Storage for the magnitude. Which arm is used follows from the kind:
/// float kinds use `Float`, `UInt64` uses `Unsigned`, everything else `Signed`.
#[derive(Debug, Clone, Copy)]
enum Repr {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

/// A numeric magnitude tagged with its [`NumberKind`].
#[derive(Clone, Copy)]
pub struct Number {
    repr: Repr,
    kind: NumberKind,
}

impl Number {
    fn signed(value: i64, kind: NumberKind) -> Self {
        Self {
            repr: Repr::Signed(value),
            kind,
        }
    }

    fn float(value: f64, kind: NumberKind) -> Self {
        Self {
            repr: Repr::Float(value),
            kind,
        }
    }

    /// The classification this number was constructed with.
    pub fn kind(&self) -> NumberKind {
        self.kind
    }

    /// Whether this number is a boolean-like 0/1.
    pub fn is_bool_like(&self) -> bool {
        self.kind == NumberKind::BoolLike
    }

    /// Whether the magnitude is stored as an integer.
    pub fn is_integer(&self) -> bool {
        !matches!(self.repr, Repr::Float(_))
    }

    /// Whether the magnitude is stored as a float.
    pub fn is_float(&self) -> bool {
        matches!(self.repr, Repr::Float(_))
    }

    /// False only for NaN and the infinities.
    pub fn is_finite(&self) -> bool {
        match self.repr {
            Repr::Float(f) => f.is_finite(),
            _ => true,
        }
    }

    /// The magnitude as `i64` if it is an integer that fits.
    pub fn as_i64(&self) -> Option<i64> {
        match self.repr {
            Repr::Signed(i) => Some(i),
            Repr::Unsigned(u) => i64::try_from(u).ok(),
            Repr::Float(_) => None,
        }
    }

    /// The magnitude as `u64` if it is a non-negative integer.
    pub fn as_u64(&self) -> Option<u64> {
        match self.repr {
            Repr::Signed(i) => u64::try_from(i).ok(),
            Repr::Unsigned(u) => Some(u),
            Repr::Float(_) => None,
        }
    }

    /// The magnitude as `f64`. Always succeeds; large integers round.
    pub fn as_f64(&self) -> Option<f64> {
        Some(self.to_f64())
    }

    /// Integral magnitude widened to `i128`, if there is one. Floats qualify
    /// when they are finite with no fractional part.
    fn integral(&self) -> Option<i128> {
        match self.repr {
            Repr::Signed(i) => Some(i128::from(i)),
            Repr::Unsigned(u) => Some(i128::from(u)),
            Repr::Float(f) => float_to_i128(f),
        }
    }

    /// Wire form for `serde_json`. `None` for NaN and the infinities.
    pub(crate) fn to_json_number(self) -> Option<serde_json::Number> {
        match self.repr {
            Repr::Signed(i) => Some(serde_json::Number::from(i)),
            Repr::Unsigned(u) => Some(serde_json::Number::from(u)),
            Repr::Float(f) => serde_json::Number::from_f64(f),
        }
    }

    /// Classify a number produced by the JSON tokenizer: `i64` first, then
    /// `u64`, then `f64`.
    pub(crate) fn from_json_number(n: &serde_json::Number) -> Self {
        if let Some(i) = n.as_i64() {
            Number::from(i)
        } else if let Some(u) = n.as_u64() {
            Number::from(u)
        } else {
            Number::from(n.as_f64().unwrap_or(f64::NAN))
        }
    }
}

/// `Some` when `f` is finite, integral and inside the `i128` range.
fn float_to_i128(f: f64) -> Option<i128> {
    // `i128::MAX as f64` rounds up to 2^127, hence the strict upper bound.
    if f.fract() == 0.0 && f >= i128::MIN as f64 && f < i128::MAX as f64 {
        Some(f as i128)
    } else {
        None
    }
}

macro_rules! cast_accessors {
    ($($name:ident => $ty:ty),* $(,)?) => {
        impl Number {
            $(
                #[doc = concat!("Cast the magnitude to `", stringify!($ty), "` with `as` semantics.")]
                pub fn $name(&self) -> $ty {
                    match self.repr {
                        Repr::Signed(i) => i as $ty,
                        Repr::Unsigned(u) => u as $ty,
                        Repr::Float(f) => f as $ty,
                    }
                }
            )*
        }
    };
}

cast_accessors! {
    to_i8 => i8,
    to_i16 => i16,
    to_i32 => i32,
    to_i64 => i64,
    to_isize => isize,
    to_u8 => u8,
    to_u16 => u16,
    to_u32 => u32,
    to_u64 => u64,
    to_usize => usize,
    to_f32 => f32,
    to_f64 => f64,
}

// ============================================================================
// Classification
// ============================================================================

impl From<bool> for Number {
    fn from(value: bool) -> Self {
        Number::signed(i64::from(value), NumberKind::BoolLike)
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        match value {
            0 | 1 => Number::signed(i64::from(value), NumberKind::BoolLike),
            _ => Number::signed(i64::from(value), NumberKind::Int8),
        }
    }
}

macro_rules! classify_signed {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::signed(value as i64, NumberKind::$kind)
                }
            }
        )*
    };
}

classify_signed! {
    u8 => Int16,
    i16 => Int16,
    u16 => Int32,
    i32 => Int32,
    u32 => Int64,
    i64 => Int64,
    isize => Int64,
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Self {
            repr: Repr::Unsigned(value),
            kind: NumberKind::UInt64,
        }
    }
}

impl From<usize> for Number {
    fn from(value: usize) -> Self {
        Number::from(value as u64)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::float(f64::from(value), NumberKind::Float32)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::float(value, NumberKind::Float64)
    }
}

impl FromStr for Number {
    type Err = ParseNumberError;

    /// Decimal parse: `i64`, then `u64`, then a finite `f64`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(i) = s.parse::<i64>() {
            return Ok(Number::from(i));
        }
        if let Ok(u) = s.parse::<u64>() {
            return Ok(Number::from(u));
        }
        match s.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Number::from(f)),
            _ => Err(ParseNumberError(s.to_string())),
        }
    }
}

// ============================================================================
// Equality, hashing, formatting
// ============================================================================

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self.repr, other.repr) {
            (Repr::Float(a), Repr::Float(b)) => a == b,
            _ => match (self.integral(), other.integral()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

// Not reflexive for NaN, which is not equal to itself. Only finite numbers
// are sound as hash keys.
impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.integral() {
            Some(i) => {
                0u8.hash(state);
                i.hash(state);
            }
            None => {
                1u8.hash(state);
                self.to_f64().to_bits().hash(state);
            }
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            Repr::Signed(i) => write!(f, "{}", i),
            Repr::Unsigned(u) => write!(f, "{}", u),
            Repr::Float(v) if self.kind == NumberKind::Float32 => write!(f, "{}", v as f32),
            Repr::Float(v) => write!(f, "{}", v),
        }
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.kind, self)
    }
}
