/// Numeric classification tests.
///
/// Covers the width/signedness table, the boolean-like `i8` rule, magnitude
/// equality across kinds, hashing, cast semantics, decimal text and parsing.
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use anyjson::{Number, NumberKind, Value};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn classify_bool_is_bool_like() {
    assert_eq!(Number::from(true).kind(), NumberKind::BoolLike);
    assert_eq!(Number::from(false).kind(), NumberKind::BoolLike);
}

#[test]
fn classify_i8_zero_and_one_are_bool_like() {
    assert_eq!(Number::from(0i8).kind(), NumberKind::BoolLike);
    assert_eq!(Number::from(1i8).kind(), NumberKind::BoolLike);
}

#[test]
fn classify_i8_other_magnitudes_are_int8() {
    assert_eq!(Number::from(2i8).kind(), NumberKind::Int8);
    assert_eq!(Number::from(-1i8).kind(), NumberKind::Int8);
    assert_eq!(Number::from(i8::MAX).kind(), NumberKind::Int8);
}

#[test]
fn classify_wider_signed_widths() {
    assert_eq!(Number::from(1i16).kind(), NumberKind::Int16);
    assert_eq!(Number::from(1i32).kind(), NumberKind::Int32);
    assert_eq!(Number::from(1i64).kind(), NumberKind::Int64);
    assert_eq!(Number::from(1isize).kind(), NumberKind::Int64);
}

#[test]
fn classify_unsigned_widens_to_next_signed_kind() {
    assert_eq!(Number::from(1u8).kind(), NumberKind::Int16);
    assert_eq!(Number::from(1u16).kind(), NumberKind::Int32);
    assert_eq!(Number::from(1u32).kind(), NumberKind::Int64);
    assert_eq!(Number::from(1u64).kind(), NumberKind::UInt64);
    assert_eq!(Number::from(1usize).kind(), NumberKind::UInt64);
}

#[test]
fn classify_floats() {
    assert_eq!(Number::from(1.5f32).kind(), NumberKind::Float32);
    assert_eq!(Number::from(1.5f64).kind(), NumberKind::Float64);
    assert!(NumberKind::Float32.is_float());
    assert!(!NumberKind::Int64.is_float());
}

#[test]
fn value_from_i8_zero_or_one_is_bool() {
    assert_eq!(Value::from(1i8), Value::Bool(true));
    assert_eq!(Value::from(0i8), Value::Bool(false));
}

#[test]
fn value_from_wider_zero_or_one_stays_number() {
    for v in [
        Value::from(1i16),
        Value::from(0i32),
        Value::from(1i64),
        Value::from(1u8),
        Value::from(0u64),
    ] {
        assert!(v.is_number(), "expected number, got {:?}", v);
    }
}

#[test]
fn value_from_i8_other_magnitude_is_number() {
    let v = Value::from(5i8);
    assert_eq!(v.strict_number().map(|n| n.kind()), Some(NumberKind::Int8));
}

// ============================================================================
// Equality and hashing
// ============================================================================

#[test]
fn equality_ignores_kind() {
    assert_eq!(Number::from(5i8), Number::from(5.0f64));
    assert_eq!(Number::from(1i32), Number::from(1u64));
    assert_eq!(Number::from(true), Number::from(1.0f32));
    assert_eq!(Number::from(-3i16), Number::from(-3i64));
}

#[test]
fn equality_compares_magnitude() {
    assert_ne!(Number::from(1i64), Number::from(1.5f64));
    assert_ne!(Number::from(-1i64), Number::from(u64::MAX));
    assert_ne!(Number::from(0.1f64), Number::from(0.2f64));
}

#[test]
fn nan_is_not_equal_to_itself() {
    let nan = Number::from(f64::NAN);
    assert_ne!(nan, nan);
}

#[test]
fn negative_zero_equals_zero() {
    assert_eq!(Number::from(-0.0f64), Number::from(0i64));
    assert_eq!(hash_of(&Number::from(-0.0f64)), hash_of(&Number::from(0i64)));
}

#[test]
fn hash_agrees_with_equality_across_kinds() {
    assert_eq!(hash_of(&Number::from(7i8)), hash_of(&Number::from(7.0f64)));
    assert_eq!(hash_of(&Number::from(7u64)), hash_of(&Number::from(7i32)));
    assert_eq!(hash_of(&Number::from(2.5f32)), hash_of(&Number::from(2.5f64)));
}

// ============================================================================
// Views and casts
// ============================================================================

#[test]
fn lossless_views() {
    assert_eq!(Number::from(42i32).as_i64(), Some(42));
    assert_eq!(Number::from(u64::MAX).as_i64(), None);
    assert_eq!(Number::from(-1i64).as_u64(), None);
    assert_eq!(Number::from(1.5f64).as_i64(), None);
    assert_eq!(Number::from(3i64).as_f64(), Some(3.0));
}

#[test]
fn integer_narrowing_wraps() {
    assert_eq!(Number::from(300i64).to_i8(), 44);
    assert_eq!(Number::from(-1i64).to_u8(), 255);
    assert_eq!(Number::from(u64::MAX).to_i64(), -1);
    assert_eq!(Number::from(65_537i32).to_u16(), 1);
}

#[test]
fn float_to_integer_truncates() {
    assert_eq!(Number::from(3.7f64).to_i32(), 3);
    assert_eq!(Number::from(-3.7f64).to_i32(), -3);
}

#[test]
fn integer_to_float_rounds_to_nearest() {
    assert_eq!(Number::from(16_777_217i64).to_f32(), 16_777_216.0);
    assert_eq!(Number::from(2i64).to_f64(), 2.0);
}

#[test]
fn finiteness() {
    assert!(Number::from(1i64).is_finite());
    assert!(Number::from(1.5f64).is_finite());
    assert!(!Number::from(f64::INFINITY).is_finite());
    assert!(!Number::from(f64::NAN).is_finite());
    assert!(Number::from(1i64).is_integer());
    assert!(Number::from(1.0f64).is_float());
}

// ============================================================================
// Decimal text
// ============================================================================

#[test]
fn display_integers() {
    assert_eq!(Number::from(-7i32).to_string(), "-7");
    assert_eq!(Number::from(u64::MAX).to_string(), "18446744073709551615");
    assert_eq!(Number::from(true).to_string(), "1");
}

#[test]
fn display_floats() {
    assert_eq!(Number::from(3.14f64).to_string(), "3.14");
    assert_eq!(Number::from(1.0f64).to_string(), "1");
    assert_eq!(Number::from(0.1f32).to_string(), "0.1");
}

#[test]
fn parse_prefers_signed_then_unsigned_then_float() {
    let n: Number = "123".parse().unwrap();
    assert_eq!(n.kind(), NumberKind::Int64);
    let n: Number = "18446744073709551615".parse().unwrap();
    assert_eq!(n.kind(), NumberKind::UInt64);
    let n: Number = "1.5".parse().unwrap();
    assert_eq!(n.kind(), NumberKind::Float64);
    assert_eq!(n, Number::from(1.5f64));
}

#[test]
fn parse_rejects_non_numbers() {
    for text in ["12a3", "", "abc", "NaN", "inf", "1.2.3"] {
        assert!(text.parse::<Number>().is_err(), "{:?} should not parse", text);
    }
}
