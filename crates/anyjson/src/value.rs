//! The dynamically-shaped [`Value`] tree.
//!
//! `Value` is a closed sum of the six JSON shapes. Containers own their
//! children outright, so a tree has no sharing and no cycles, and `clone` is a
//! deep copy. Construction from typed Rust data goes through `From`: numbers
//! are classified by [`Number`]'s rules, and a boolean-like number (`bool`, or
//! an `i8` of 0 or 1) becomes [`Value::Bool`].
//!
//! # Equality
//!
//! Arrays compare element-wise in order. Objects compare as key/value sets,
//! ignoring member order. Numbers compare by magnitude, ignoring their kind.
//! `Hash` agrees with all three rules.
//!
//! `Eq` is implemented so values can key a `HashSet` or `HashMap`, but it is
//! not reflexive for trees holding a NaN: such a value is not equal to
//! itself and will never be found again once inserted. Keep non-finite
//! numbers out of hashed collections.

use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeMap, HashMap};
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

use crate::key::PathKey;
use crate::number::Number;

/// String-keyed members of an object. Insertion order is kept for output but
/// is not part of equality.
pub type Object = IndexMap<String, Value>;

/// A JSON-like value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Object),
}

impl Value {
    /// Lower-case name of the variant.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// One-line description of the root only, e.g. `array(3)` or
    /// `string("hi")`.
    pub fn intro(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => format!("bool({})", b),
            Value::Number(n) => format!("number({})", n),
            Value::String(s) => format!("string({:?})", s),
            Value::Array(arr) => format!("array({})", arr.len()),
            Value::Object(map) => format!("object({})", map.len()),
        }
    }

    /// Number of elements or members. Scalars and `Null` have length 0.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(arr) => arr.len(),
            Value::Object(map) => map.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the children of a container with the key that addresses each:
    /// indices for arrays, fields for objects. Scalars yield nothing.
    pub fn iter(&self) -> Iter<'_> {
        match self {
            Value::Array(arr) => Iter::Array(arr.iter().enumerate()),
            Value::Object(map) => Iter::Object(map.iter()),
            _ => Iter::Empty,
        }
    }
}

/// Iterator returned by [`Value::iter`].
pub enum Iter<'a> {
    Array(std::iter::Enumerate<std::slice::Iter<'a, Value>>),
    Object(indexmap::map::Iter<'a, String, Value>),
    Empty,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (PathKey, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Iter::Array(it) => it.next().map(|(i, v)| (PathKey::Index(i as i64), v)),
            Iter::Object(it) => it.next().map(|(k, v)| (PathKey::Field(k.clone()), v)),
            Iter::Empty => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Iter::Array(it) => it.size_hint(),
            Iter::Object(it) => it.size_hint(),
            Iter::Empty => (0, Some(0)),
        }
    }
}

impl<'a> IntoIterator for &'a Value {
    type Item = (PathKey, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Hashing
// ============================================================================

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Number(n) => n.hash(state),
            Value::String(s) => s.hash(state),
            Value::Array(arr) => arr.hash(state),
            Value::Object(map) => {
                map.len().hash(state);
                // Member order must not matter, so each entry is hashed on
                // its own and the results are summed.
                let mut total: u64 = 0;
                for (k, v) in map {
                    let mut entry = DefaultHasher::new();
                    k.hash(&mut entry);
                    v.hash(&mut entry);
                    total = total.wrapping_add(entry.finish());
                }
                total.hash(state);
            }
        }
    }
}

// ============================================================================
// Construction from typed Rust data
// ============================================================================

impl From<Number> for Value {
    /// Boolean-like numbers become [`Value::Bool`].
    fn from(number: Number) -> Self {
        if number.is_bool_like() {
            Value::Bool(number.to_i64() != 0)
        } else {
            Value::Number(number)
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! value_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::from(Number::from(value))
                }
            }
        )*
    };
}

value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Array(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(value: &[T]) -> Self {
        Value::Array(value.iter().cloned().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> From<HashMap<K, V>> for Value {
    fn from(value: HashMap<K, V>) -> Self {
        value.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(value: BTreeMap<K, V>) -> Self {
        value.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<Value>> From<IndexMap<K, V>> for Value {
    fn from(value: IndexMap<K, V>) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
