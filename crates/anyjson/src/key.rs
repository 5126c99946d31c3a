//! Path keys that address array elements and object members uniformly.

use std::borrow::Cow;
use std::fmt;

/// One step of a path: an array index or an object field name.
///
/// The two forms convert into each other so that the same path works over
/// mixed-shape trees: `Field("2")` addresses index 2 of an array, and
/// `Index(2)` addresses the member `"2"` of an object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathKey {
    Index(i64),
    Field(String),
}

impl PathKey {
    /// The key as an array index. Fields convert when their text is an
    /// integer literal.
    pub fn as_index(&self) -> Option<i64> {
        match self {
            PathKey::Index(i) => Some(*i),
            PathKey::Field(s) => s.parse().ok(),
        }
    }

    /// The key as an object field. Indices render as decimal text.
    pub fn as_field(&self) -> Cow<'_, str> {
        match self {
            PathKey::Index(i) => Cow::Owned(i.to_string()),
            PathKey::Field(s) => Cow::Borrowed(s),
        }
    }

    /// Split a dotted path such as `list.1.name` into keys. Segments that
    /// are integer literals become indices.
    pub fn parse_dotted(path: &str) -> Vec<PathKey> {
        if path.is_empty() {
            return Vec::new();
        }
        path.split('.')
            .map(|segment| match segment.parse::<i64>() {
                Ok(i) => PathKey::Index(i),
                Err(_) => PathKey::Field(segment.to_string()),
            })
            .collect()
    }
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKey::Index(i) => write!(f, "{}", i),
            PathKey::Field(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<&str> for PathKey {
    fn from(value: &str) -> Self {
        PathKey::Field(value.to_string())
    }
}

impl From<String> for PathKey {
    fn from(value: String) -> Self {
        PathKey::Field(value)
    }
}

impl From<&String> for PathKey {
    fn from(value: &String) -> Self {
        PathKey::Field(value.clone())
    }
}

impl From<&PathKey> for PathKey {
    fn from(value: &PathKey) -> Self {
        value.clone()
    }
}

macro_rules! index_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PathKey {
                fn from(value: $ty) -> Self {
                    PathKey::Index(value as i64)
                }
            }
        )*
    };
}

index_from!(i32, i64, u32, usize);

/// Build a `Vec<PathKey>` from mixed index and field literals.
///
/// ```
/// use anyjson::{path, PathKey};
///
/// let keys = path!["list", 1];
/// assert_eq!(keys, vec![PathKey::Field("list".into()), PathKey::Index(1)]);
/// ```
#[macro_export]
macro_rules! path {
    ($($key:expr),* $(,)?) => {
        vec![$($crate::PathKey::from($key)),*]
    };
}
