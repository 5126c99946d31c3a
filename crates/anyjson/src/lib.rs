//! # anyjson
//!
//! A dynamically-shaped JSON value with path navigation, coercing accessors
//! and structural merge.
//!
//! [`Value`] is a closed sum of null, bool, number, string, array and
//! object. Numbers remember the width they were built from ([`NumberKind`]),
//! which is how a boolean-like `i8` 0/1 is told apart from an integer.
//! Navigation by [`PathKey`] never panics: bad access yields `Null` and a
//! diagnostic on an injectable [`DiagnosticSink`].
//!
//! ## Quick start
//!
//! ```rust
//! use anyjson::{path, SerializeMode, Value};
//!
//! let mut v = Value::parse(r#"{"name":"Alice","scores":[95,87,92]}"#).unwrap();
//! assert_eq!(v.get_path(&path!["scores", 1]).as_i64(), Some(87));
//!
//! v.set_path(&path!["scores", 1], 90);
//! v.merge(Value::parse(r#"{"scores":[70],"team":null}"#).unwrap());
//!
//! assert_eq!(
//!     v.serialize_string(SerializeMode::Compact).unwrap(),
//!     r#"{"name":"Alice","scores":[95,90,92,70]}"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`value`]: the `Value` tree, equality, hashing, `From` construction
//! - [`number`]: `Number` and its width classification
//! - [`key`]: `PathKey` and the [`path!`] macro
//! - [`access`]: coercing, strict and typed accessors
//! - [`path`]: get / set / delete by key or path
//! - [`merge`]: right-biased structural merge
//! - [`native`]: bridge to `serde_json::Value` and `&dyn Any`
//! - [`codec`]: parse / serialize, serde impls
//! - [`diagnostics`]: sinks for navigation diagnostics
//! - [`error`]: error types

pub mod access;
pub mod codec;
pub mod diagnostics;
pub mod error;
pub mod key;
pub mod merge;
pub mod native;
pub mod number;
pub mod path;
pub mod value;

pub use codec::SerializeMode;
pub use diagnostics::{
    DiagnosticSink, PathDiagnostic, PathIssue, PathOp, RecordingSink, SilentSink, TracingSink,
};
pub use error::{ParseNumberError, Result, ValueError};
pub use key::PathKey;
pub use number::{Number, NumberKind};
pub use value::{Object, Value};
