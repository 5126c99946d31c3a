//! Right-biased structural merge.
//!
//! - array + array: concatenation, `self` first, no deduplication
//! - object + object: members of `other` are merged into matching members of
//!   `self` recursively; members only in `self` stay as they are
//! - anything else: `other` replaces `self`
//!
//! Merging a value containing arrays with itself is not idempotent: the
//! arrays double.

use crate::value::Value;

impl Value {
    /// Merge `other` into `self` in place.
    pub fn merge(&mut self, other: Value) {
        match (self, other) {
            (Value::Array(this), Value::Array(that)) => this.extend(that),
            (Value::Object(this), Value::Object(that)) => {
                for (key, value) in that {
                    match this.get_mut(&key) {
                        Some(existing) => existing.merge(value),
                        None => {
                            this.insert(key, value);
                        }
                    }
                }
            }
            (this, other) => *this = other,
        }
    }

    /// Merged copy of `self` and `other`, leaving both untouched.
    pub fn merged(&self, other: &Value) -> Value {
        let mut result = self.clone();
        result.merge(other.clone());
        result
    }
}
