//! Path navigation: get, set and delete by [`PathKey`].
//!
//! Bad access never panics. A get that cannot be satisfied returns a shared
//! `Null`; a set or delete that cannot be satisfied leaves the tree alone.
//! Either way a [`PathDiagnostic`] goes to the sink. Reading a missing object
//! member is not a problem and reports nothing.
//!
//! Arrays are never grown by `set`: an out-of-range index is a miss.
//! Setting an object member to `Null` stores an explicit null; use
//! [`Value::delete`] to remove the member.
//!
//! The methods without a sink argument report through [`TracingSink`].

use std::ops::Index;

use crate::diagnostics::{DiagnosticSink, PathDiagnostic, PathIssue, PathOp, TracingSink};
use crate::key::PathKey;
use crate::value::Value;

static NULL: Value = Value::Null;

/// Resolve `key` to a position inside an array of length `len`.
fn array_slot(key: &PathKey, len: usize) -> Result<usize, PathIssue> {
    let index = key.as_index().ok_or(PathIssue::KeyNotIndex)?;
    match usize::try_from(index) {
        Ok(i) if i < len => Ok(i),
        _ => Err(PathIssue::IndexOutOfBounds { index, len }),
    }
}

fn report(sink: &dyn DiagnosticSink, op: PathOp, key: &PathKey, issue: PathIssue) {
    sink.report(PathDiagnostic {
        op,
        key: key.clone(),
        issue,
    });
}

impl Value {
    /// Child at `key`, or `Null`.
    pub fn get(&self, key: impl Into<PathKey>) -> &Value {
        self.get_key(&key.into(), &TracingSink)
    }

    pub fn get_with(&self, key: impl Into<PathKey>, sink: &dyn DiagnosticSink) -> &Value {
        self.get_key(&key.into(), sink)
    }

    /// Follow `path` from this node. An empty path yields `Null`, and once a
    /// step yields `Null` every later step does too.
    pub fn get_path(&self, path: &[PathKey]) -> &Value {
        self.get_path_with(path, &TracingSink)
    }

    pub fn get_path_with(&self, path: &[PathKey], sink: &dyn DiagnosticSink) -> &Value {
        if path.is_empty() {
            return &NULL;
        }
        path.iter().fold(self, |node, key| node.get_key(key, sink))
    }

    /// Mutable reference to the node at `path`, if every step resolves.
    /// An empty path addresses this node.
    pub fn get_path_mut(&mut self, path: &[PathKey]) -> Option<&mut Value> {
        self.get_path_mut_with(path, &TracingSink)
    }

    pub fn get_path_mut_with(
        &mut self,
        path: &[PathKey],
        sink: &dyn DiagnosticSink,
    ) -> Option<&mut Value> {
        self.descend_mut(path, PathOp::Get, sink)
    }

    /// Replace the child at `key`. Array indices must already exist.
    pub fn set(&mut self, key: impl Into<PathKey>, value: impl Into<Value>) {
        self.set_key(&key.into(), value.into(), &TracingSink);
    }

    pub fn set_with(
        &mut self,
        key: impl Into<PathKey>,
        value: impl Into<Value>,
        sink: &dyn DiagnosticSink,
    ) {
        self.set_key(&key.into(), value.into(), sink);
    }

    /// Write `value` at `path`.
    ///
    /// Each intermediate child is read, updated recursively with the rest of
    /// the path, then written back with a single-key set. A missing
    /// intermediate object member is therefore written back as an explicit
    /// `Null`, since the recursive set on `Null` is a miss.
    pub fn set_path(&mut self, path: &[PathKey], value: impl Into<Value>) {
        self.set_path_with(path, value, &TracingSink);
    }

    pub fn set_path_with(
        &mut self,
        path: &[PathKey],
        value: impl Into<Value>,
        sink: &dyn DiagnosticSink,
    ) {
        self.set_path_value(path, value.into(), sink);
    }

    fn set_path_value(&mut self, path: &[PathKey], value: Value, sink: &dyn DiagnosticSink) {
        match path {
            [] => {}
            [key] => self.set_key(key, value, sink),
            [head, tail @ ..] => {
                let mut child = self.take_child(head, sink);
                child.set_path_value(tail, value, sink);
                self.set_key(head, child, sink);
            }
        }
    }

    /// Remove an object member. Removing an absent member does nothing;
    /// deleting from anything but an object is a miss.
    pub fn delete(&mut self, key: impl Into<PathKey>) {
        self.delete_key(&key.into(), &TracingSink);
    }

    pub fn delete_with(&mut self, key: impl Into<PathKey>, sink: &dyn DiagnosticSink) {
        self.delete_key(&key.into(), sink);
    }

    /// Remove the member addressed by the last key of `path`. Intermediate
    /// steps are never created.
    pub fn delete_path(&mut self, path: &[PathKey]) {
        self.delete_path_with(path, &TracingSink);
    }

    pub fn delete_path_with(&mut self, path: &[PathKey], sink: &dyn DiagnosticSink) {
        let Some((last, parents)) = path.split_last() else {
            return;
        };
        if let Some(parent) = self.descend_mut(parents, PathOp::Delete, sink) {
            parent.delete_key(last, sink);
        }
    }

    // ------------------------------------------------------------------------
    // Single-key primitives
    // ------------------------------------------------------------------------

    fn get_key(&self, key: &PathKey, sink: &dyn DiagnosticSink) -> &Value {
        match self {
            Value::Array(arr) => match array_slot(key, arr.len()) {
                Ok(i) => &arr[i],
                Err(issue) => {
                    report(sink, PathOp::Get, key, issue);
                    &NULL
                }
            },
            Value::Object(map) => map.get(&*key.as_field()).unwrap_or(&NULL),
            other => {
                report(sink, PathOp::Get, key, not_a_container(other));
                &NULL
            }
        }
    }

    /// Walk `path` mutably, reporting misses under `op`.
    fn descend_mut(
        &mut self,
        path: &[PathKey],
        op: PathOp,
        sink: &dyn DiagnosticSink,
    ) -> Option<&mut Value> {
        let mut node = self;
        for key in path {
            node = node.child_mut(key, op, sink)?;
        }
        Some(node)
    }

    fn child_mut(
        &mut self,
        key: &PathKey,
        op: PathOp,
        sink: &dyn DiagnosticSink,
    ) -> Option<&mut Value> {
        match self {
            Value::Array(arr) => match array_slot(key, arr.len()) {
                Ok(i) => Some(&mut arr[i]),
                Err(issue) => {
                    report(sink, op, key, issue);
                    None
                }
            },
            Value::Object(map) => map.get_mut(&*key.as_field()),
            other => {
                let issue = not_a_container(other);
                report(sink, op, key, issue);
                None
            }
        }
    }

    /// Same lookup and diagnostics as `get_key`, but moves the child out and
    /// leaves `Null` in its slot.
    fn take_child(&mut self, key: &PathKey, sink: &dyn DiagnosticSink) -> Value {
        self.child_mut(key, PathOp::Get, sink)
            .map(std::mem::take)
            .unwrap_or_default()
    }

    fn set_key(&mut self, key: &PathKey, value: Value, sink: &dyn DiagnosticSink) {
        match self {
            Value::Array(arr) => match array_slot(key, arr.len()) {
                Ok(i) => arr[i] = value,
                Err(issue) => report(sink, PathOp::Set, key, issue),
            },
            Value::Object(map) => {
                map.insert(key.as_field().into_owned(), value);
            }
            other => {
                let issue = not_a_container(other);
                report(sink, PathOp::Set, key, issue);
            }
        }
    }

    fn delete_key(&mut self, key: &PathKey, sink: &dyn DiagnosticSink) {
        match self {
            Value::Object(map) => {
                map.shift_remove(&*key.as_field());
            }
            other => {
                let issue = not_a_container(other);
                report(sink, PathOp::Delete, key, issue);
            }
        }
    }
}

fn not_a_container(value: &Value) -> PathIssue {
    PathIssue::NotAContainer {
        kind: value.kind_name(),
    }
}

// ============================================================================
// Subscript sugar: read-only, same behavior as `get`
// ============================================================================

impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.get(key)
    }
}

impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        self.get(index)
    }
}

impl Index<PathKey> for Value {
    type Output = Value;

    fn index(&self, key: PathKey) -> &Value {
        self.get_key(&key, &TracingSink)
    }
}

impl Index<&[PathKey]> for Value {
    type Output = Value;

    fn index(&self, path: &[PathKey]) -> &Value {
        self.get_path(path)
    }
}
