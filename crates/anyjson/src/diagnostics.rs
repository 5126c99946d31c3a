//! Diagnostics for path access that cannot be satisfied.
//!
//! Navigation never panics. When a step is out of bounds or hits the wrong
//! kind of node, the navigator returns `Null` (or leaves the tree untouched)
//! and reports a [`PathDiagnostic`] to a [`DiagnosticSink`]. The default sink,
//! [`TracingSink`], forwards to `tracing::warn!`; install a subscriber to see
//! the events.

use std::cell::RefCell;
use std::fmt;

use crate::key::PathKey;

/// Which navigator operation produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathOp {
    Get,
    Set,
    Delete,
}

impl fmt::Display for PathOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PathOp::Get => "get",
            PathOp::Set => "set",
            PathOp::Delete => "delete",
        })
    }
}

/// Why a path step could not be satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathIssue {
    /// Array access outside `[0, len)`.
    IndexOutOfBounds { index: i64, len: usize },
    /// An array was addressed with a key that does not convert to an index.
    KeyNotIndex,
    /// The node is a scalar or `Null` (or, for delete, not an object).
    NotAContainer { kind: &'static str },
}

impl fmt::Display for PathIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathIssue::IndexOutOfBounds { index, len } => {
                write!(f, "array index {} out of bounds (len {})", index, len)
            }
            PathIssue::KeyNotIndex => f.write_str("array key must convert to an integer index"),
            PathIssue::NotAContainer { kind } => write!(f, "access is not supported on {}", kind),
        }
    }
}

/// A single non-fatal navigation problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathDiagnostic {
    pub op: PathOp,
    pub key: PathKey,
    pub issue: PathIssue,
}

impl fmt::Display for PathDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}] {}", self.op, self.key, self.issue)
    }
}

/// Receiver for navigation diagnostics.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: PathDiagnostic);
}

/// Emits diagnostics as `tracing` warnings. This is the sink used by the
/// navigator methods that do not take one explicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: PathDiagnostic) {
        tracing::warn!(
            op = %diagnostic.op,
            key = %diagnostic.key,
            "{}",
            diagnostic.issue
        );
    }
}

/// Drops every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn report(&self, _diagnostic: PathDiagnostic) {}
}

/// Collects diagnostics in memory, for callers that want to inspect them.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: RefCell<Vec<PathDiagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything reported so far, oldest first.
    pub fn records(&self) -> Vec<PathDiagnostic> {
        self.records.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// Remove and return everything reported so far.
    pub fn take(&self) -> Vec<PathDiagnostic> {
        self.records.take()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: PathDiagnostic) {
        self.records.borrow_mut().push(diagnostic);
    }
}
