//! Comparison context and recorded differences.
//!
//! The context is created by the caller once per comparison and threaded by
//! reference through the whole recursive tree. Child contexts extend the
//! breadcrumb path and share the parent's difference sink; differences are
//! append-only events owned by the context, not by the comparators.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde_json::Value;

/// Why a difference was recorded.
#[derive(Debug, Clone, PartialEq)]
pub enum DifferenceReason {
    /// No structural counterpart on the other side.
    Missing,
    /// Scalar values compared unequal.
    Unequal { other: Value },
    /// No registered comparator accepts the pair of kinds.
    Incomparable,
}

impl fmt::Display for DifferenceReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifferenceReason::Missing => f.write_str("missing"),
            DifferenceReason::Unequal { .. } => f.write_str("unequal"),
            DifferenceReason::Incomparable => f.write_str("incomparable"),
        }
    }
}

/// A recorded mismatch: the offending value, its canonical projection and
/// the reason, scoped by the breadcrumb path where it was observed.
#[derive(Debug, Clone, PartialEq)]
pub struct Difference {
    pub path: String,
    pub value: Value,
    pub projection: String,
    pub reason: DifferenceReason,
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() {
            "(root)"
        } else {
            self.path.as_str()
        };
        match &self.reason {
            DifferenceReason::Missing => {
                write!(f, "{path}: missing {}", self.projection)
            }
            DifferenceReason::Unequal { other } => {
                write!(f, "{path}: unequal {} != {}", self.value, other)
            }
            DifferenceReason::Incomparable => {
                write!(f, "{path}: incomparable {}", self.value)
            }
        }
    }
}

/// Caller-owned handle identifying where in the overall structure a
/// comparison is happening.
///
/// Deriving a child context never copies recorded differences; all contexts
/// spawned from one root append into the same sink. A context is not meant
/// to be shared across concurrently running comparisons.
#[derive(Debug, Clone, Default)]
pub struct ComparisonContext {
    path: String,
    differences: Rc<RefCell<Vec<Difference>>>,
}

impl ComparisonContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The breadcrumb path of this context, empty at the root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Derives a child context scoped to a collection index, e.g. `"[3]"`.
    pub fn visiting_index(&self, index: usize) -> ComparisonContext {
        ComparisonContext {
            path: format!("{}[{index}]", self.path),
            differences: Rc::clone(&self.differences),
        }
    }

    /// Derives a child context scoped to a named field, e.g. `".name"`.
    pub fn visiting_field(&self, name: &str) -> ComparisonContext {
        let path = if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}.{name}", self.path)
        };
        ComparisonContext {
            path,
            differences: Rc::clone(&self.differences),
        }
    }

    /// Records a difference at this context's path.
    pub fn add_difference(&self, value: &Value, projection: String, reason: DifferenceReason) {
        self.differences.borrow_mut().push(Difference {
            path: self.path.clone(),
            value: value.clone(),
            projection,
            reason,
        });
    }

    /// Drains all differences recorded through this context tree.
    pub fn take_differences(&self) -> Vec<Difference> {
        self.differences.take()
    }

    /// Number of differences recorded so far.
    pub fn difference_count(&self) -> usize {
        self.differences.borrow().len()
    }
}
