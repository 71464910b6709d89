//! Isomer compares runtime values structurally, treating collections as
//! order-independent bags of elements rather than positional sequences.
//!
//! Core concepts:
//! - **Canonical projection**: a depth-bounded string fingerprint of a value
//!   (fields sorted, nested objects beyond the bound omitted) used as the
//!   matching key between collection elements
//! - **Unordered matching**: each element of either collection must have a
//!   projection-identical counterpart on the other side; matched pairs are
//!   delegated to an inner comparator, unmatched elements become `missing`
//!   differences
//! - **Comparison capability**: a kind-gated comparator trait; scalar,
//!   object-graph and unordered-collection comparators all implement it and
//!   nest arbitrarily
//! - **Registry**: comparators are selected from an explicit priority table,
//!   not by run-time type inspection
//!
//! # Example
//!
//! ```
//! use isomer_core::{Comparator, deep_equal};
//!
//! // Order does not matter.
//! assert!(deep_equal(&vec![1, 2, 3], &vec![3, 2, 1]));
//!
//! // Differences are collected, never thrown.
//! let report = Comparator::new().compare(&vec![1], &vec![1, 2]).unwrap();
//! assert!(!report.is_pass());
//! assert_eq!(report.differences.len(), 1);
//! ```

mod basic;
mod comparator;
mod comparison;
mod composite;
mod context;
mod kind;
mod object;
mod projection;
mod result;
mod set;

pub use basic::BasicComparison;
pub use comparator::{
    CompareError, Comparator, ComparatorBuilder, ComparisonReport, deep_equal,
};
pub use comparison::Comparison;
pub use composite::CompositeComparison;
pub use context::{ComparisonContext, Difference, DifferenceReason};
pub use kind::Kind;
pub use object::ObjectComparison;
pub use projection::project;
pub use result::ComparisonResult;
pub use set::{GreedyFirstMatch, MatchStrategy, SetComparison};
