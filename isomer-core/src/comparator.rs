//! Public comparison facade.
//!
//! `Comparator` owns the standard registry (scalars, unordered collections,
//! objects) and drives a full comparison: it realizes both inputs as value
//! trees, creates the root context, runs the registry and collects the
//! recorded differences into a report.

use std::fmt;
use std::rc::{Rc, Weak};

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::basic::BasicComparison;
use crate::comparison::Comparison;
use crate::composite::CompositeComparison;
use crate::context::{ComparisonContext, Difference};
use crate::kind::Kind;
use crate::object::ObjectComparison;
use crate::result::ComparisonResult;
use crate::set::SetComparison;

/// Error type for comparator operations.
#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    #[error("failed to realize value for comparison: {0}")]
    Realize(#[from] serde_json::Error),
}

/// Aggregate outcome of a comparison: the combined result and every
/// difference recorded along the way.
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    pub result: ComparisonResult,
    pub differences: Vec<Difference>,
}

impl ComparisonReport {
    pub fn is_pass(&self) -> bool {
        self.result.is_pass()
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.result {
            ComparisonResult::Pass => "pass",
            ComparisonResult::Fail => "fail",
            ComparisonResult::Inconclusive => "inconclusive",
        };
        f.write_str(label)?;
        for difference in &self.differences {
            write!(f, "\n  {difference}")?;
        }
        Ok(())
    }
}

/// Weak back-reference to the registry, letting member comparators recurse
/// through the full dispatch table without an ownership cycle.
struct RootReference(Weak<CompositeComparison>);

impl Comparison for RootReference {
    fn can_compare(&self, left: &Kind, right: &Kind) -> bool {
        self.0
            .upgrade()
            .is_some_and(|root| root.can_compare(left, right))
    }

    fn compare(
        &self,
        ctx: &ComparisonContext,
        left: &Value,
        right: &Value,
    ) -> ComparisonResult {
        match self.0.upgrade() {
            Some(root) => root.compare(ctx, left, right),
            None => ComparisonResult::Inconclusive,
        }
    }
}

/// Builder for a [`Comparator`] with non-default settings.
pub struct ComparatorBuilder {
    projection_depth: usize,
    float_tolerance: f64,
    custom: Vec<Rc<dyn Comparison>>,
}

impl ComparatorBuilder {
    pub fn new() -> Self {
        ComparatorBuilder {
            projection_depth: 1,
            float_tolerance: 0.0,
            custom: Vec::new(),
        }
    }

    /// Depth bound for canonical projections used as matching keys.
    pub fn projection_depth(mut self, depth: usize) -> Self {
        self.projection_depth = depth;
        self
    }

    /// Absolute tolerance for float comparison.
    pub fn float_tolerance(mut self, tolerance: f64) -> Self {
        self.float_tolerance = tolerance;
        self
    }

    /// Registers a custom comparator ahead of the standard entries.
    pub fn with_comparison(mut self, comparison: Rc<dyn Comparison>) -> Self {
        self.custom.push(comparison);
        self
    }

    pub fn build(self) -> Comparator {
        let ComparatorBuilder {
            projection_depth,
            float_tolerance,
            custom,
        } = self;
        let root = Rc::new_cyclic(|weak: &Weak<CompositeComparison>| {
            let mut entries = custom;
            entries.push(Rc::new(
                BasicComparison::with_tolerance(float_tolerance)
                    .with_projection_depth(projection_depth),
            ));
            entries.push(Rc::new(
                SetComparison::new(RootReference(weak.clone()))
                    .with_projection_depth(projection_depth),
            ));
            entries.push(Rc::new(
                ObjectComparison::new(RootReference(weak.clone()))
                    .with_projection_depth(projection_depth),
            ));
            CompositeComparison::new(entries)
        });
        Comparator { root }
    }
}

impl Default for ComparatorBuilder {
    fn default() -> Self {
        ComparatorBuilder::new()
    }
}

/// Structural deep-equality comparator with order-independent collections.
pub struct Comparator {
    root: Rc<CompositeComparison>,
}

impl Comparator {
    /// Standard registry with default settings.
    pub fn new() -> Self {
        ComparatorBuilder::new().build()
    }

    pub fn builder() -> ComparatorBuilder {
        ComparatorBuilder::new()
    }

    /// Compares two serializable values. Realizing the inputs as value
    /// trees is the only fallible step.
    pub fn compare<L, R>(&self, left: &L, right: &R) -> Result<ComparisonReport, CompareError>
    where
        L: Serialize + ?Sized,
        R: Serialize + ?Sized,
    {
        let left = serde_json::to_value(left)?;
        let right = serde_json::to_value(right)?;
        Ok(self.compare_values(&left, &right))
    }

    /// Compares two already-realized value trees.
    pub fn compare_values(&self, left: &Value, right: &Value) -> ComparisonReport {
        let ctx = ComparisonContext::new();
        let result = self.root.compare(&ctx, left, right);
        let differences = ctx.take_differences();
        debug!(?result, differences = differences.len(), "comparison finished");
        ComparisonReport {
            result,
            differences,
        }
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Comparator::new()
    }
}

/// Convenience check: true iff the values compare as a pass.
pub fn deep_equal<L, R>(left: &L, right: &R) -> bool
where
    L: Serialize + ?Sized,
    R: Serialize + ?Sized,
{
    Comparator::new()
        .compare(left, right)
        .map(|report| report.is_pass())
        .unwrap_or(false)
}
