//! Field-by-field object comparison.

use serde_json::Value;

use crate::comparison::Comparison;
use crate::context::{ComparisonContext, DifferenceReason};
use crate::kind::Kind;
use crate::projection::project;
use crate::result::ComparisonResult;

/// Compares objects field by field, delegating matched fields to an inner
/// comparator under a field-scoped child context.
///
/// Coverage is symmetric: a field present on either side only is recorded
/// as a missing difference, mirroring the two-pass unordered matcher.
pub struct ObjectComparison<C> {
    inner: C,
    projection_depth: usize,
}

impl<C> ObjectComparison<C> {
    pub fn new(inner: C) -> Self {
        ObjectComparison {
            inner,
            projection_depth: 1,
        }
    }

    /// Depth bound for the projections recorded on missing-field
    /// differences, matching the matcher's configured depth.
    pub fn with_projection_depth(mut self, depth: usize) -> Self {
        self.projection_depth = depth;
        self
    }
}

impl<C: Comparison> Comparison for ObjectComparison<C> {
    fn can_compare(&self, left: &Kind, right: &Kind) -> bool {
        let accepts = |kind: &Kind| matches!(kind, Kind::Object | Kind::Mixed);
        accepts(left) && accepts(right)
    }

    fn compare(
        &self,
        ctx: &ComparisonContext,
        left: &Value,
        right: &Value,
    ) -> ComparisonResult {
        let (Some(a), Some(b)) = (left.as_object(), right.as_object()) else {
            return ComparisonResult::Inconclusive;
        };

        let mut results = Vec::with_capacity(a.len());
        for (name, left_field) in a {
            let child = ctx.visiting_field(name);
            match b.get(name) {
                Some(right_field) => {
                    results.push(self.inner.compare(&child, left_field, right_field));
                }
                None => {
                    child.add_difference(
                        left_field,
                        project(left_field, self.projection_depth),
                        DifferenceReason::Missing,
                    );
                    results.push(ComparisonResult::Fail);
                }
            }
        }
        for (name, right_field) in b {
            if !a.contains_key(name) {
                let child = ctx.visiting_field(name);
                child.add_difference(
                    right_field,
                    project(right_field, self.projection_depth),
                    DifferenceReason::Missing,
                );
                results.push(ComparisonResult::Fail);
            }
        }
        ComparisonResult::combine(results)
    }
}
