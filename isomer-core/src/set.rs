//! Unordered (bag) collection comparison.
//!
//! Two collections are compared as order-independent bags: every element of
//! each side must have a counterpart on the other side whose depth-bounded
//! canonical projection is textually identical. Matched pairs are delegated
//! to the inner comparator for the authoritative, possibly recursive check;
//! unmatched elements are recorded as missing differences.

use serde_json::Value;
use tracing::trace;

use crate::comparison::Comparison;
use crate::context::{ComparisonContext, DifferenceReason};
use crate::kind::Kind;
use crate::projection::project;
use crate::result::ComparisonResult;

/// Selects a counterpart for an element from a pool of candidates.
///
/// Isolating the selection behind a trait keeps the greedy behavior
/// replaceable by an optimal assignment without touching callers.
pub trait MatchStrategy {
    /// Returns the candidate matching the given projection, if any.
    fn find_match<'a>(
        &self,
        projection: &str,
        candidates: &'a [Value],
        max_depth: usize,
    ) -> Option<&'a Value>;
}

/// First candidate with a textually identical projection wins.
///
/// Matched candidates are not removed from the pool, so an element can be
/// matched against a counterpart already claimed by another element of the
/// same pass when projections are duplicated.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyFirstMatch;

impl MatchStrategy for GreedyFirstMatch {
    fn find_match<'a>(
        &self,
        projection: &str,
        candidates: &'a [Value],
        max_depth: usize,
    ) -> Option<&'a Value> {
        candidates
            .iter()
            .find(|candidate| project(candidate, max_depth) == projection)
    }
}

/// Order-independent collection comparison with an inner comparator for
/// matched element pairs.
pub struct SetComparison<C> {
    inner: C,
    strategy: Box<dyn MatchStrategy>,
    projection_depth: usize,
}

impl<C> SetComparison<C> {
    /// Creates a matcher with the default greedy strategy and projection
    /// depth 1.
    pub fn new(inner: C) -> Self {
        SetComparison {
            inner,
            strategy: Box::new(GreedyFirstMatch),
            projection_depth: 1,
        }
    }

    pub fn with_projection_depth(mut self, depth: usize) -> Self {
        self.projection_depth = depth;
        self
    }

    pub fn with_strategy(mut self, strategy: Box<dyn MatchStrategy>) -> Self {
        self.strategy = strategy;
        self
    }
}

impl<C: Comparison> SetComparison<C> {
    /// One matching pass. The match index is threaded through explicitly so
    /// the second pass continues where the first left off; a miss consumes
    /// no index.
    fn compare_side(
        &self,
        ctx: &ComparisonContext,
        from: &[Value],
        to: &[Value],
        results: &mut Vec<ComparisonResult>,
        mut index: usize,
    ) -> usize {
        for element in from {
            let projection = project(element, self.projection_depth);
            match self
                .strategy
                .find_match(&projection, to, self.projection_depth)
            {
                Some(counterpart) => {
                    trace!(index, "element matched, delegating to inner comparator");
                    let child = ctx.visiting_index(index);
                    index += 1;
                    results.push(self.inner.compare(&child, element, counterpart));
                }
                None => {
                    trace!(%projection, "element has no counterpart");
                    ctx.add_difference(element, projection, DifferenceReason::Missing);
                    results.push(ComparisonResult::Fail);
                }
            }
        }
        index
    }
}

impl<C: Comparison> Comparison for SetComparison<C> {
    fn can_compare(&self, left: &Kind, right: &Kind) -> bool {
        match (left.element(), right.element()) {
            (Some(a), Some(b)) => self.inner.can_compare(a, b),
            _ => false,
        }
    }

    fn compare(
        &self,
        ctx: &ComparisonContext,
        left: &Value,
        right: &Value,
    ) -> ComparisonResult {
        let (Some(a), Some(b)) = (left.as_array(), right.as_array()) else {
            return ComparisonResult::Inconclusive;
        };

        // Asymmetric: only the first collection's emptiness short-circuits.
        // An empty right side still gets its surplus flagged by pass 2.
        if a.is_empty() {
            return ComparisonResult::Pass;
        }

        let mut results = Vec::with_capacity(a.len() + b.len());
        let index = self.compare_side(ctx, a, b, &mut results, 0);
        self.compare_side(ctx, b, a, &mut results, index);
        ComparisonResult::combine(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::BasicComparison;
    use crate::context::Difference;
    use serde_json::{Value, json};

    fn compare(left: Value, right: Value) -> (ComparisonResult, Vec<Difference>) {
        let ctx = ComparisonContext::new();
        let cmp = SetComparison::new(BasicComparison::new());
        let result = cmp.compare(&ctx, &left, &right);
        (result, ctx.take_differences())
    }

    #[test]
    fn permuted_scalars_pass() {
        let (result, differences) = compare(json!([1, 2, 3]), json!([3, 2, 1]));
        assert_eq!(result, ComparisonResult::Pass);
        assert!(differences.is_empty());
    }

    #[test]
    fn both_empty_pass() {
        let (result, differences) = compare(json!([]), json!([]));
        assert_eq!(result, ComparisonResult::Pass);
        assert!(differences.is_empty());
    }

    #[test]
    fn empty_left_short_circuits_even_against_nonempty_right() {
        // Documented asymmetry: emptiness of the first side alone passes.
        let (result, differences) = compare(json!([]), json!([1, 2]));
        assert_eq!(result, ComparisonResult::Pass);
        assert!(differences.is_empty());
    }

    #[test]
    fn empty_right_reports_all_left_elements_missing() {
        let (result, differences) = compare(json!([1, 2]), json!([]));
        assert_eq!(result, ComparisonResult::Fail);
        assert_eq!(differences.len(), 2);
        assert!(
            differences
                .iter()
                .all(|d| d.reason == DifferenceReason::Missing)
        );
    }

    #[test]
    fn surplus_right_element_is_flagged_by_second_pass() {
        let (result, differences) = compare(json!([1]), json!([1, 2]));
        assert_eq!(result, ComparisonResult::Fail);
        assert_eq!(differences.len(), 1);
        assert_eq!(differences[0].value, json!(2));
        assert_eq!(differences[0].projection, "2");
        assert_eq!(differences[0].reason, DifferenceReason::Missing);
    }

    #[test]
    fn match_index_continues_across_passes() {
        // An inner comparator that records every delegated pair exposes the
        // child context paths: pass 1 consumes indices 0 and 1, pass 2
        // continues at 2.
        struct RecordEveryPair;

        impl Comparison for RecordEveryPair {
            fn can_compare(&self, _left: &Kind, _right: &Kind) -> bool {
                true
            }

            fn compare(
                &self,
                ctx: &ComparisonContext,
                left: &Value,
                right: &Value,
            ) -> ComparisonResult {
                ctx.add_difference(
                    left,
                    project(left, 1),
                    DifferenceReason::Unequal {
                        other: right.clone(),
                    },
                );
                ComparisonResult::Fail
            }
        }

        let ctx = ComparisonContext::new();
        let cmp = SetComparison::new(RecordEveryPair);
        let result = cmp.compare(&ctx, &json!([1, 2]), &json!([2, 1]));
        assert_eq!(result, ComparisonResult::Fail);
        let paths: Vec<String> = ctx
            .take_differences()
            .into_iter()
            .map(|d| d.path)
            .collect();
        assert_eq!(paths, vec!["[0]", "[1]", "[2]", "[3]"]);
    }

    #[test]
    fn miss_consumes_no_index() {
        let ctx = ComparisonContext::new();
        let cmp = SetComparison::new(BasicComparison::new());
        // Pass 1: 1 matches (index 0), 9 misses (no index). Pass 2: 1
        // matches (index 1), 7 misses.
        let result = cmp.compare(&ctx, &json!([1, 9]), &json!([1, 7]));
        assert_eq!(result, ComparisonResult::Fail);
        let differences = ctx.take_differences();
        assert_eq!(differences.len(), 2);
        assert_eq!(differences[0].value, json!(9));
        assert_eq!(differences[1].value, json!(7));
    }

    #[test]
    fn greedy_duplicates_share_a_counterpart() {
        // Two equal projections on the left both claim the single 1 on the
        // right; pass 2 then finds 1's counterpart on the left. Known
        // limitation of greedy first-match.
        let (result, differences) = compare(json!([1, 1]), json!([1]));
        assert_eq!(result, ComparisonResult::Pass);
        assert!(differences.is_empty());
    }

    #[test]
    fn gate_requires_arrays_on_both_sides() {
        let cmp = SetComparison::new(BasicComparison::new());
        let ints = Kind::Array(Box::new(Kind::Integer));
        assert!(cmp.can_compare(&ints, &ints));
        assert!(cmp.can_compare(&ints, &Kind::Array(Box::new(Kind::Mixed))));
        assert!(!cmp.can_compare(&ints, &Kind::Integer));
        assert!(!cmp.can_compare(&Kind::Object, &ints));
        // Inner gate propagates: a scalar inner comparator rejects object
        // elements.
        assert!(!cmp.can_compare(
            &Kind::Array(Box::new(Kind::Object)),
            &Kind::Array(Box::new(Kind::Object))
        ));
    }

    #[test]
    fn non_array_input_is_inconclusive() {
        let ctx = ComparisonContext::new();
        let cmp = SetComparison::new(BasicComparison::new());
        let result = cmp.compare(&ctx, &json!(1), &json!([1]));
        assert_eq!(result, ComparisonResult::Inconclusive);
    }
}
