//! Priority-ordered comparator registry.

use std::rc::Rc;

use serde_json::Value;
use tracing::trace;

use crate::comparison::Comparison;
use crate::context::{ComparisonContext, DifferenceReason};
use crate::kind::Kind;
use crate::projection::project;
use crate::result::ComparisonResult;

/// An explicit strategy-selection table: comparators are tried in priority
/// order and the first whose `can_compare` accepts the pair of kinds wins.
///
/// A pair involving [`Kind::Mixed`] is always accepted at the gate, with
/// dispatch deferred until the concrete kinds are known at compare time.
/// When no entry accepts a pair at compare time, an `incomparable`
/// difference is recorded and the result is inconclusive.
pub struct CompositeComparison {
    entries: Vec<Rc<dyn Comparison>>,
}

impl CompositeComparison {
    pub fn new(entries: Vec<Rc<dyn Comparison>>) -> Self {
        CompositeComparison { entries }
    }

    fn select(&self, left: &Kind, right: &Kind) -> Option<&Rc<dyn Comparison>> {
        self.entries
            .iter()
            .find(|entry| entry.can_compare(left, right))
    }
}

impl Comparison for CompositeComparison {
    fn can_compare(&self, left: &Kind, right: &Kind) -> bool {
        *left == Kind::Mixed || *right == Kind::Mixed || self.select(left, right).is_some()
    }

    fn compare(
        &self,
        ctx: &ComparisonContext,
        left: &Value,
        right: &Value,
    ) -> ComparisonResult {
        let left_kind = Kind::of(left);
        let right_kind = Kind::of(right);
        match self.select(&left_kind, &right_kind) {
            Some(entry) => {
                trace!(?left_kind, ?right_kind, path = ctx.path(), "dispatching");
                entry.compare(ctx, left, right)
            }
            None => {
                ctx.add_difference(left, project(left, 1), DifferenceReason::Incomparable);
                ComparisonResult::Inconclusive
            }
        }
    }
}
