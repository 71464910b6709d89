//! Scalar comparison.

use serde_json::Value;

use crate::comparison::Comparison;
use crate::context::{ComparisonContext, DifferenceReason};
use crate::kind::Kind;
use crate::projection::project;
use crate::result::ComparisonResult;

/// Compares scalar values by value.
///
/// Accepts any pair of scalar kinds, so cross-kind pairs like `1` vs `"1"`
/// compare unequal rather than falling through as inconclusive. Numbers
/// compare exactly when both sides are integers; otherwise both are widened
/// to `f64` and compared within an absolute tolerance (0.0 by default, which
/// still makes `1` and `1.0` equal).
#[derive(Debug, Clone)]
pub struct BasicComparison {
    float_tolerance: f64,
    projection_depth: usize,
}

impl BasicComparison {
    pub fn new() -> Self {
        BasicComparison {
            float_tolerance: 0.0,
            projection_depth: 1,
        }
    }

    pub fn with_tolerance(float_tolerance: f64) -> Self {
        BasicComparison {
            float_tolerance,
            projection_depth: 1,
        }
    }

    pub fn with_projection_depth(mut self, depth: usize) -> Self {
        self.projection_depth = depth;
        self
    }

    fn values_equal(&self, left: &Value, right: &Value) -> bool {
        match (left, right) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => {
                if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
                    x == y
                } else if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
                    x == y
                } else if let (Some(x), Some(y)) = (a.as_f64(), b.as_f64()) {
                    x == y || (x - y).abs() <= self.float_tolerance
                } else {
                    false
                }
            }
            _ => false,
        }
    }
}

impl Default for BasicComparison {
    fn default() -> Self {
        BasicComparison::new()
    }
}

impl Comparison for BasicComparison {
    fn can_compare(&self, left: &Kind, right: &Kind) -> bool {
        let accepts = |kind: &Kind| kind.is_scalar() || *kind == Kind::Mixed;
        accepts(left) && accepts(right)
    }

    fn compare(
        &self,
        ctx: &ComparisonContext,
        left: &Value,
        right: &Value,
    ) -> ComparisonResult {
        if !self.can_compare(&Kind::of(left), &Kind::of(right)) {
            return ComparisonResult::Inconclusive;
        }
        if self.values_equal(left, right) {
            ComparisonResult::Pass
        } else {
            ctx.add_difference(
                left,
                project(left, self.projection_depth),
                DifferenceReason::Unequal {
                    other: right.clone(),
                },
            );
            ComparisonResult::Fail
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn compare(left: Value, right: Value) -> (ComparisonResult, usize) {
        let ctx = ComparisonContext::new();
        let result = BasicComparison::new().compare(&ctx, &left, &right);
        (result, ctx.difference_count())
    }

    #[test]
    fn equal_scalars_pass() {
        assert_eq!(compare(json!(null), json!(null)).0, ComparisonResult::Pass);
        assert_eq!(compare(json!(true), json!(true)).0, ComparisonResult::Pass);
        assert_eq!(compare(json!("a"), json!("a")).0, ComparisonResult::Pass);
        assert_eq!(compare(json!(7), json!(7)).0, ComparisonResult::Pass);
    }

    #[test]
    fn unequal_scalars_fail_with_difference() {
        let (result, differences) = compare(json!(1), json!(2));
        assert_eq!(result, ComparisonResult::Fail);
        assert_eq!(differences, 1);
    }

    #[test]
    fn integer_equals_float_of_same_magnitude() {
        assert_eq!(compare(json!(1), json!(1.0)).0, ComparisonResult::Pass);
        assert_eq!(compare(json!(1), json!(1.5)).0, ComparisonResult::Fail);
    }

    #[test]
    fn large_u64_compares_exactly() {
        let big = u64::MAX;
        assert_eq!(
            compare(json!(big), json!(big)).0,
            ComparisonResult::Pass
        );
        assert_eq!(
            compare(json!(big), json!(big - 1)).0,
            ComparisonResult::Fail
        );
    }

    #[test]
    fn tolerance_admits_close_floats() {
        let cmp = BasicComparison::with_tolerance(1e-9);
        let ctx = ComparisonContext::new();
        let result = cmp.compare(&ctx, &json!(1.0), &json!(1.0 + 1e-10));
        assert_eq!(result, ComparisonResult::Pass);
    }

    #[test]
    fn cross_kind_scalars_fail_not_inconclusive() {
        let (result, differences) = compare(json!(1), json!("1"));
        assert_eq!(result, ComparisonResult::Fail);
        assert_eq!(differences, 1);
    }

    #[test]
    fn off_contract_composite_pair_is_inconclusive() {
        // Pairs the gate rejects yield Inconclusive, never a recorded
        // difference.
        let cmp = BasicComparison::new();
        assert!(!cmp.can_compare(&Kind::Object, &Kind::Object));

        let ctx = ComparisonContext::new();
        let result = cmp.compare(&ctx, &json!({"a": 1}), &json!({"a": 1}));
        assert_eq!(result, ComparisonResult::Inconclusive);
        assert_eq!(ctx.difference_count(), 0);

        let result = cmp.compare(&ctx, &json!([1]), &json!(1));
        assert_eq!(result, ComparisonResult::Inconclusive);
        assert_eq!(ctx.difference_count(), 0);
    }

    #[test]
    fn gate_rejects_composites() {
        let cmp = BasicComparison::new();
        assert!(cmp.can_compare(&Kind::Integer, &Kind::String));
        assert!(cmp.can_compare(&Kind::Mixed, &Kind::Integer));
        assert!(!cmp.can_compare(&Kind::Object, &Kind::Object));
        assert!(!cmp.can_compare(&Kind::Array(Box::new(Kind::Integer)), &Kind::Integer));
    }
}
