use serde_json::Value;

use crate::context::ComparisonContext;
use crate::kind::Kind;
use crate::result::ComparisonResult;

/// Capability for comparing a pair of values.
///
/// `can_compare` is a pure kind-level probe, resolvable without looking at
/// any element values; `compare` is the authoritative, possibly recursive
/// equality check. Comparators never raise errors: every failure is
/// expressed as a [`ComparisonResult`] plus differences recorded on the
/// context. A comparator invoked on a pair its `can_compare` would reject
/// returns [`ComparisonResult::Inconclusive`].
pub trait Comparison {
    /// Whether this comparator applies to the given pair of kinds.
    fn can_compare(&self, left: &Kind, right: &Kind) -> bool;

    /// Compares two values, recording differences on the context.
    fn compare(
        &self,
        ctx: &ComparisonContext,
        left: &Value,
        right: &Value,
    ) -> ComparisonResult;
}

impl<'a, T: Comparison + ?Sized> Comparison for &'a T {
    fn can_compare(&self, left: &Kind, right: &Kind) -> bool {
        (**self).can_compare(left, right)
    }

    fn compare(
        &self,
        ctx: &ComparisonContext,
        left: &Value,
        right: &Value,
    ) -> ComparisonResult {
        (**self).compare(ctx, left, right)
    }
}
