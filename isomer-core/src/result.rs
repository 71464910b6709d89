/// Outcome of comparing a pair of values.
///
/// `Inconclusive` means no registered comparator accepted the pair; it is
/// distinct from `Fail` and never upgrades to `Pass` under aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonResult {
    Pass,
    Fail,
    Inconclusive,
}

impl ComparisonResult {
    pub fn is_pass(self) -> bool {
        self == ComparisonResult::Pass
    }

    /// Aggregates per-element results: `Fail` dominates, then `Inconclusive`.
    /// The empty sequence combines to `Pass`.
    pub fn combine<I>(results: I) -> ComparisonResult
    where
        I: IntoIterator<Item = ComparisonResult>,
    {
        let mut inconclusive = false;
        for result in results {
            match result {
                ComparisonResult::Fail => return ComparisonResult::Fail,
                ComparisonResult::Inconclusive => inconclusive = true,
                ComparisonResult::Pass => {}
            }
        }
        if inconclusive {
            ComparisonResult::Inconclusive
        } else {
            ComparisonResult::Pass
        }
    }
}
