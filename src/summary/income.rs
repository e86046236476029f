//! Income summary
//!
//! Normalizes every income source to its monthly equivalent and sums the
//! results. Addition is commutative, so the outcome is independent of
//! source order.

use crate::models::{IncomeSource, Money};

/// Derived income figures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeSummary {
    /// Sum of all sources' monthly-equivalent amounts
    pub total_monthly: Money,
    /// Number of sources contributing
    pub source_count: usize,
}

impl IncomeSummary {
    /// Compute the summary for a set of income sources
    pub fn compute(sources: &[IncomeSource]) -> Self {
        Self {
            total_monthly: sources.iter().map(|s| s.monthly_equivalent()).sum(),
            source_count: sources.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Frequency, IncomeKind};

    fn source(cents: i64, frequency: Frequency) -> IncomeSource {
        IncomeSource::new("Test", Money::from_cents(cents), frequency, IncomeKind::Salary)
    }

    #[test]
    fn test_empty_is_zero() {
        let summary = IncomeSummary::compute(&[]);
        assert!(summary.total_monthly.is_zero());
        assert_eq!(summary.source_count, 0);
    }

    #[test]
    fn test_single_monthly() {
        let summary = IncomeSummary::compute(&[source(10000, Frequency::Monthly)]);
        assert_eq!(summary.total_monthly.cents(), 10000); // $100.00
    }

    #[test]
    fn test_single_weekly() {
        let summary = IncomeSummary::compute(&[source(10000, Frequency::Weekly)]);
        assert_eq!(summary.total_monthly.cents(), 43300); // $433.00
    }

    #[test]
    fn test_single_yearly() {
        let summary = IncomeSummary::compute(&[source(120000, Frequency::Yearly)]);
        assert_eq!(summary.total_monthly.cents(), 10000); // $100.00
    }

    #[test]
    fn test_mixed_sources_sum() {
        let sources = vec![
            source(500000, Frequency::Monthly), // $5000.00
            source(80000, Frequency::Monthly),  // $800.00
            source(15000, Frequency::Monthly),  // $150.00
        ];
        let summary = IncomeSummary::compute(&sources);
        assert_eq!(summary.total_monthly.cents(), 595000); // $5950.00
        assert_eq!(summary.source_count, 3);
    }

    #[test]
    fn test_order_insensitive() {
        let mut sources = vec![
            source(10000, Frequency::Weekly),
            source(120000, Frequency::Yearly),
            source(50000, Frequency::Monthly),
        ];
        let forward = IncomeSummary::compute(&sources);
        sources.reverse();
        let backward = IncomeSummary::compute(&sources);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_idempotent() {
        let sources = vec![source(10000, Frequency::Weekly), source(5000, Frequency::Monthly)];
        assert_eq!(
            IncomeSummary::compute(&sources),
            IncomeSummary::compute(&sources)
        );
    }
}
