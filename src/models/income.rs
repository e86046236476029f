//! Income source model
//!
//! Each source carries a payment frequency; the aggregation engine
//! normalizes every source to a monthly-equivalent amount.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::IncomeId;
use super::money::Money;

/// Average number of weeks in a month, used for weekly-to-monthly
/// normalization.
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// How often an income source pays out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl Frequency {
    /// All frequencies, in form order
    pub const ALL: [Frequency; 3] = [Frequency::Weekly, Frequency::Monthly, Frequency::Yearly];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What kind of income a source is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IncomeKind {
    #[default]
    Salary,
    Freelance,
    Investment,
    Other,
}

impl IncomeKind {
    /// All kinds, in form order
    pub const ALL: [IncomeKind; 4] = [
        IncomeKind::Salary,
        IncomeKind::Freelance,
        IncomeKind::Investment,
        IncomeKind::Other,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::Freelance => "Freelance",
            Self::Investment => "Investment",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for IncomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation errors for income sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    NonPositiveAmount,
    EmptySource,
}

impl fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Amount must be greater than zero"),
            Self::EmptySource => write!(f, "Income source is required"),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// A recurring income source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeSource {
    /// Unique identifier for the lifetime of the session
    pub id: IncomeId,

    /// Where the income comes from ("Main Job", "Freelance Work", ...)
    pub source: String,

    /// Amount per payout
    pub amount: Money,

    /// Payout frequency
    pub frequency: Frequency,

    /// Kind of income
    pub kind: IncomeKind,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl IncomeSource {
    /// Create a new income source
    pub fn new(
        source: impl Into<String>,
        amount: Money,
        frequency: Frequency,
        kind: IncomeKind,
    ) -> Self {
        Self {
            id: IncomeId::new(),
            source: source.into(),
            amount,
            frequency,
            kind,
            created_at: Utc::now(),
        }
    }

    /// Normalize this source's amount to a monthly figure
    ///
    /// Weekly amounts multiply by 4.33, yearly amounts divide by 12,
    /// monthly amounts pass through unchanged.
    pub fn monthly_equivalent(&self) -> Money {
        match self.frequency {
            Frequency::Weekly => self.amount.scale_by(WEEKS_PER_MONTH),
            Frequency::Monthly => self.amount,
            Frequency::Yearly => self.amount.scale_by(1.0 / 12.0),
        }
    }

    /// Validate the income source
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if !self.amount.is_positive() {
            return Err(IncomeValidationError::NonPositiveAmount);
        }
        if self.source.trim().is_empty() {
            return Err(IncomeValidationError::EmptySource);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_income_source() {
        let income = IncomeSource::new(
            "Main Job",
            Money::from_cents(500000),
            Frequency::Monthly,
            IncomeKind::Salary,
        );

        assert_eq!(income.source, "Main Job");
        assert_eq!(income.amount.cents(), 500000);
        assert!(income.validate().is_ok());
    }

    #[test]
    fn test_monthly_equivalent_passthrough() {
        let income = IncomeSource::new(
            "Main Job",
            Money::from_cents(10000), // $100.00
            Frequency::Monthly,
            IncomeKind::Salary,
        );
        assert_eq!(income.monthly_equivalent().cents(), 10000);
    }

    #[test]
    fn test_monthly_equivalent_weekly() {
        let income = IncomeSource::new(
            "Side Gig",
            Money::from_cents(10000), // $100.00 weekly
            Frequency::Weekly,
            IncomeKind::Freelance,
        );
        // $100.00 x 4.33 = $433.00
        assert_eq!(income.monthly_equivalent().cents(), 43300);
    }

    #[test]
    fn test_monthly_equivalent_yearly() {
        let income = IncomeSource::new(
            "Dividends",
            Money::from_cents(120000), // $1200.00 yearly
            Frequency::Yearly,
            IncomeKind::Investment,
        );
        // $1200.00 / 12 = $100.00
        assert_eq!(income.monthly_equivalent().cents(), 10000);
    }

    #[test]
    fn test_validation() {
        let zero = IncomeSource::new("Job", Money::zero(), Frequency::Monthly, IncomeKind::Salary);
        assert!(matches!(
            zero.validate(),
            Err(IncomeValidationError::NonPositiveAmount)
        ));

        let unnamed = IncomeSource::new(
            " ",
            Money::from_cents(100),
            Frequency::Monthly,
            IncomeKind::Salary,
        );
        assert!(matches!(
            unnamed.validate(),
            Err(IncomeValidationError::EmptySource)
        ));
    }

    #[test]
    fn test_serialization() {
        let income = IncomeSource::new(
            "Freelance Work",
            Money::from_cents(80000),
            Frequency::Monthly,
            IncomeKind::Freelance,
        );

        let json = serde_json::to_string(&income).unwrap();
        let deserialized: IncomeSource = serde_json::from_str(&json).unwrap();

        assert_eq!(income.id, deserialized.id);
        assert_eq!(income.frequency, deserialized.frequency);
        assert_eq!(income.kind, deserialized.kind);
    }
}
