//! Expense record model
//!
//! An expense is immutable after creation: editing is performed by deleting
//! the record and recreating it from the edited form.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::category::{Category, Trip};
use super::ids::ExpenseId;
use super::money::Money;

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount,
    EmptyDescription,
}

impl std::fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Amount must be greater than zero"),
            Self::EmptyDescription => write!(f, "Description is required"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// A single expense line item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier for the lifetime of the session
    pub id: ExpenseId,

    /// Amount spent (always positive)
    pub amount: Money,

    /// What the money was spent on
    pub description: String,

    /// Expense category
    pub category: Category,

    /// Optional trip tag
    pub trip: Option<Trip>,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense dated `date`
    pub fn new(
        amount: Money,
        description: impl Into<String>,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            description: description.into(),
            category,
            trip: None,
            date,
            created_at: Utc::now(),
        }
    }

    /// Attach a trip tag
    pub fn with_trip(mut self, trip: Trip) -> Self {
        self.trip = Some(trip);
        self
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_expense() {
        let expense = Expense::new(
            Money::from_cents(2550),
            "Coffee and breakfast",
            Category::Food,
            date(2024, 1, 15),
        )
        .with_trip(Trip::Personal);

        assert_eq!(expense.amount.cents(), 2550);
        assert_eq!(expense.category, Category::Food);
        assert_eq!(expense.trip, Some(Trip::Personal));
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_validation_zero_amount() {
        let expense = Expense::new(Money::zero(), "Bus fare", Category::Transport, date(2024, 1, 14));
        assert!(matches!(
            expense.validate(),
            Err(ExpenseValidationError::NonPositiveAmount)
        ));
    }

    #[test]
    fn test_validation_negative_amount() {
        let expense = Expense::new(
            Money::from_cents(-100),
            "Bus fare",
            Category::Transport,
            date(2024, 1, 14),
        );
        assert!(matches!(
            expense.validate(),
            Err(ExpenseValidationError::NonPositiveAmount)
        ));
    }

    #[test]
    fn test_validation_empty_description() {
        let expense = Expense::new(Money::from_cents(1200), "  ", Category::Transport, date(2024, 1, 14));
        assert!(matches!(
            expense.validate(),
            Err(ExpenseValidationError::EmptyDescription)
        ));
    }

    #[test]
    fn test_serialization() {
        let expense = Expense::new(
            Money::from_cents(8500),
            "Grocery shopping",
            Category::Shopping,
            date(2024, 1, 13),
        );

        let json = serde_json::to_string(&expense).unwrap();
        let deserialized: Expense = serde_json::from_str(&json).unwrap();

        assert_eq!(expense.id, deserialized.id);
        assert_eq!(expense.amount, deserialized.amount);
        assert_eq!(expense.category, deserialized.category);
        assert_eq!(expense.trip, deserialized.trip);
    }
}
