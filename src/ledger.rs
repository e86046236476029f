//! Session-scoped record store
//!
//! The `Ledger` owns every expense and income record for the lifetime of
//! the process. All mutation goes through it; screens borrow the record
//! lists and derive their summary figures on every render. Nothing here
//! touches the filesystem.

use chrono::NaiveDate;

use crate::error::{OutlayError, OutlayResult};
use crate::models::{Expense, ExpenseId, IncomeId, IncomeSource, Money};

/// Owned, in-memory store for all session records
#[derive(Debug, Default)]
pub struct Ledger {
    expenses: Vec<Expense>,
    income: Vec<IncomeSource>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an expense, validating it first
    pub fn add_expense(&mut self, expense: Expense) -> OutlayResult<ExpenseId> {
        expense
            .validate()
            .map_err(|e| OutlayError::Validation(e.to_string()))?;
        let id = expense.id;
        self.expenses.push(expense);
        Ok(id)
    }

    /// Delete an expense by id
    ///
    /// Removes exactly one record and preserves the relative order of the
    /// rest. Returns the removed record.
    pub fn delete_expense(&mut self, id: ExpenseId) -> OutlayResult<Expense> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| OutlayError::expense_not_found(id.to_string()))?;
        Ok(self.expenses.remove(index))
    }

    /// Look up an expense by id
    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// All expenses, in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Expenses sorted by date, most recent first
    pub fn expenses_by_date(&self) -> Vec<&Expense> {
        let mut sorted: Vec<&Expense> = self.expenses.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// The `limit` most recent expenses
    pub fn recent_expenses(&self, limit: usize) -> Vec<&Expense> {
        let mut sorted = self.expenses_by_date();
        sorted.truncate(limit);
        sorted
    }

    /// Expenses dated within `[start, end]` inclusive
    pub fn expenses_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| e.date >= start && e.date <= end)
            .collect()
    }

    /// Total spent across all expenses
    pub fn total_spent(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Add an income source, validating it first
    pub fn add_income(&mut self, income: IncomeSource) -> OutlayResult<IncomeId> {
        income
            .validate()
            .map_err(|e| OutlayError::Validation(e.to_string()))?;
        let id = income.id;
        self.income.push(income);
        Ok(id)
    }

    /// Delete an income source by id
    pub fn delete_income(&mut self, id: IncomeId) -> OutlayResult<IncomeSource> {
        let index = self
            .income
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| OutlayError::income_not_found(id.to_string()))?;
        Ok(self.income.remove(index))
    }

    /// All income sources, in insertion order
    pub fn income_sources(&self) -> &[IncomeSource] {
        &self.income
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Frequency, IncomeKind};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(cents: i64, description: &str, day: u32) -> Expense {
        Expense::new(
            Money::from_cents(cents),
            description,
            Category::Food,
            date(2024, 1, day),
        )
    }

    #[test]
    fn test_add_and_list() {
        let mut ledger = Ledger::new();
        ledger.add_expense(expense(2550, "Coffee", 15)).unwrap();
        ledger.add_expense(expense(1200, "Bus fare", 14)).unwrap();

        assert_eq!(ledger.expenses().len(), 2);
        assert_eq!(ledger.total_spent().cents(), 3750);
    }

    #[test]
    fn test_add_rejects_invalid() {
        let mut ledger = Ledger::new();
        let err = ledger.add_expense(expense(0, "Coffee", 15)).unwrap_err();
        assert!(err.is_validation());
        assert!(ledger.expenses().is_empty());
    }

    #[test]
    fn test_delete_removes_exactly_one_preserving_order() {
        let mut ledger = Ledger::new();
        let a = ledger.add_expense(expense(100, "a", 1)).unwrap();
        let b = ledger.add_expense(expense(200, "b", 2)).unwrap();
        let c = ledger.add_expense(expense(300, "c", 3)).unwrap();

        let removed = ledger.delete_expense(b).unwrap();
        assert_eq!(removed.description, "b");

        let remaining: Vec<ExpenseId> = ledger.expenses().iter().map(|e| e.id).collect();
        assert_eq!(remaining, vec![a, c]);
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let mut ledger = Ledger::new();
        let err = ledger.delete_expense(ExpenseId::new()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_recent_expenses_sorted_by_date() {
        let mut ledger = Ledger::new();
        ledger.add_expense(expense(100, "old", 1)).unwrap();
        ledger.add_expense(expense(200, "newest", 20)).unwrap();
        ledger.add_expense(expense(300, "middle", 10)).unwrap();

        let recent = ledger.recent_expenses(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].description, "newest");
        assert_eq!(recent[1].description, "middle");
    }

    #[test]
    fn test_expenses_between_is_inclusive() {
        let mut ledger = Ledger::new();
        ledger.add_expense(expense(100, "before", 1)).unwrap();
        ledger.add_expense(expense(200, "start", 10)).unwrap();
        ledger.add_expense(expense(300, "end", 17)).unwrap();
        ledger.add_expense(expense(400, "after", 18)).unwrap();

        let window = ledger.expenses_between(date(2024, 1, 10), date(2024, 1, 17));
        assert_eq!(window.len(), 2);
    }

    #[test]
    fn test_income_add_and_delete() {
        let mut ledger = Ledger::new();
        let id = ledger
            .add_income(IncomeSource::new(
                "Main Job",
                Money::from_cents(500000),
                Frequency::Monthly,
                IncomeKind::Salary,
            ))
            .unwrap();

        assert_eq!(ledger.income_sources().len(), 1);
        let removed = ledger.delete_income(id).unwrap();
        assert_eq!(removed.source, "Main Job");
        assert!(ledger.income_sources().is_empty());
    }
}
