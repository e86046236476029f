//! Seeded demo records
//!
//! Fills a fresh ledger with a plausible spread of expenses and income so
//! the summary screens have something to show on first launch. Dates are
//! relative to the launch day so the weekly and monthly windows are
//! populated.

use chrono::{Days, NaiveDate};

use crate::ledger::Ledger;
use crate::models::{Category, Expense, Frequency, IncomeKind, IncomeSource, Money, Trip};

/// Build a ledger seeded with demo records around `today`
pub fn seeded_ledger(today: NaiveDate) -> Ledger {
    let mut ledger = Ledger::new();
    let day = |back: u64| today.checked_sub_days(Days::new(back)).unwrap_or(today);

    let expenses = [
        Expense::new(Money::from_cents(2550), "Coffee and breakfast", Category::Food, day(0))
            .with_trip(Trip::Personal),
        Expense::new(Money::from_cents(1200), "Bus fare", Category::Transport, day(1)),
        Expense::new(Money::from_cents(8500), "Grocery shopping", Category::Shopping, day(2))
            .with_trip(Trip::Personal),
        Expense::new(Money::from_cents(2800), "Movie night", Category::Entertainment, day(3)),
        Expense::new(Money::from_cents(4550), "Dinner out", Category::Food, day(5))
            .with_trip(Trip::Personal),
        Expense::new(Money::from_cents(14900), "Electricity bill", Category::Bills, day(9)),
        Expense::new(Money::from_cents(3650), "Pharmacy", Category::Healthcare, day(11)),
        Expense::new(Money::from_cents(2100), "Taxi to airport", Category::Transport, day(13))
            .with_trip(Trip::WorkTrip),
        Expense::new(Money::from_cents(6890), "Team lunch", Category::Food, day(13))
            .with_trip(Trip::WorkTrip),
        Expense::new(Money::from_cents(12400), "New headphones", Category::Shopping, day(17)),
    ];
    for expense in expenses {
        // Seed data is hand-authored and always valid
        let _ = ledger.add_expense(expense);
    }

    let income = [
        IncomeSource::new(
            "Main Job",
            Money::from_cents(500000),
            Frequency::Monthly,
            IncomeKind::Salary,
        ),
        IncomeSource::new(
            "Freelance Work",
            Money::from_cents(80000),
            Frequency::Monthly,
            IncomeKind::Freelance,
        ),
        IncomeSource::new(
            "Investment Returns",
            Money::from_cents(15000),
            Frequency::Monthly,
            IncomeKind::Investment,
        ),
    ];
    for source in income {
        let _ = ledger.add_income(source);
    }

    ledger
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::IncomeSummary;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 24).unwrap()
    }

    #[test]
    fn test_seeded_ledger_is_populated() {
        let ledger = seeded_ledger(today());
        assert_eq!(ledger.expenses().len(), 10);
        assert_eq!(ledger.income_sources().len(), 3);
    }

    #[test]
    fn test_seeded_records_are_valid() {
        let ledger = seeded_ledger(today());
        for expense in ledger.expenses() {
            assert!(expense.validate().is_ok());
        }
        for source in ledger.income_sources() {
            assert!(source.validate().is_ok());
        }
    }

    #[test]
    fn test_seeded_income_totals() {
        let ledger = seeded_ledger(today());
        let summary = IncomeSummary::compute(ledger.income_sources());
        assert_eq!(summary.total_monthly.cents(), 595000); // $5950.00
    }

    #[test]
    fn test_most_recent_expense_is_today() {
        let ledger = seeded_ledger(today());
        let recent = ledger.recent_expenses(1);
        assert_eq!(recent[0].date, today());
    }
}
