//! Spending summary
//!
//! Aggregates a set of expenses against a budget: total spent, budget-used
//! percentage, per-category breakdown, daily allowance, and period deltas.

use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

use crate::models::{Category, Expense, Money};

/// One category's share of the spending in a period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryShare {
    /// Category
    pub category: Category,
    /// Total spent in this category
    pub amount: Money,
    /// Share of total spending, rounded to the nearest whole percent
    pub percentage: u32,
}

/// Derived spending figures for a period
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingSummary {
    /// Total spent in the period
    pub total_spent: Money,
    /// The budget the total is measured against
    pub budget: Money,
    /// Budget used, in percent, unclamped (may exceed 100)
    pub budget_used: f64,
    /// Budget minus total; negative when over budget
    pub remaining: Money,
    /// Days left in the period
    pub days_left: u32,
    /// Remaining budget per remaining day; `None` when no days remain
    pub daily_allowance: Option<Money>,
    /// Per-category breakdown, largest first
    pub categories: Vec<CategoryShare>,
    /// Number of expenses in the period
    pub expense_count: usize,
}

impl SpendingSummary {
    /// Compute the summary for a set of expenses
    ///
    /// `budget_used` is reported unclamped so callers can render an
    /// over-budget figure; [`SpendingSummary::gauge_ratio`] clamps for
    /// progress-bar rendering. A zero budget reports 0% used.
    pub fn compute(expenses: &[&Expense], budget: Money, days_left: u32) -> Self {
        let total_spent: Money = expenses.iter().map(|e| e.amount).sum();

        let mut per_category: HashMap<Category, Money> = HashMap::new();
        for expense in expenses {
            *per_category.entry(expense.category).or_insert(Money::zero()) += expense.amount;
        }

        let mut categories: Vec<CategoryShare> = per_category
            .into_iter()
            .map(|(category, amount)| CategoryShare {
                category,
                amount,
                percentage: amount.percent_of(total_spent).round() as u32,
            })
            .collect();
        categories.sort_by(|a, b| b.amount.cmp(&a.amount).then(a.category.label().cmp(b.category.label())));

        let remaining = budget - total_spent;
        let daily_allowance = if days_left == 0 {
            None
        } else {
            Some(remaining.scale_by(1.0 / days_left as f64))
        };

        Self {
            total_spent,
            budget,
            budget_used: total_spent.percent_of(budget),
            remaining,
            days_left,
            daily_allowance,
            categories,
            expense_count: expenses.len(),
        }
    }

    /// Whether spending has exceeded the budget
    pub fn is_over_budget(&self) -> bool {
        self.budget_used > 100.0
    }

    /// Budget-used as a 0.0..=1.0 ratio, clamped for gauge rendering
    pub fn gauge_ratio(&self) -> f64 {
        (self.budget_used / 100.0).clamp(0.0, 1.0)
    }

    /// The category with the largest spending, if any
    pub fn top_category(&self) -> Option<&CategoryShare> {
        self.categories.first()
    }
}

/// Spending change relative to a previous period
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodDelta {
    /// This period's total
    pub current: Money,
    /// The previous period's total
    pub previous: Money,
    /// Percent change from previous to current; `None` when the previous
    /// period had no spending
    pub percent_change: Option<f64>,
}

impl PeriodDelta {
    /// Compare a period's total against the previous period's
    pub fn compute(current: Money, previous: Money) -> Self {
        let percent_change = if previous.is_zero() {
            None
        } else {
            Some((current - previous).cents() as f64 / previous.cents() as f64 * 100.0)
        };
        Self {
            current,
            previous,
            percent_change,
        }
    }

    /// Whether this period improved on the last (spent less)
    pub fn is_improvement(&self) -> bool {
        self.current < self.previous
    }
}

/// Average spend per day over `days` days; zero when `days` is zero
pub fn daily_average(total: Money, days: u32) -> Money {
    if days == 0 {
        Money::zero()
    } else {
        total.scale_by(1.0 / days as f64)
    }
}

/// The trailing 7-day window ending on `today`
pub fn week_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today - chrono::Days::new(6), today)
}

/// The 7-day window immediately before [`week_window`]
pub fn prev_week_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today - chrono::Days::new(13), today - chrono::Days::new(7))
}

/// First and last day of the month containing `date`
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date.with_day(1).expect("day 1 is always valid");
    let last = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    }
    .expect("first of month is always valid")
    .pred_opt()
    .expect("last of month is always valid");
    (first, last)
}

/// Days left in the month containing `today`, counting today
pub fn days_left_in_month(today: NaiveDate) -> u32 {
    let (_, last) = month_bounds(today);
    (last - today).num_days() as u32 + 1
}

/// One week bucket of the monthly trend
#[derive(Debug, Clone, PartialEq)]
pub struct WeekBucket {
    /// Display label ("Week 1" ...)
    pub label: String,
    /// Total spent in the bucket
    pub total: Money,
}

/// Partition a month's expenses into week-of-month buckets
///
/// Days 1-7 fall in week 1, 8-14 in week 2, 15-21 in week 3, and 22 through
/// month end in week 4.
pub fn weekly_trend(expenses: &[&Expense]) -> Vec<WeekBucket> {
    let mut totals = [Money::zero(); 4];
    for expense in expenses {
        let bucket = ((expense.date.day() - 1) / 7).min(3) as usize;
        totals[bucket] += expense.amount;
    }
    totals
        .iter()
        .enumerate()
        .map(|(i, total)| WeekBucket {
            label: format!("Week {}", i + 1),
            total: *total,
        })
        .collect()
}
