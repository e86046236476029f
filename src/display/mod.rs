//! Plain-text formatting for CLI output
//!
//! Formats record lists and summaries for the non-interactive subcommands.
//! All figures come from the aggregation engine; nothing is computed here
//! beyond string assembly.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::ledger::Ledger;
use crate::models::{Expense, IncomeSource};
use crate::summary::{
    daily_average, days_left_in_month, month_bounds, prev_week_window, week_window, weekly_trend,
    IncomeSummary, PeriodDelta, SpendingSummary,
};
use crate::summary::insights::{monthly_insights, weekly_insights};

/// Format a single expense for display (register row)
pub fn format_expense_row(expense: &Expense, settings: &Settings) -> String {
    let trip = match expense.trip {
        Some(trip) => format!(" [{}]", trip),
        None => String::new(),
    };

    format!(
        "{} {:24} {:13} {:>10}{}",
        expense.date.format(&settings.date_format),
        truncate(&expense.description, 24),
        expense.category.label(),
        expense.amount.format_with_symbol(&settings.currency_symbol),
        trip
    )
}

/// Format the full expense register, most recent first
pub fn format_expense_list(ledger: &Ledger, settings: &Settings) -> String {
    let expenses = ledger.expenses_by_date();
    if expenses.is_empty() {
        return "No transactions yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:24} {:13} {:>10}\n",
        "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(64));
    output.push('\n');

    for expense in &expenses {
        output.push_str(&format_expense_row(expense, settings));
        output.push('\n');
    }

    output.push_str(&"-".repeat(64));
    output.push('\n');
    output.push_str(&format!(
        "{:49} {:>10}\n",
        "Total:",
        ledger
            .total_spent()
            .format_with_symbol(&settings.currency_symbol)
    ));

    output
}

/// Format the income source list with the monthly-equivalent total
pub fn format_income_list(sources: &[IncomeSource], settings: &Settings) -> String {
    let summary = IncomeSummary::compute(sources);

    let mut output = String::new();
    output.push_str(&format!(
        "Total Monthly Income: {}\n\n",
        summary
            .total_monthly
            .format_with_symbol(&settings.currency_symbol)
    ));

    if sources.is_empty() {
        output.push_str("No income sources added yet.\n");
        return output;
    }

    output.push_str(&format!(
        "{:20} {:12} {:10} {:>10}\n",
        "Source", "Type", "Frequency", "Amount"
    ));
    output.push_str(&"-".repeat(56));
    output.push('\n');

    for source in sources {
        output.push_str(&format!(
            "{:20} {:12} {:10} {:>10}\n",
            truncate(&source.source, 20),
            source.kind.label(),
            source.frequency.label(),
            source.amount.format_with_symbol(&settings.currency_symbol)
        ));
    }

    output
}

/// Format the weekly summary report
pub fn weekly_report(ledger: &Ledger, settings: &Settings, today: NaiveDate) -> String {
    let (start, end) = week_window(today);
    let (prev_start, prev_end) = prev_week_window(today);

    let this_week = ledger.expenses_between(start, end);
    let prev_total = ledger
        .expenses_between(prev_start, prev_end)
        .iter()
        .map(|e| e.amount)
        .sum();

    // The weekly screen measures against no budget; only the breakdown and
    // deltas matter.
    let summary = SpendingSummary::compute(&this_week, crate::models::Money::zero(), 0);
    let delta = PeriodDelta::compute(summary.total_spent, prev_total);
    let symbol = &settings.currency_symbol;

    let mut output = String::new();
    output.push_str(&format!("Weekly Summary: {} to {}\n", start, end));
    output.push_str(&"=".repeat(56));
    output.push('\n');
    output.push_str(&format!(
        "Total spent this week: {}\n",
        summary.total_spent.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Daily average:         {}\n",
        daily_average(summary.total_spent, 7).format_with_symbol(symbol)
    ));
    if let Some(top) = summary.top_category() {
        output.push_str(&format!("Top category:          {}\n", top.category));
    }
    if let Some(change) = delta.percent_change {
        let direction = if delta.is_improvement() { "less" } else { "more" };
        output.push_str(&format!(
            "vs last week:          {:.1}% {}\n",
            change.abs(),
            direction
        ));
    }

    output.push_str(&format_breakdown(&summary, settings));
    output.push_str(&format_insights(&weekly_insights(&summary, &delta)));
    output
}

/// Format the monthly summary report
pub fn monthly_report(ledger: &Ledger, settings: &Settings, today: NaiveDate) -> String {
    let (first, last) = month_bounds(today);
    let (prev_first, prev_last) = month_bounds(first - chrono::Days::new(1));

    let this_month = ledger.expenses_between(first, last);
    let prev_total = ledger
        .expenses_between(prev_first, prev_last)
        .iter()
        .map(|e| e.amount)
        .sum();

    let summary = SpendingSummary::compute(
        &this_month,
        settings.monthly_budget,
        days_left_in_month(today),
    );
    let delta = PeriodDelta::compute(summary.total_spent, prev_total);
    let symbol = &settings.currency_symbol;

    let mut output = String::new();
    output.push_str(&format!("Monthly Summary: {}\n", first.format("%B %Y")));
    output.push_str(&"=".repeat(56));
    output.push('\n');
    output.push_str(&format!(
        "Spent {} of {} budget ({:.1}% used)\n",
        summary.total_spent.format_with_symbol(symbol),
        summary.budget.format_with_symbol(symbol),
        summary.budget_used
    ));

    let remaining_label = if summary.is_over_budget() { "over" } else { "remaining" };
    output.push_str(&format!(
        "{} {}\n",
        summary.remaining.abs().format_with_symbol(symbol),
        remaining_label
    ));
    output.push_str(&format!("Days left: {}\n", summary.days_left));

    match summary.daily_allowance {
        Some(allowance) => output.push_str(&format!(
            "Daily budget left: {}\n",
            allowance.format_with_symbol(symbol)
        )),
        None => output.push_str("Daily budget left: N/A\n"),
    }

    // Weekly trend bars
    output.push_str("\nWeekly Spending Trend\n");
    for bucket in weekly_trend(&this_month) {
        output.push_str(&format!(
            "  {:8} {:>10}\n",
            bucket.label,
            bucket.total.format_with_symbol(symbol)
        ));
    }

    output.push_str(&format_breakdown(&summary, settings));
    output.push_str(&format_insights(&monthly_insights(&summary, &delta)));
    output
}

/// Format the per-category breakdown section
fn format_breakdown(summary: &SpendingSummary, settings: &Settings) -> String {
    if summary.categories.is_empty() {
        return String::new();
    }

    let mut output = String::from("\nCategory Breakdown\n");
    for share in &summary.categories {
        output.push_str(&format!(
            "  {:13} {:>10}  {:>3}%\n",
            share.category.label(),
            share.amount.format_with_symbol(&settings.currency_symbol),
            share.percentage
        ));
    }
    output
}

/// Format the insights section
fn format_insights(insights: &[String]) -> String {
    if insights.is_empty() {
        return String::new();
    }

    let mut output = String::from("\nInsights\n");
    for insight in insights {
        output.push_str(&format!("  - {}\n", insight));
    }
    output
}

/// Truncate a string to a maximum length
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
