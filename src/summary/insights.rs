//! Rule-based spending insights
//!
//! Short human-readable observations derived from the computed summary
//! figures. Each rule fires only when its inputs are present, so an empty
//! period produces an empty list rather than nonsense.

use super::spending::{PeriodDelta, SpendingSummary};

/// Insights for the weekly summary screen
pub fn weekly_insights(summary: &SpendingSummary, delta: &PeriodDelta) -> Vec<String> {
    let mut insights = Vec::new();

    if let Some(change) = delta.percent_change {
        if delta.is_improvement() {
            insights.push(format!(
                "You spent {:.0}% less than last week. Great job!",
                change.abs()
            ));
        } else if change > 0.0 {
            insights.push(format!(
                "You spent {:.0}% more than last week. Worth a closer look.",
                change
            ));
        }
    }

    if let Some(top) = summary.top_category() {
        if top.percentage >= 40 {
            insights.push(format!(
                "{} expenses are {}% of your weekly spending. Consider planning ahead.",
                top.category, top.percentage
            ));
        }
    }

    insights
}

/// Insights for the monthly summary screen
pub fn monthly_insights(summary: &SpendingSummary, delta: &PeriodDelta) -> Vec<String> {
    let mut insights = Vec::new();

    if summary.is_over_budget() {
        insights.push(format!(
            "You are {} over budget this month. Time to slow down.",
            summary.remaining.abs()
        ));
    } else if !summary.budget.is_zero() {
        insights.push("You're on track to stay within budget this month!".to_string());
    }

    if let (Some(allowance), false) = (summary.daily_allowance, summary.is_over_budget()) {
        insights.push(format!(
            "You have {} left for the remaining {} days - that's {} per day.",
            summary.remaining, summary.days_left, allowance
        ));
    }

    if let Some(change) = delta.percent_change {
        if change > 0.0 {
            if let Some(top) = summary.top_category() {
                insights.push(format!(
                    "Spending increased by {:.0}% from last month, led by {}.",
                    change, top.category
                ));
            }
        }
    }

    insights
}
