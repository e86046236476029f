//! Monthly summary screen
//!
//! Budget gauge with the unclamped percentage alongside, days-left and
//! daily-allowance stats, the weekly spending trend, breakdown, and
//! insights.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::summary::insights::monthly_insights;
use crate::summary::{
    days_left_in_month, month_bounds, weekly_trend, PeriodDelta, SpendingSummary,
};
use crate::tui::app::App;

use super::breakdown_lines;

/// Render the monthly summary
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let (first, last) = month_bounds(app.today);
    let (prev_first, prev_last) = month_bounds(first - chrono::Days::new(1));

    let this_month = app.ledger.expenses_between(first, last);
    let prev_total: Money = app
        .ledger
        .expenses_between(prev_first, prev_last)
        .iter()
        .map(|e| e.amount)
        .sum();

    let summary = SpendingSummary::compute(
        &this_month,
        app.settings.monthly_budget,
        days_left_in_month(app.today),
    );
    let delta = PeriodDelta::compute(summary.total_spent, prev_total);
    let trend = weekly_trend(&this_month);
    let symbol = &app.settings.currency_symbol;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Budget gauge card
            Constraint::Length(4), // Stats
            Constraint::Length(6), // Weekly trend
            Constraint::Min(3),    // Breakdown + insights
        ])
        .split(area);

    render_budget_card(frame, &summary, symbol, chunks[0]);
    render_stats(frame, &summary, symbol, chunks[1]);
    render_trend(frame, &trend, symbol, chunks[2]);

    let mut lines = breakdown_lines(&summary, symbol);
    let insights = monthly_insights(&summary, &delta);
    if !insights.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Monthly Insights",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for insight in &insights {
            lines.push(Line::from(format!("  • {}", insight)));
        }
    }
    let block = Block::default()
        .title(" Top Categories ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(lines).block(block), chunks[3]);
}

/// Budget overview card: spent-of-budget line plus the clamped gauge
fn render_budget_card(frame: &mut Frame, summary: &SpendingSummary, symbol: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spent of budget
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Used / remaining
            Constraint::Min(0),
        ])
        .split(inner);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            summary.total_spent.format_with_symbol(symbol),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" of {} budget", summary.budget.format_with_symbol(symbol)),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(header, rows[0]);

    // The gauge is clamped; the text next to it reports the true figure
    let gauge_color = if summary.is_over_budget() {
        Color::Red
    } else {
        Color::Green
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(gauge_color).bg(Color::DarkGray))
        .ratio(summary.gauge_ratio())
        .label(format!("{:.1}% used", summary.budget_used));
    frame.render_widget(gauge, rows[1]);

    let (remaining_label, remaining_color) = if summary.is_over_budget() {
        ("over", Color::Red)
    } else {
        ("remaining", Color::Green)
    };
    let remaining = Paragraph::new(Span::styled(
        format!(
            "{} {}",
            summary.remaining.abs().format_with_symbol(symbol),
            remaining_label
        ),
        Style::default().fg(remaining_color),
    ))
    .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(remaining, rows[2]);
}

/// Days-left and daily-allowance stat cards
fn render_stats(frame: &mut Frame, summary: &SpendingSummary, symbol: &str, area: Rect) {
    let stats = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_stat(frame, stats[0], &summary.days_left.to_string(), "Days Left");

    let allowance = match summary.daily_allowance {
        Some(amount) => amount.format_with_symbol(symbol),
        None => "N/A".to_string(),
    };
    render_stat(frame, stats[1], &allowance, "Daily Budget Left");
}

/// Weekly spending trend bars, scaled to the largest bucket
fn render_trend(
    frame: &mut Frame,
    trend: &[crate::summary::WeekBucket],
    symbol: &str,
    area: Rect,
) {
    let block = Block::default()
        .title(" Weekly Spending Trend ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let max = trend
        .iter()
        .map(|b| b.total.cents())
        .max()
        .filter(|&c| c > 0)
        .unwrap_or(1);

    let bar_width = 20usize;
    let lines: Vec<Line> = trend
        .iter()
        .map(|bucket| {
            let filled =
                (bucket.total.cents() as f64 / max as f64 * bar_width as f64).round() as usize;
            let bar = format!("{:░<width$}", "█".repeat(filled), width = bar_width);
            Line::from(vec![
                Span::raw(format!("{:8} ", bucket.label)),
                Span::styled(bar, Style::default().fg(Color::Cyan)),
                Span::raw(format!(" {:>10}", bucket.total.format_with_symbol(symbol))),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render one small stat card
fn render_stat(frame: &mut Frame, area: Rect, value: &str, label: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let lines = vec![
        Line::from(Span::styled(
            value.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(ratatui::layout::Alignment::Center),
        area,
    );
}
