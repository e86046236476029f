//! Weekly summary screen
//!
//! Total for the trailing 7-day window, delta against the week before,
//! daily average, top category, breakdown, and insights.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::summary::insights::weekly_insights;
use crate::summary::{daily_average, prev_week_window, week_window, PeriodDelta, SpendingSummary};
use crate::tui::app::App;

use super::breakdown_lines;

/// Render the weekly summary
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let (start, end) = week_window(app.today);
    let (prev_start, prev_end) = prev_week_window(app.today);

    let this_week = app.ledger.expenses_between(start, end);
    let prev_total: Money = app
        .ledger
        .expenses_between(prev_start, prev_end)
        .iter()
        .map(|e| e.amount)
        .sum();

    let summary = SpendingSummary::compute(&this_week, Money::zero(), 0);
    let delta = PeriodDelta::compute(summary.total_spent, prev_total);
    let symbol = &app.settings.currency_symbol;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Total card
            Constraint::Length(4), // Stats
            Constraint::Min(3),    // Breakdown + insights
        ])
        .split(area);

    // Total card
    let mut total_lines = vec![
        Line::from(Span::styled(
            summary.total_spent.format_with_symbol(symbol),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Total spent this week",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    if let Some(change) = delta.percent_change {
        let (arrow, color, word) = if delta.is_improvement() {
            ("↓", Color::Green, "less")
        } else {
            ("↑", Color::Red, "more")
        };
        total_lines.push(Line::from(Span::styled(
            format!("{} {:.1}% {} than last week", arrow, change.abs(), word),
            Style::default().fg(color),
        )));
    }
    let total_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(total_lines)
            .block(total_block)
            .alignment(ratatui::layout::Alignment::Center),
        chunks[0],
    );

    // Stats cards
    let stats = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let average = daily_average(summary.total_spent, 7);
    render_stat(
        frame,
        stats[0],
        &average.format_with_symbol(symbol),
        "Daily Average",
    );
    let top = summary
        .top_category()
        .map(|s| s.category.label())
        .unwrap_or("-");
    render_stat(frame, stats[1], top, "Top Category");

    // Breakdown and insights
    let mut lines = breakdown_lines(&summary, symbol);
    let insights = weekly_insights(&summary, &delta);
    if !insights.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Smart Insights",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for insight in &insights {
            lines.push(Line::from(format!("  • {}", insight)));
        }
    }
    let block = Block::default()
        .title(" Category Breakdown ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(lines).block(block), chunks[2]);
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
