//! Home screen
//!
//! Summary cards for the current week and month plus the most recent
//! transactions, mirroring the app's landing page.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::summary::{
    days_left_in_month, month_bounds, prev_week_window, week_window, PeriodDelta, SpendingSummary,
};
use crate::tui::app::App;

/// Render the home screen
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Summary cards
            Constraint::Min(4),    // Recent transactions
            Constraint::Length(1), // Footer hint
        ])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    render_week_card(frame, app, cards[0]);
    render_month_card(frame, app, cards[1]);
    render_recent(frame, app, chunks[1]);

    let hint = Paragraph::new("[a] Add Expense   [t] Transactions   [i] Income   [q] Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(hint, chunks[2]);
}

/// "This Week" card with the week-over-week delta
fn render_week_card(frame: &mut Frame, app: &App, area: Rect) {
    let (start, end) = week_window(app.today);
    let (prev_start, prev_end) = prev_week_window(app.today);

    let total: Money = app
        .ledger
        .expenses_between(start, end)
        .iter()
        .map(|e| e.amount)
        .sum();
    let prev_total: Money = app
        .ledger
        .expenses_between(prev_start, prev_end)
        .iter()
        .map(|e| e.amount)
        .sum();
    let delta = PeriodDelta::compute(total, prev_total);

    let mut lines = vec![
        Line::from(Span::styled(
            "This Week",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            total.format_with_symbol(&app.settings.currency_symbol),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    if let Some(change) = delta.percent_change {
        let (arrow, color, word) = if delta.is_improvement() {
            ("↓", Color::Green, "less")
        } else {
            ("↑", Color::Red, "more")
        };
        lines.push(Line::from(Span::styled(
            format!("{} {:.0}% {} than last week", arrow, change.abs(), word),
            Style::default().fg(color),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" [w] ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// "This Month" card with the budget-used percentage
fn render_month_card(frame: &mut Frame, app: &App, area: Rect) {
    let (first, last) = month_bounds(app.today);
    let this_month = app.ledger.expenses_between(first, last);
    let summary = SpendingSummary::compute(
        &this_month,
        app.settings.monthly_budget,
        days_left_in_month(app.today),
    );

    let used_color = if summary.is_over_budget() {
        Color::Red
    } else {
        Color::Green
    };

    let lines = vec![
        Line::from(Span::styled(
            "This Month",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            summary
                .total_spent
                .format_with_symbol(&app.settings.currency_symbol),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{:.0}% of budget", summary.budget_used),
            Style::default().fg(used_color),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" [m] ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Recent transactions card
fn render_recent(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Recent Transactions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let recent = app.ledger.recent_expenses(3);
    if recent.is_empty() {
        let text = Paragraph::new(vec![
            Line::from("No transactions yet"),
            Line::from(Span::styled(
                "Press 'a' to add your first expense",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(text, area);
        return;
    }

    let symbol = &app.settings.currency_symbol;
    let mut lines = Vec::new();
    for expense in recent {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:24}", expense.description),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:13}", expense.category.label()),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(format!("{:10}", expense.date.format(&app.settings.date_format))),
            Span::styled(
                format!("{:>10}", expense.amount.format_with_symbol(symbol)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    lines.push(Line::from(Span::styled(
        "[t] View All Transactions",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
