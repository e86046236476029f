//! TUI views module
//!
//! One module per screen, plus the shared header and status bar.

pub mod add_expense;
pub mod home;
pub mod income;
pub mod monthly;
pub mod status_bar;
pub mod transactions;
pub mod weekly;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{App, Screen};
use super::layout::AppLayout;
use crate::summary::SpendingSummary;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header);

    match app.screen {
        Screen::Home => home::render(frame, app, layout.content),
        Screen::AddExpense => add_expense::render(frame, app, layout.content),
        Screen::Transactions => transactions::render(frame, app, layout.content),
        Screen::WeeklySummary => weekly::render(frame, app, layout.content),
        Screen::MonthlySummary => monthly::render(frame, app, layout.content),
        Screen::Income => income::render(frame, app, layout.content),
    }

    status_bar::render(frame, app, layout.status_bar);
}

/// Render the screen header
fn render_header(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let title = Paragraph::new(Line::from(Span::styled(
        app.screen.title(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .block(block);

    frame.render_widget(title, area);
}

/// Category breakdown lines shared by the summary screens
pub(crate) fn breakdown_lines<'a>(summary: &SpendingSummary, symbol: &str) -> Vec<Line<'a>> {
    if summary.categories.is_empty() {
        return vec![Line::from(Span::styled(
            "No spending in this period",
            Style::default().fg(Color::DarkGray),
        ))];
    }

    summary
        .categories
        .iter()
        .map(|share| {
            Line::from(vec![
                Span::styled("● ", Style::default().fg(Color::Cyan)),
                Span::raw(format!("{:13} ", share.category.label())),
                Span::styled(
                    format!("{:>10}", share.amount.format_with_symbol(symbol)),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {:>3}%", share.percentage),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect()
}
