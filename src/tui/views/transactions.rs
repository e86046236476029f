//! Transactions list screen
//!
//! The swipe-reveal list. Dragging a row leftward past the threshold
//! reveals its edit/delete actions in place of the amount columns;
//! dragging rightward hides them again. Keyboard left/right mirrors the
//! gesture for the selected row.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::{Expense, ExpenseId};
use crate::tui::app::App;

/// Action zones on a revealed row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

/// Rows begin this many lines below the table area's top edge (border plus
/// header row).
const ROW_OFFSET: u16 = 2;

/// Map a mouse position inside the table area to a row index
pub fn row_at(area: Rect, x: u16, y: u16) -> Option<usize> {
    if x <= area.x || x >= area.x + area.width.saturating_sub(1) {
        return None;
    }
    if y < area.y + ROW_OFFSET || y >= area.y + area.height.saturating_sub(1) {
        return None;
    }
    Some((y - area.y - ROW_OFFSET) as usize)
}

/// Map a mouse column on a revealed row to one of its action zones
pub fn action_at(area: Rect, x: u16) -> Option<RowAction> {
    let right = area.x + area.width;
    if x >= right.saturating_sub(13) {
        Some(RowAction::Delete)
    } else if x >= right.saturating_sub(26) {
        Some(RowAction::Edit)
    } else {
        None
    }
}

/// Render the transactions list
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    // Remember where the table body is for mouse hit-testing
    app.transactions_area = Some(area);

    let expenses = app.listed_expenses();
    if expenses.is_empty() {
        let text = Paragraph::new("No transactions yet. Press 'a' to add your first expense.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(10), // Date
        Constraint::Min(14),    // Description
        Constraint::Length(13), // Category / edit action
        Constraint::Length(10), // Trip
        Constraint::Length(12), // Amount / delete action
    ];

    let header = Row::new(vec![
        Cell::from("Date").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Description").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Trip").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let symbol = app.settings.currency_symbol.clone();
    let date_format = app.settings.date_format.clone();
    let swipe_state = app.swipe_state;

    let rows: Vec<Row> = expenses
        .iter()
        .map(|expense| {
            if swipe_state.is_revealed(expense.id) {
                revealed_row(expense, &date_format)
            } else {
                normal_row(expense, &symbol, &date_format)
            }
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_expense_index));

    frame.render_stateful_widget(table, area, &mut state);
}

/// A list row in its resting state
fn normal_row<'a>(expense: &'a Expense, symbol: &str, date_format: &str) -> Row<'a> {
    let trip = expense.trip.map(|t| t.label()).unwrap_or("-");
    Row::new(vec![
        Cell::from(expense.date.format(date_format).to_string()),
        Cell::from(expense.description.clone()),
        Cell::from(expense.category.label())
            .style(Style::default().fg(Color::Cyan)),
        Cell::from(trip).style(Style::default().fg(Color::Magenta)),
        Cell::from(expense.amount.format_with_symbol(symbol))
            .style(Style::default().add_modifier(Modifier::BOLD)),
    ])
}

/// A list row with its actions revealed
fn revealed_row<'a>(expense: &'a Expense, date_format: &str) -> Row<'a> {
    Row::new(vec![
        Cell::from(expense.date.format(date_format).to_string())
            .style(Style::default().fg(Color::DarkGray)),
        Cell::from(format!("◀ {}", expense.description))
            .style(Style::default().fg(Color::DarkGray)),
        Cell::from("[e] Edit").style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Cell::from(""),
        Cell::from("[d] Delete").style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// The expense id at a mouse position, if it lands on a row
pub fn expense_at(app: &App, x: u16, y: u16) -> Option<(usize, ExpenseId)> {
    let area = app.transactions_area?;
    let index = row_at(area, x, y)?;
    let id = app.expense_id_at(index)?;
    Some((index, id))
}
