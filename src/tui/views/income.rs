//! Income screen
//!
//! Shows the monthly-equivalent income total, the list of sources, and an
//! inline add form (source, amount, frequency, kind).

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::{Frequency, IncomeKind, IncomeSource, Money};
use crate::summary::IncomeSummary;
use crate::tui::app::App;
use crate::tui::widgets::{ChoiceSelect, TextInput};

/// Which field is currently focused in the income form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IncomeField {
    #[default]
    Source,
    Amount,
    Frequency,
    Kind,
}

impl IncomeField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Source => Self::Amount,
            Self::Amount => Self::Frequency,
            Self::Frequency => Self::Kind,
            Self::Kind => Self::Source,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Source => Self::Kind,
            Self::Amount => Self::Source,
            Self::Frequency => Self::Amount,
            Self::Kind => Self::Frequency,
        }
    }
}

/// State for the income form
#[derive(Debug, Clone)]
pub struct IncomeFormState {
    /// Currently focused field
    pub focused_field: IncomeField,

    /// Source input
    pub source_input: TextInput,

    /// Amount input
    pub amount_input: TextInput,

    /// Frequency selector (defaults to Monthly)
    pub frequency_select: ChoiceSelect,

    /// Kind selector (defaults to Salary)
    pub kind_select: ChoiceSelect,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for IncomeFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl IncomeFormState {
    /// Create a fresh form
    pub fn new() -> Self {
        let monthly = Frequency::ALL
            .iter()
            .position(|f| *f == Frequency::Monthly)
            .unwrap_or(0);
        let mut state = Self {
            focused_field: IncomeField::Source,
            source_input: TextInput::new("Source")
                .placeholder("e.g., Main Job, Freelance, Investments"),
            amount_input: TextInput::new("Amount").placeholder("0.00").numeric(),
            frequency_select: ChoiceSelect::new(
                "Frequency",
                Frequency::ALL.iter().map(|f| f.label().to_string()).collect(),
            )
            .with_selected(monthly),
            kind_select: ChoiceSelect::new(
                "Type",
                IncomeKind::ALL.iter().map(|k| k.label().to_string()).collect(),
            )
            .with_selected(0),
            error_message: None,
        };
        state.sync_focus();
        state
    }

    /// Move focus to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.sync_focus();
    }

    /// Move focus to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        self.source_input.focused = self.focused_field == IncomeField::Source;
        self.amount_input.focused = self.focused_field == IncomeField::Amount;
        self.frequency_select.focused = self.focused_field == IncomeField::Frequency;
        self.kind_select.focused = self.focused_field == IncomeField::Kind;
    }

    /// Build an income source from the form contents
    pub fn build(&self) -> Result<IncomeSource, String> {
        let source = self.source_input.value().trim();
        if source.is_empty() {
            return Err("Income source is required".to_string());
        }

        let amount = Money::parse(self.amount_input.value()).map_err(|e| e.to_string())?;
        if !amount.is_positive() {
            return Err("Amount must be greater than zero".to_string());
        }

        let frequency = self
            .frequency_select
            .selected
            .map(|i| Frequency::ALL[i])
            .unwrap_or_default();
        let kind = self
            .kind_select
            .selected
            .map(|i| IncomeKind::ALL[i])
            .unwrap_or_default();

        Ok(IncomeSource::new(source, amount, frequency, kind))
    }
}

/// Render the income screen
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Total card
            Constraint::Min(3),    // Form or list
        ])
        .split(area);

    render_total(frame, app, chunks[0]);

    if app.show_income_form {
        render_form(frame, app, chunks[1]);
    } else {
        render_list(frame, app, chunks[1]);
    }
}

/// Render the monthly-equivalent total card
fn render_total(frame: &mut Frame, app: &App, area: Rect) {
    let summary = IncomeSummary::compute(app.ledger.income_sources());
    let symbol = &app.settings.currency_symbol;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = vec![
        ratatui::text::Line::from(ratatui::text::Span::styled(
            summary.total_monthly.format_with_symbol(symbol),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        ratatui::text::Line::from(ratatui::text::Span::styled(
            "Total Monthly Income",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Render the add-income form
fn render_form(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Add New Income Source ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Source
            Constraint::Length(1),
            Constraint::Length(1), // Amount
            Constraint::Length(1),
            Constraint::Length(1), // Frequency
            Constraint::Length(1),
            Constraint::Length(1), // Kind
            Constraint::Length(1),
            Constraint::Length(1), // Error
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.income_form;
    frame.render_widget(&form.source_input, rows[0]);
    frame.render_widget(&form.amount_input, rows[2]);
    frame.render_widget(&form.frequency_select, rows[4]);
    frame.render_widget(&form.kind_select, rows[6]);

    if let Some(error) = &form.error_message {
        let error_line = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
        frame.render_widget(error_line, rows[8]);
    }
}

/// Render the income source table
fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let sources = app.ledger.income_sources();
    if sources.is_empty() {
        let text = Paragraph::new("No income sources added yet. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Min(16),    // Source
        Constraint::Length(12), // Type
        Constraint::Length(10), // Frequency
        Constraint::Length(12), // Amount
    ];

    let header = Row::new(vec![
        Cell::from("Source").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Type").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Frequency").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let symbol = app.settings.currency_symbol.clone();
    let rows: Vec<Row> = sources
        .iter()
        .map(|source| {
            Row::new(vec![
                Cell::from(source.source.clone()),
                Cell::from(source.kind.label()),
                Cell::from(source.frequency.label()),
                Cell::from(source.amount.format_with_symbol(&symbol))
                    .style(Style::default().fg(Color::Green)),
            ])
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
    state.select(Some(app.selected_income_index));

    frame.render_stateful_widget(table, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> IncomeFormState {
        let mut form = IncomeFormState::new();
        form.source_input = TextInput::new("Source").with_value("Main Job");
        form.amount_input = TextInput::new("Amount").numeric().with_value("5000");
        form
    }

    #[test]
    fn test_build_valid_form_uses_defaults() {
        let income = filled_form().build().unwrap();
        assert_eq!(income.source, "Main Job");
        assert_eq!(income.amount.cents(), 500000);
        assert_eq!(income.frequency, Frequency::Monthly);
        assert_eq!(income.kind, IncomeKind::Salary);
    }

    #[test]
    fn test_build_requires_source() {
        let mut form = filled_form();
        form.source_input.clear();
        assert_eq!(form.build().unwrap_err(), "Income source is required");
    }

    #[test]
    fn test_build_requires_amount() {
        let mut form = filled_form();
        form.amount_input.clear();
        assert_eq!(form.build().unwrap_err(), "Amount is required");
    }

    #[test]
    fn test_frequency_cycles() {
        let mut form = IncomeFormState::new();
        assert_eq!(form.frequency_select.value(), Some("Monthly"));
        form.frequency_select.next();
        assert_eq!(form.frequency_select.value(), Some("Yearly"));

        form.source_input = TextInput::new("Source").with_value("Dividends");
        form.amount_input = TextInput::new("Amount").numeric().with_value("1200");
        let income = form.build().unwrap();
        assert_eq!(income.frequency, Frequency::Yearly);
        assert_eq!(income.monthly_equivalent().cents(), 10000);
    }
}
