//! Add/edit expense screen
//!
//! A four-field form: amount, description, category, optional trip.
//! Validation failures are surfaced in the form instead of silently
//! dropping the submission. Editing recreates the record: the original is
//! deleted when the edited form is saved.

use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{Category, Expense, ExpenseId, Money, Trip};
use crate::tui::app::App;
use crate::tui::widgets::{ChoiceSelect, TextInput};

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Amount,
    Description,
    Category,
    Trip,
}

impl ExpenseField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Amount => Self::Description,
            Self::Description => Self::Category,
            Self::Category => Self::Trip,
            Self::Trip => Self::Amount,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Amount => Self::Trip,
            Self::Description => Self::Amount,
            Self::Category => Self::Description,
            Self::Trip => Self::Category,
        }
    }
}

/// State for the expense form
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    /// Currently focused field
    pub focused_field: ExpenseField,

    /// Amount input
    pub amount_input: TextInput,

    /// Description input
    pub description_input: TextInput,

    /// Category selector
    pub category_select: ChoiceSelect,

    /// Trip selector (optional field)
    pub trip_select: ChoiceSelect,

    /// Record being edited, if any; saving deletes it and adds the rebuilt
    /// expense
    pub editing: Option<ExpenseId>,

    /// Date carried over from the record being edited
    pub date: Option<NaiveDate>,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    /// Create a fresh form
    pub fn new() -> Self {
        let mut state = Self {
            focused_field: ExpenseField::Amount,
            amount_input: TextInput::new("Amount").placeholder("0.00").numeric(),
            description_input: TextInput::new("Description")
                .placeholder("What did you spend on?"),
            category_select: ChoiceSelect::new(
                "Category",
                Category::ALL.iter().map(|c| c.label().to_string()).collect(),
            )
            .placeholder("Select category"),
            trip_select: ChoiceSelect::new(
                "Trip",
                Trip::ALL.iter().map(|t| t.label().to_string()).collect(),
            )
            .placeholder("(optional)"),
            editing: None,
            date: None,
            error_message: None,
        };
        state.sync_focus();
        state
    }

    /// Create a form pre-populated from an existing expense
    pub fn from_expense(expense: &Expense) -> Self {
        let mut state = Self::new();
        state.amount_input = TextInput::new("Amount")
            .placeholder("0.00")
            .numeric()
            .with_value(expense.amount.format_with_symbol(""));
        state.description_input = TextInput::new("Description")
            .placeholder("What did you spend on?")
            .with_value(expense.description.clone());

        let category_index = Category::ALL
            .iter()
            .position(|c| *c == expense.category)
            .unwrap_or(0);
        state.category_select = state.category_select.with_selected(category_index);

        if let Some(trip) = expense.trip {
            let trip_index = Trip::ALL.iter().position(|t| *t == trip).unwrap_or(0);
            state.trip_select = state.trip_select.with_selected(trip_index);
        }

        state.editing = Some(expense.id);
        state.date = Some(expense.date);
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
        self.amount_input.focused = self.focused_field == ExpenseField::Amount;
        self.description_input.focused = self.focused_field == ExpenseField::Description;
        self.category_select.focused = self.focused_field == ExpenseField::Category;
        self.trip_select.focused = self.focused_field == ExpenseField::Trip;
    }

    /// Build an expense from the form contents
    ///
    /// Returns a user-facing message when a required field is missing or
    /// invalid. `default_date` is used for new records; edits keep the
    /// original record's date.
    pub fn build(&self, default_date: NaiveDate) -> Result<Expense, String> {
        let amount = Money::parse(self.amount_input.value()).map_err(|e| e.to_string())?;
        if !amount.is_positive() {
            return Err("Amount must be greater than zero".to_string());
        }

        let description = self.description_input.value().trim();
        if description.is_empty() {
            return Err("Description is required".to_string());
        }

        let category = match self.category_select.selected {
            Some(index) => Category::ALL[index],
            None => return Err("Select a category".to_string()),
        };

        let mut expense = Expense::new(
            amount,
            description,
            category,
            self.date.unwrap_or(default_date),
        );
        if let Some(index) = self.trip_select.selected {
            expense = expense.with_trip(Trip::ALL[index]);
        }

        Ok(expense)
    }
}

/// Render the expense form
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Amount
            Constraint::Length(1),
            Constraint::Length(1), // Description
            Constraint::Length(1),
            Constraint::Length(1), // Category
            Constraint::Length(1),
            Constraint::Length(1), // Trip
            Constraint::Length(1),
            Constraint::Length(1), // Error
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.expense_form;
    frame.render_widget(&form.amount_input, rows[0]);
    frame.render_widget(&form.description_input, rows[2]);
    frame.render_widget(&form.category_select, rows[4]);
    frame.render_widget(&form.trip_select, rows[6]);

    if let Some(error) = &form.error_message {
        let error_line = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
        frame.render_widget(error_line, rows[8]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 24).unwrap()
    }

    fn filled_form() -> ExpenseFormState {
        let mut form = ExpenseFormState::new();
        form.amount_input = TextInput::new("Amount").numeric().with_value("25.50");
        form.description_input = TextInput::new("Description").with_value("Coffee");
        form.category_select.next(); // Food
        form
    }

    #[test]
    fn test_build_valid_form() {
        let expense = filled_form().build(today()).unwrap();
        assert_eq!(expense.amount.cents(), 2550);
        assert_eq!(expense.description, "Coffee");
        assert_eq!(expense.category, Category::Food);
        assert_eq!(expense.trip, None);
        assert_eq!(expense.date, today());
    }

    #[test]
    fn test_build_requires_amount() {
        let mut form = filled_form();
        form.amount_input.clear();
        assert_eq!(form.build(today()).unwrap_err(), "Amount is required");
    }

    #[test]
    fn test_build_rejects_zero_amount() {
        let mut form = filled_form();
        form.amount_input = TextInput::new("Amount").numeric().with_value("0.00");
        assert_eq!(
            form.build(today()).unwrap_err(),
            "Amount must be greater than zero"
        );
    }

    #[test]
    fn test_build_requires_description() {
        let mut form = filled_form();
        form.description_input.clear();
        assert_eq!(form.build(today()).unwrap_err(), "Description is required");
    }

    #[test]
    fn test_build_requires_category() {
        let mut form = filled_form();
        form.category_select.clear();
        assert_eq!(form.build(today()).unwrap_err(), "Select a category");
    }

    #[test]
    fn test_field_navigation_wraps() {
        let mut form = ExpenseFormState::new();
        assert_eq!(form.focused_field, ExpenseField::Amount);
        form.next_field();
        form.next_field();
        form.next_field();
        form.next_field();
        assert_eq!(form.focused_field, ExpenseField::Amount);
        form.prev_field();
        assert_eq!(form.focused_field, ExpenseField::Trip);
    }

    #[test]
    fn test_from_expense_keeps_original_date() {
        let original_date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let expense = Expense::new(
            Money::from_cents(1200),
            "Bus fare",
            Category::Transport,
            original_date,
        );
        let form = ExpenseFormState::from_expense(&expense);

        let rebuilt = form.build(today()).unwrap();
        assert_eq!(rebuilt.date, original_date);
        assert_eq!(rebuilt.category, Category::Transport);
        // The rebuilt record is a new one
        assert_ne!(rebuilt.id, expense.id);
    }
}
