//! Application state for the TUI
//!
//! The App struct owns the ledger, the settings, and all per-screen state
//! needed for rendering and handling events.

use chrono::NaiveDate;
use ratatui::layout::Rect;

use crate::config::Settings;
use crate::ledger::Ledger;
use crate::models::{Expense, ExpenseId, IncomeId};
use crate::swipe::{SwipeState, SwipeTracker};

use super::views::add_expense::ExpenseFormState;
use super::views::income::IncomeFormState;

/// Which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    AddExpense,
    Transactions,
    WeeklySummary,
    MonthlySummary,
    Income,
}

impl Screen {
    /// Screen title shown in the header
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "ExpenseTracker",
            Self::AddExpense => "Add Expense",
            Self::Transactions => "All Transactions",
            Self::WeeklySummary => "Weekly Summary",
            Self::MonthlySummary => "Monthly Summary",
            Self::Income => "Income & Assets",
        }
    }
}

/// Main application state
pub struct App {
    /// The record store
    pub ledger: Ledger,

    /// Application settings
    pub settings: Settings,

    /// The day the session started; all summary windows anchor here
    pub today: NaiveDate,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active screen
    pub screen: Screen,

    /// Status message shown in the status bar
    pub status_message: Option<String>,

    /// Selected row in the transactions list
    pub selected_expense_index: usize,

    /// Selected row in the income list
    pub selected_income_index: usize,

    /// In-flight swipe gesture
    pub swipe: SwipeTracker,

    /// Which transaction row, if any, shows its actions
    pub swipe_state: SwipeState,

    /// Row the current gesture started on
    pub pressed_row: Option<ExpenseId>,

    /// Screen area of the transactions table body, set during render for
    /// mouse hit-testing
    pub transactions_area: Option<Rect>,

    /// Add/edit expense form state
    pub expense_form: ExpenseFormState,

    /// Screen to return to when the expense form closes
    pub expense_form_return: Screen,

    /// Income form state
    pub income_form: IncomeFormState,

    /// Whether the income screen shows its add form
    pub show_income_form: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(ledger: Ledger, settings: Settings, today: NaiveDate) -> Self {
        let swipe = SwipeTracker::new(settings.swipe_threshold);
        Self {
            ledger,
            settings,
            today,
            should_quit: false,
            screen: Screen::default(),
            status_message: None,
            selected_expense_index: 0,
            selected_income_index: 0,
            swipe,
            swipe_state: SwipeState::Idle,
            pressed_row: None,
            transactions_area: None,
            expense_form: ExpenseFormState::new(),
            expense_form_return: Screen::Home,
            income_form: IncomeFormState::new(),
            show_income_form: false,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a different screen, resetting its transient state
    pub fn go(&mut self, screen: Screen) {
        self.screen = screen;
        match screen {
            Screen::Transactions => {
                self.selected_expense_index = 0;
                self.swipe_state = SwipeState::Idle;
                self.pressed_row = None;
            }
            Screen::Income => {
                self.selected_income_index = 0;
                self.show_income_form = false;
            }
            _ => {}
        }
    }

    /// Open the expense form for a new record
    pub fn open_expense_form(&mut self, return_to: Screen) {
        self.expense_form = ExpenseFormState::new();
        self.expense_form_return = return_to;
        self.screen = Screen::AddExpense;
    }

    /// Open the expense form pre-populated from an existing record
    ///
    /// Records are never mutated in place: saving the edited form deletes
    /// the original and adds the recreated expense.
    pub fn open_expense_form_for_edit(&mut self, id: ExpenseId, return_to: Screen) {
        if let Some(expense) = self.ledger.expense(id) {
            self.expense_form = ExpenseFormState::from_expense(expense);
            self.expense_form_return = return_to;
            self.screen = Screen::AddExpense;
        }
    }

    /// Expenses as shown in the transactions list (most recent first)
    pub fn listed_expenses(&self) -> Vec<&Expense> {
        self.ledger.expenses_by_date()
    }

    /// The id of the expense row at `index` in the list, if any
    pub fn expense_id_at(&self, index: usize) -> Option<ExpenseId> {
        self.listed_expenses().get(index).map(|e| e.id)
    }

    /// The id of the currently selected expense row, if any
    pub fn selected_expense_id(&self) -> Option<ExpenseId> {
        self.expense_id_at(self.selected_expense_index)
    }

    /// The id of the currently selected income row, if any
    pub fn selected_income_id(&self) -> Option<IncomeId> {
        self.ledger
            .income_sources()
            .get(self.selected_income_index)
            .map(|i| i.id)
    }

    /// Move the list selection up
    pub fn move_up(&mut self) {
        match self.screen {
            Screen::Transactions => {
                self.selected_expense_index = self.selected_expense_index.saturating_sub(1);
            }
            Screen::Income => {
                self.selected_income_index = self.selected_income_index.saturating_sub(1);
            }
            _ => {}
        }
    }

    /// Move the list selection down, bounded by `max` rows
    pub fn move_down(&mut self, max: usize) {
        match self.screen {
            Screen::Transactions => {
                if self.selected_expense_index < max.saturating_sub(1) {
                    self.selected_expense_index += 1;
                }
            }
            Screen::Income => {
                if self.selected_income_index < max.saturating_sub(1) {
                    self.selected_income_index += 1;
                }
            }
            _ => {}
        }
    }

    /// Delete the expense whose actions are revealed
    pub fn delete_revealed_expense(&mut self) {
        if let Some(id) = self.swipe_state.revealed() {
            match self.ledger.delete_expense(id) {
                Ok(expense) => {
                    self.swipe_state = SwipeState::Idle;
                    let count = self.ledger.expenses().len();
                    if self.selected_expense_index >= count {
                        self.selected_expense_index = count.saturating_sub(1);
                    }
                    self.set_status(format!("Deleted \"{}\"", expense.description));
                }
                Err(e) => self.set_status(e.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use crate::sample::seeded_ledger;

    fn app() -> App {
        let today = NaiveDate::from_ymd_opt(2024, 1, 24).unwrap();
        App::new(seeded_ledger(today), Settings::default(), today)
    }

    #[test]
    fn test_listed_expenses_most_recent_first() {
        let app = app();
        let listed = app.listed_expenses();
        assert!(listed.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn test_selection_bounds() {
        let mut app = app();
        app.go(Screen::Transactions);
        let count = app.listed_expenses().len();

        app.move_up();
        assert_eq!(app.selected_expense_index, 0);

        for _ in 0..100 {
            app.move_down(count);
        }
        assert_eq!(app.selected_expense_index, count - 1);
    }

    #[test]
    fn test_go_resets_swipe_state() {
        let mut app = app();
        let id = app.expense_id_at(0).unwrap();
        app.swipe_state = SwipeState::Revealed(id);

        app.go(Screen::Transactions);
        assert_eq!(app.swipe_state, SwipeState::Idle);
    }

    #[test]
    fn test_delete_revealed_expense() {
        let mut app = app();
        app.go(Screen::Transactions);
        let before = app.ledger.expenses().len();
        let id = app.expense_id_at(0).unwrap();
        app.swipe_state = SwipeState::Revealed(id);

        app.delete_revealed_expense();

        assert_eq!(app.ledger.expenses().len(), before - 1);
        assert_eq!(app.swipe_state, SwipeState::Idle);
        assert!(app.status_message.as_deref().unwrap().starts_with("Deleted"));
    }

    #[test]
    fn test_edit_prefills_form() {
        let mut app = app();
        let id = app
            .ledger
            .add_expense(Expense::new(
                Money::from_cents(2550),
                "Coffee",
                Category::Food,
                app.today,
            ))
            .unwrap();

        app.open_expense_form_for_edit(id, Screen::Transactions);
        assert_eq!(app.screen, Screen::AddExpense);
        assert_eq!(app.expense_form.amount_input.value(), "25.50");
        assert_eq!(app.expense_form.editing, Some(id));
    }
}
