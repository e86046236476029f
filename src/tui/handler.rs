//! Event handler for the TUI
//!
//! Routes keyboard and mouse events to the appropriate handlers based on
//! the active screen. Mouse presses, drags, and releases on the
//! transactions list feed the swipe state machine.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::app::{App, Screen};
use super::event::Event;
use super::views::add_expense::ExpenseField;
use super::views::income::{IncomeField, IncomeFormState};
use super::views::transactions::{self, RowAction};
use crate::swipe::SwipeState;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => {
            handle_mouse_event(app, mouse);
            Ok(())
        }
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Status messages are transient; any keypress clears the last one
    app.clear_status();

    match app.screen {
        Screen::Home => handle_home_key(app, key),
        Screen::AddExpense => handle_expense_form_key(app, key),
        Screen::Transactions => handle_transactions_key(app, key),
        Screen::WeeklySummary | Screen::MonthlySummary => handle_summary_key(app, key),
        Screen::Income => {
            if app.show_income_form {
                handle_income_form_key(app, key)
            } else {
                handle_income_list_key(app, key)
            }
        }
    }

    Ok(())
}

/// Handle keys on the home screen
fn handle_home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('a') => app.open_expense_form(Screen::Home),
        KeyCode::Char('t') => app.go(Screen::Transactions),
        KeyCode::Char('w') => app.go(Screen::WeeklySummary),
        KeyCode::Char('m') => app.go(Screen::MonthlySummary),
        KeyCode::Char('i') => app.go(Screen::Income),
        _ => {}
    }
}

/// Handle keys on the summary screens
fn handle_summary_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => app.go(Screen::Home),
        _ => {}
    }
}

/// Handle keys on the transactions list
fn handle_transactions_key(app: &mut App, key: KeyEvent) {
    let count = app.listed_expenses().len();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),

        // Esc first hides revealed actions, then leaves the screen
        KeyCode::Esc => {
            if app.swipe_state != SwipeState::Idle {
                app.swipe_state = SwipeState::Idle;
            } else {
                app.go(Screen::Home);
            }
        }

        KeyCode::Char('j') | KeyCode::Down => app.move_down(count),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        KeyCode::Char('a') | KeyCode::Char('n') => app.open_expense_form(Screen::Transactions),

        // Keyboard mirror of the swipe gesture on the selected row
        KeyCode::Char('h') | KeyCode::Left => {
            if let Some(id) = app.selected_expense_id() {
                app.swipe_state = SwipeState::Revealed(id);
            }
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.swipe_state = SwipeState::Idle;
        }

        // Actions apply to the revealed row only
        KeyCode::Char('e') => {
            if let Some(id) = app.swipe_state.revealed() {
                app.open_expense_form_for_edit(id, Screen::Transactions);
            }
        }
        KeyCode::Char('d') => app.delete_revealed_expense(),

        _ => {}
    }
}

/// Handle keys in the expense form
fn handle_expense_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            let return_to = app.expense_form_return;
            app.go(return_to);
        }
        KeyCode::Tab | KeyCode::Down => app.expense_form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.expense_form.prev_field(),
        KeyCode::Enter => submit_expense_form(app),

        KeyCode::Left => match app.expense_form.focused_field {
            ExpenseField::Amount => app.expense_form.amount_input.move_left(),
            ExpenseField::Description => app.expense_form.description_input.move_left(),
            ExpenseField::Category => app.expense_form.category_select.prev(),
            ExpenseField::Trip => app.expense_form.trip_select.prev(),
        },
        KeyCode::Right => match app.expense_form.focused_field {
            ExpenseField::Amount => app.expense_form.amount_input.move_right(),
            ExpenseField::Description => app.expense_form.description_input.move_right(),
            ExpenseField::Category => app.expense_form.category_select.next(),
            ExpenseField::Trip => app.expense_form.trip_select.next(),
        },

        KeyCode::Backspace => match app.expense_form.focused_field {
            ExpenseField::Amount => app.expense_form.amount_input.backspace(),
            ExpenseField::Description => app.expense_form.description_input.backspace(),
            // The optional trip can be cleared back to empty
            ExpenseField::Trip => app.expense_form.trip_select.clear(),
            ExpenseField::Category => {}
        },

        KeyCode::Char(c) => match app.expense_form.focused_field {
            ExpenseField::Amount => app.expense_form.amount_input.insert(c),
            ExpenseField::Description => app.expense_form.description_input.insert(c),
            ExpenseField::Category | ExpenseField::Trip => {}
        },

        _ => {}
    }
}

/// Submit the expense form; validation failures stay in the form
fn submit_expense_form(app: &mut App) {
    match app.expense_form.build(app.today) {
        Ok(expense) => {
            let editing = app.expense_form.editing;
            if let Some(id) = editing {
                // Edit is delete-and-recreate
                if let Err(e) = app.ledger.delete_expense(id) {
                    app.expense_form.error_message = Some(e.to_string());
                    return;
                }
            }
            match app.ledger.add_expense(expense) {
                Ok(_) => {
                    let message = if editing.is_some() {
                        "Expense updated"
                    } else {
                        "Expense added"
                    };
                    let return_to = app.expense_form_return;
                    app.go(return_to);
                    app.set_status(message);
                }
                Err(e) => app.expense_form.error_message = Some(e.to_string()),
            }
        }
        Err(message) => app.expense_form.error_message = Some(message),
    }
}

/// Handle keys on the income list
fn handle_income_list_key(app: &mut App, key: KeyEvent) {
    let count = app.ledger.income_sources().len();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Esc => app.go(Screen::Home),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(count),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        KeyCode::Char('a') | KeyCode::Char('n') => {
            app.income_form = IncomeFormState::new();
            app.show_income_form = true;
        }

        KeyCode::Char('d') => {
            if let Some(id) = app.selected_income_id() {
                match app.ledger.delete_income(id) {
                    Ok(source) => {
                        let remaining = app.ledger.income_sources().len();
                        if app.selected_income_index >= remaining {
                            app.selected_income_index = remaining.saturating_sub(1);
                        }
                        app.set_status(format!("Deleted \"{}\"", source.source));
                    }
                    Err(e) => app.set_status(e.to_string()),
                }
            }
        }

        _ => {}
    }
}

/// Handle keys in the income form
fn handle_income_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.show_income_form = false,
        KeyCode::Tab | KeyCode::Down => app.income_form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.income_form.prev_field(),
        KeyCode::Enter => submit_income_form(app),

        KeyCode::Left => match app.income_form.focused_field {
            IncomeField::Source => app.income_form.source_input.move_left(),
            IncomeField::Amount => app.income_form.amount_input.move_left(),
            IncomeField::Frequency => app.income_form.frequency_select.prev(),
            IncomeField::Kind => app.income_form.kind_select.prev(),
        },
        KeyCode::Right => match app.income_form.focused_field {
            IncomeField::Source => app.income_form.source_input.move_right(),
            IncomeField::Amount => app.income_form.amount_input.move_right(),
            IncomeField::Frequency => app.income_form.frequency_select.next(),
            IncomeField::Kind => app.income_form.kind_select.next(),
        },

        KeyCode::Backspace => match app.income_form.focused_field {
            IncomeField::Source => app.income_form.source_input.backspace(),
            IncomeField::Amount => app.income_form.amount_input.backspace(),
            IncomeField::Frequency | IncomeField::Kind => {}
        },

        KeyCode::Char(c) => match app.income_form.focused_field {
            IncomeField::Source => app.income_form.source_input.insert(c),
            IncomeField::Amount => app.income_form.amount_input.insert(c),
            IncomeField::Frequency | IncomeField::Kind => {}
        },

        _ => {}
    }
}

/// Submit the income form; validation failures stay in the form
fn submit_income_form(app: &mut App) {
    match app.income_form.build() {
        Ok(income) => match app.ledger.add_income(income) {
            Ok(_) => {
                app.show_income_form = false;
                app.set_status("Income source added");
            }
            Err(e) => app.income_form.error_message = Some(e.to_string()),
        },
        Err(message) => app.income_form.error_message = Some(message),
    }
}

/// Handle a mouse event
///
/// Only the transactions list reacts to the mouse: a press starts a
/// gesture on the row under the cursor, drags record the latest column,
/// and release evaluates the gesture. Presses on a revealed row's action
/// zones trigger the action instead of starting a gesture.
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if app.screen != Screen::Transactions {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some((index, id)) = transactions::expense_at(app, mouse.column, mouse.row) else {
                return;
            };
            app.selected_expense_index = index;

            if app.swipe_state.is_revealed(id) {
                if let Some(area) = app.transactions_area {
                    match transactions::action_at(area, mouse.column) {
                        Some(RowAction::Edit) => {
                            app.open_expense_form_for_edit(id, Screen::Transactions);
                            return;
                        }
                        Some(RowAction::Delete) => {
                            app.delete_revealed_expense();
                            return;
                        }
                        None => {}
                    }
                }
            }

            app.pressed_row = Some(id);
            app.swipe.begin(mouse.column as i32);
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if app.swipe.active() {
                app.swipe.update(mouse.column as i32);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(row) = app.pressed_row.take() {
                app.swipe_state = app.swipe.finish(row, app.swipe_state);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::sample::seeded_ledger;
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    fn app() -> App {
        let today = NaiveDate::from_ymd_opt(2024, 1, 24).unwrap();
        App::new(seeded_ledger(today), Settings::default(), today)
    }

    fn key(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            key(app, KeyCode::Char(c));
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_home_navigation() {
        let mut app = app();
        key(&mut app, KeyCode::Char('t'));
        assert_eq!(app.screen, Screen::Transactions);

        key(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Home);

        key(&mut app, KeyCode::Char('w'));
        assert_eq!(app.screen, Screen::WeeklySummary);
        key(&mut app, KeyCode::Esc);

        key(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_add_expense_through_form() {
        let mut app = app();
        let before = app.ledger.expenses().len();

        key(&mut app, KeyCode::Char('a'));
        assert_eq!(app.screen, Screen::AddExpense);

        type_str(&mut app, "12.00");
        key(&mut app, KeyCode::Tab);
        type_str(&mut app, "Bus fare");
        key(&mut app, KeyCode::Tab);
        key(&mut app, KeyCode::Right); // select first category
        key(&mut app, KeyCode::Enter);

        assert_eq!(app.screen, Screen::Home);
        assert_eq!(app.ledger.expenses().len(), before + 1);
        assert_eq!(app.status_message.as_deref(), Some("Expense added"));
    }

    #[test]
    fn test_form_surfaces_validation_error() {
        let mut app = app();
        key(&mut app, KeyCode::Char('a'));
        key(&mut app, KeyCode::Enter);

        assert_eq!(app.screen, Screen::AddExpense);
        assert!(app.expense_form.error_message.is_some());
    }

    #[test]
    fn test_keyboard_reveal_and_delete() {
        let mut app = app();
        key(&mut app, KeyCode::Char('t'));
        let before = app.ledger.expenses().len();
        let id = app.selected_expense_id().unwrap();

        key(&mut app, KeyCode::Left);
        assert!(app.swipe_state.is_revealed(id));

        key(&mut app, KeyCode::Char('d'));
        assert_eq!(app.ledger.expenses().len(), before - 1);
        assert_eq!(app.swipe_state, SwipeState::Idle);
    }

    #[test]
    fn test_delete_without_reveal_is_noop() {
        let mut app = app();
        key(&mut app, KeyCode::Char('t'));
        let before = app.ledger.expenses().len();

        key(&mut app, KeyCode::Char('d'));
        assert_eq!(app.ledger.expenses().len(), before);
    }

    #[test]
    fn test_mouse_swipe_reveals_row() {
        let mut app = app();
        key(&mut app, KeyCode::Char('t'));
        // Simulate the rendered table area
        app.transactions_area = Some(Rect::new(0, 3, 200, 20));

        // First body row is at y = 5; drag leftward by 60 columns
        handle_mouse_event(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 180, 5));
        handle_mouse_event(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), 120, 5));
        handle_mouse_event(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 120, 5));

        let id = app.expense_id_at(0).unwrap();
        assert!(app.swipe_state.is_revealed(id));

        // Drag rightward past the threshold hides it again
        handle_mouse_event(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 30, 5));
        handle_mouse_event(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), 90, 5));
        handle_mouse_event(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 90, 5));
        assert_eq!(app.swipe_state, SwipeState::Idle);
    }

    #[test]
    fn test_mouse_short_drag_is_noop() {
        let mut app = app();
        key(&mut app, KeyCode::Char('t'));
        app.transactions_area = Some(Rect::new(0, 3, 200, 20));

        handle_mouse_event(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 100, 5));
        handle_mouse_event(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), 80, 5));
        handle_mouse_event(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 80, 5));

        assert_eq!(app.swipe_state, SwipeState::Idle);
    }

    #[test]
    fn test_income_form_submission() {
        let mut app = app();
        key(&mut app, KeyCode::Char('i'));
        assert_eq!(app.screen, Screen::Income);
        let before = app.ledger.income_sources().len();

        key(&mut app, KeyCode::Char('a'));
        assert!(app.show_income_form);

        type_str(&mut app, "Side Gig");
        key(&mut app, KeyCode::Tab);
        type_str(&mut app, "250");
        key(&mut app, KeyCode::Enter);

        assert!(!app.show_income_form);
        assert_eq!(app.ledger.income_sources().len(), before + 1);
    }

    #[test]
    fn test_income_form_escape_cancels() {
        let mut app = app();
        key(&mut app, KeyCode::Char('i'));
        key(&mut app, KeyCode::Char('a'));
        key(&mut app, KeyCode::Esc);
        assert!(!app.show_income_form);
        assert_eq!(app.screen, Screen::Income);
    }
}
