//! Status bar view
//!
//! Shows the transient status message or the key hints for the current
//! screen, with the session date on the right.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Screen};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = Vec::new();

    if let Some(message) = &app.status_message {
        spans.push(Span::styled(
            format!(" {}", message),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    } else {
        spans.push(Span::styled(
            format!(" {}", hints(app.screen)),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let date = app.today.format(&app.settings.date_format).to_string();
    let used = spans.iter().map(|s| s.content.chars().count()).sum::<usize>();
    let padding = (area.width as usize)
        .saturating_sub(used)
        .saturating_sub(date.chars().count() + 1);
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(date, Style::default().fg(Color::Cyan)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Key hints per screen
fn hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Home => "a:Add  t:Transactions  w:Week  m:Month  i:Income  q:Quit",
        Screen::AddExpense => "Tab:Next field  ←/→:Choose  Enter:Save  Esc:Cancel",
        Screen::Transactions => {
            "j/k:Move  ←:Reveal actions  →:Hide  e:Edit  d:Delete  a:Add  Esc:Back"
        }
        Screen::WeeklySummary | Screen::MonthlySummary => "Esc:Back  q:Quit",
        Screen::Income => "a:Add source  j/k:Move  d:Delete  Esc:Back",
    }
}
