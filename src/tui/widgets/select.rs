//! Choice select widget
//!
//! The terminal counterpart of a dropdown: a fixed option list cycled with
//! the left/right arrows. Selection may start empty so required fields can
//! be validated at submit time.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A cycling option selector
#[derive(Debug, Clone)]
pub struct ChoiceSelect {
    /// Field label
    label: String,
    /// Options, in display order
    options: Vec<String>,
    /// Currently selected option index, if any
    pub selected: Option<usize>,
    /// Whether the select is focused
    pub focused: bool,
    /// Placeholder shown while nothing is selected
    placeholder: String,
}

impl ChoiceSelect {
    /// Create a select over the given options, initially unselected
    pub fn new(label: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            label: label.into(),
            options,
            selected: None,
            focused: false,
            placeholder: String::new(),
        }
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Pre-select an option
    pub fn with_selected(mut self, index: usize) -> Self {
        if index < self.options.len() {
            self.selected = Some(index);
        }
        self
    }

    /// Advance to the next option, wrapping; selects the first option when
    /// nothing is selected yet
    pub fn next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % self.options.len(),
            None => 0,
        });
    }

    /// Go back to the previous option, wrapping
    pub fn prev(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => self.options.len() - 1,
            Some(i) => i - 1,
        });
    }

    /// Clear the selection
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// The selected option's label, if any
    pub fn value(&self) -> Option<&str> {
        self.selected.map(|i| self.options[i].as_str())
    }
}

impl Widget for &ChoiceSelect {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(self.label.as_str(), Style::default().fg(Color::Cyan)),
            Span::raw(": "),
        ];

        let arrow_style = if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        match self.value() {
            Some(value) => {
                spans.push(Span::styled("◀ ", arrow_style));
                spans.push(Span::styled(
                    value.to_string(),
                    if self.focused {
                        Style::default().fg(Color::White)
                    } else {
                        Style::default().fg(Color::Yellow)
                    },
                ));
                spans.push(Span::styled(" ▶", arrow_style));
            }
            None => {
                spans.push(Span::styled(
                    self.placeholder.as_str(),
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select() -> ChoiceSelect {
        ChoiceSelect::new(
            "Category",
            vec!["Food".into(), "Transport".into(), "Bills".into()],
        )
    }

    #[test]
    fn test_starts_unselected() {
        let select = select();
        assert_eq!(select.selected, None);
        assert_eq!(select.value(), None);
    }

    #[test]
    fn test_next_wraps() {
        let mut select = select();
        select.next();
        assert_eq!(select.value(), Some("Food"));
        select.next();
        select.next();
        select.next();
        assert_eq!(select.value(), Some("Food"));
    }

    #[test]
    fn test_prev_from_unselected_goes_to_last() {
        let mut select = select();
        select.prev();
        assert_eq!(select.value(), Some("Bills"));
    }

    #[test]
    fn test_with_selected_and_clear() {
        let mut select = select().with_selected(1);
        assert_eq!(select.value(), Some("Transport"));
        select.clear();
        assert_eq!(select.value(), None);
    }

    #[test]
    fn test_with_selected_out_of_range_ignored() {
        let select = select().with_selected(99);
        assert_eq!(select.selected, None);
    }
}
