//! Text input widget
//!
//! A single-line text input with cursor editing. Amount fields run in
//! numeric mode, which accepts only digits and a single decimal point.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A single-line text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    content: String,
    /// Cursor position (byte offset; inputs are ASCII-edited)
    cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder shown while empty
    placeholder: String,
    /// Field label
    label: String,
    /// Restrict input to digits and one decimal point
    numeric: bool,
}

impl TextInput {
    /// Create a new text input
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Restrict input to a money amount
    pub fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }

    /// Pre-fill the content, placing the cursor at the end
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.content = value.into();
        self.cursor = self.content.len();
        self
    }

    /// The current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Whether the input is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Insert a character at the cursor, honoring numeric mode
    pub fn insert(&mut self, c: char) {
        if self.numeric {
            let valid = c.is_ascii_digit() || (c == '.' && !self.content.contains('.'));
            if !valid {
                return;
            }
        }
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.content[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor -= prev;
            self.content.remove(self.cursor);
        }
    }

    /// Move the cursor one character left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            let prev = self.content[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor -= prev;
        }
    }

    /// Move the cursor one character right
    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            let next = self.content[self.cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor += next;
        }
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = if self.label.is_empty() {
            0
        } else {
            self.label.chars().count() as u16 + 2
        };

        if !self.label.is_empty() {
            let label_line = Line::from(vec![
                Span::styled(self.label.as_str(), Style::default().fg(Color::Cyan)),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width);
        }

        let input_start = area.x + label_width;
        let (display_text, text_style) = if self.content.is_empty() {
            (
                self.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            )
        } else if self.focused {
            (self.content.as_str(), Style::default().fg(Color::White))
        } else {
            (self.content.as_str(), Style::default().fg(Color::Yellow))
        };

        buf.set_string(input_start, area.y, display_text, text_style);

        if self.focused {
            let cursor_col = self.content[..self.cursor].chars().count() as u16;
            let cursor_x = input_start + cursor_col;
            if cursor_x < area.x + area.width {
                let cursor_char = self.content[self.cursor..].chars().next().unwrap_or('_');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new("Description");
        for c in "tea".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "tea");

        input.backspace();
        assert_eq!(input.value(), "te");
    }

    #[test]
    fn test_cursor_movement_inserts_mid_string() {
        let mut input = TextInput::new("Description").with_value("cat");
        input.move_left();
        input.insert('r');
        assert_eq!(input.value(), "cart");
    }

    #[test]
    fn test_numeric_mode_filters() {
        let mut input = TextInput::new("Amount").numeric();
        for c in "2a5.5.0".chars() {
            input.insert(c);
        }
        // Letters dropped, second decimal point dropped
        assert_eq!(input.value(), "25.50");
    }

    #[test]
    fn test_clear() {
        let mut input = TextInput::new("Amount").with_value("25.50");
        input.clear();
        assert!(input.is_empty());
    }
}
