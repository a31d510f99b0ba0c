//! Text input widget
//!
//! A single-line text field with a character-indexed cursor. The owning
//! form writes the sanitized value back with [`TextInput::set_value`] after
//! each edit, so what is displayed is always what is stored.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position, in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Replace the content, keeping the cursor inside it
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.content = value.into();
        self.cursor = self.cursor.min(self.char_len());
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = (if self.label.is_empty() {
            0
        } else {
            self.label.chars().count() + 2
        }) as u16;

        let input_start = area.x + label_width;
        let input_width = area.width.saturating_sub(label_width) as usize;

        if !self.label.is_empty() {
            let label_line = Line::from(vec![
                Span::styled(self.label.as_str(), Style::default().fg(Color::Cyan)),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width);
        }

        if input_width == 0 {
            return;
        }

        // Scroll long values so the cursor stays visible
        let skip = (self.cursor + 1).saturating_sub(input_width);
        let (display_text, text_style) = if self.content.is_empty() && !self.focused {
            (self.placeholder.clone(), Style::default().fg(Color::DarkGray))
        } else {
            let visible: String = self.content.chars().skip(skip).take(input_width).collect();
            let color = if self.focused { Color::White } else { Color::Yellow };
            (visible, Style::default().fg(color))
        };

        buf.set_stringn(input_start, area.y, &display_text, input_width, text_style);

        if self.focused {
            let cursor_x = input_start + (self.cursor - skip) as u16;
            if cursor_x < area.x + area.width {
                let cursor_char = self.content.chars().nth(self.cursor).unwrap_or('_');
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
        let mut input = TextInput::new();
        for c in "Jane".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "Jane");
        assert_eq!(input.cursor, 4);

        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "Jae");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new();
        for c in "José".chars() {
            input.insert(c);
        }
        input.move_start();
        input.move_right();
        input.delete();
        assert_eq!(input.value(), "Jsé");
        input.move_end();
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn test_set_value_clamps_cursor() {
        let mut input = TextInput::new();
        for c in "555-CALL".chars() {
            input.insert(c);
        }
        input.set_value("555-");
        assert_eq!(input.cursor, 4);
    }
}
