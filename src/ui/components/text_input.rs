//! Single-line text input
//!
//! Accumulates keystrokes into a string with a character-indexed caret. The
//! list editor loads text into it, focuses it, forwards keys while editing and
//! reads the value back on commit.

use crate::constants::INPUT_PROMPT;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
    /// Caret position in characters
    cursor_position: usize,
    focused: bool,
    placeholder: Option<String>,
    /// Visible width in columns, the drawing area's width when `None`
    width: Option<u16>,
    style: Style,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value and move the caret to its end
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor_position = self.char_count();
    }

    /// Clear the value and the caret
    pub fn reset(&mut self) {
        self.value.clear();
        self.cursor_position = 0;
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn set_placeholder(&mut self, placeholder: Option<String>) {
        self.placeholder = placeholder;
    }

    pub fn width(&self) -> Option<u16> {
        self.width
    }

    pub fn set_width(&mut self, width: Option<u16>) {
        self.width = width;
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn insert_char(&mut self, c: char) {
        let byte_pos = self.byte_offset(self.cursor_position);
        self.value.insert(byte_pos, c);
        self.cursor_position += 1;
    }

    /// Apply a key to the value. Returns true when the key was consumed.
    ///
    /// A blurred input ignores every key, as does any alt combination.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.focused || key.modifiers.contains(KeyModifiers::ALT) {
            return false;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor_position = 0;
                    true
                }
                KeyCode::Char('e') => {
                    self.cursor_position = self.char_count();
                    true
                }
                KeyCode::Char('u') => {
                    let byte_pos = self.byte_offset(self.cursor_position);
                    self.value.replace_range(..byte_pos, "");
                    self.cursor_position = 0;
                    true
                }
                KeyCode::Char('k') => {
                    let byte_pos = self.byte_offset(self.cursor_position);
                    self.value.truncate(byte_pos);
                    true
                }
                _ => false,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    let byte_pos = self.byte_offset(self.cursor_position - 1);
                    self.value.remove(byte_pos);
                    self.cursor_position -= 1;
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor_position < self.char_count() {
                    let byte_pos = self.byte_offset(self.cursor_position);
                    self.value.remove(byte_pos);
                }
                true
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                if self.cursor_position < self.char_count() {
                    self.cursor_position += 1;
                }
                true
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                true
            }
            KeyCode::End => {
                self.cursor_position = self.char_count();
                true
            }
            _ => false,
        }
    }

    /// Number of value columns shown in an area `columns` wide.
    ///
    /// One column past the text is kept free for the caret. A configured
    /// width narrows the window further.
    fn window(&self, columns: u16) -> usize {
        let prompt = INPUT_PROMPT.chars().count();
        let available = usize::from(columns).saturating_sub(prompt + 1);
        match self.width {
            Some(width) => available.min(usize::from(width)),
            None => available,
        }
    }

    /// First visible character when the value is wider than the window
    fn scroll_offset(&self, window: usize) -> usize {
        self.cursor_position.saturating_sub(window)
    }

    /// Column of the caret relative to the start of an area `columns` wide
    pub fn caret_column(&self, columns: u16) -> u16 {
        let window = self.window(columns);
        let column = INPUT_PROMPT.chars().count() + self.cursor_position - self.scroll_offset(window);
        u16::try_from(column).unwrap_or(u16::MAX)
    }

    /// Text visible in an area `columns` wide, without the prompt
    pub fn visible_text(&self, columns: u16) -> String {
        let window = self.window(columns);
        self.value.chars().skip(self.scroll_offset(window)).take(window).collect()
    }

    /// Render the prompt and value (or placeholder) as a single line
    pub fn to_line(&self, columns: u16) -> Line<'static> {
        let prompt = Span::styled(INPUT_PROMPT, self.style);

        match (&self.placeholder, self.value.is_empty()) {
            (Some(placeholder), true) => {
                let shown: String = placeholder.chars().take(self.window(columns)).collect();
                Line::from(vec![prompt, Span::styled(shown, self.style.add_modifier(Modifier::DIM))])
            }
            _ => Line::from(vec![prompt, Span::styled(self.visible_text(columns), self.style)]),
        }
    }

    /// Draw the input into `rect` and place the terminal cursor when focused
    pub fn render(&self, f: &mut Frame, rect: Rect) {
        if rect.height == 0 {
            return;
        }

        f.render_widget(Paragraph::new(self.to_line(rect.width)), rect);

        if self.focused {
            let x = rect.x.saturating_add(self.caret_column(rect.width));
            if x < rect.x.saturating_add(rect.width) {
                f.set_cursor_position((x, rect.y));
            }
        }
    }
}
