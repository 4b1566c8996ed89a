//! Form input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input mode for text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// A text input field with cursor support. At most one field is in
/// `Editing` mode at a time; the wizard app enforces that.
#[derive(Debug, Clone)]
pub struct InputField {
    /// Current input value.
    value: String,
    /// Cursor position (byte index).
    cursor: usize,
    /// Hint shown while the field is empty.
    pub hint: String,
    /// Current input mode.
    pub mode: InputMode,
    /// Hard length cap in characters (the CNP field caps at 13).
    max_len: Option<usize>,
}

impl InputField {
    pub fn new(default: String, hint: &str, max_len: Option<usize>) -> Self {
        let cursor = default.len();
        Self {
            value: default,
            cursor,
            hint: hint.to_string(),
            mode: InputMode::Normal,
            max_len,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_value(&mut self, value: String) {
        self.cursor = value.len();
        self.value = value;
    }

    /// Handle a key event while editing; returns true if the event was
    /// consumed (the value or cursor may have changed).
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                // Ctrl+U clears the line.
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    if c == 'u' {
                        self.value.clear();
                        self.cursor = 0;
                        return true;
                    }
                    return false;
                }
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                self.delete_char_backward();
                true
            }
            KeyCode::Delete => {
                self.delete_char_forward();
                true
            }
            KeyCode::Left => {
                self.move_cursor_left();
                true
            }
            KeyCode::Right => {
                self.move_cursor_right();
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.value.len();
                true
            }
            _ => false,
        }
    }

    fn insert_char(&mut self, c: char) {
        if let Some(cap) = self.max_len {
            if self.value.chars().count() >= cap {
                return;
            }
        }
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn delete_char_backward(&mut self) {
        if self.cursor > 0 {
            // Find the previous character boundary.
            let prev = self.value[..self.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.value.remove(prev);
            self.cursor = prev;
        }
    }

    fn delete_char_forward(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.value[..self.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    fn move_cursor_right(&mut self) {
        if self.cursor < self.value.len() {
            let next = self.value[self.cursor..]
                .chars()
                .next()
                .map(|c| self.cursor + c.len_utf8())
                .unwrap_or(self.value.len());
            self.cursor = next;
        }
    }
}
