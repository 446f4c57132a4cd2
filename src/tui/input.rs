//! Single-line text editing for form fields.

use crossterm::event::KeyCode;

/// A text buffer with a cursor. Cursor positions are char indices; edits keep
/// the byte offset in sync for multi-byte input.
#[derive(Debug, Clone, Default)]
pub struct InputField {
    pub value: String,
    pub cursor: usize,
}

impl InputField {
    /// Create an empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field pre-filled with `value`, cursor at the end.
    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.chars().count(),
        }
    }

    /// Apply one editing keystroke. Keys that are not editing keys are ignored.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => {
                if self.cursor < self.value.chars().count() {
                    self.cursor += 1;
                }
            }
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.value.chars().count(),
            _ => {}
        }
    }

    fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            let at = self.byte_offset(self.cursor - 1);
            self.value.remove(at);
            self.cursor -= 1;
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_appends_at_cursor() {
        let mut field = InputField::new();
        for c in "abc".chars() {
            field.handle_key(KeyCode::Char(c));
        }
        field.handle_key(KeyCode::Left);
        field.handle_key(KeyCode::Char('x'));
        assert_eq!(field.value, "abxc");
        assert_eq!(field.cursor, 3);
    }

    #[test]
    fn backspace_and_delete() {
        let mut field = InputField::with_value("note");
        field.handle_key(KeyCode::Backspace);
        assert_eq!(field.value, "not");
        field.handle_key(KeyCode::Home);
        field.handle_key(KeyCode::Delete);
        assert_eq!(field.value, "ot");
        assert_eq!(field.cursor, 0);
    }

    #[test]
    fn multibyte_editing_stays_on_char_boundaries() {
        let mut field = InputField::with_value("héllo");
        field.handle_key(KeyCode::End);
        field.handle_key(KeyCode::Backspace);
        field.handle_key(KeyCode::Left);
        field.handle_key(KeyCode::Left);
        field.handle_key(KeyCode::Delete);
        assert_eq!(field.value, "hél");
    }
}
