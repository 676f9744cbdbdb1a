use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Single-line text field with a character cap.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
    /// Cursor position, in chars.
    cursor: usize,
    char_limit: usize,
    placeholder: String,
}

impl TextInput {
    pub fn new(char_limit: usize) -> Self {
        Self {
            char_limit,
            ..Self::default()
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Replaces the value, cut down to the character cap, and moves the
    /// cursor to the end.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().take(self.char_limit).collect();
        self.cursor = self.len();
    }

    /// Applies a key press. Returns true if the value or cursor changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('a') if ctrl => self.move_to(0),
            KeyCode::Char('e') if ctrl => self.move_to(self.len()),
            KeyCode::Char('u') if ctrl => {
                let at = self.byte_index(self.cursor);
                self.value.replace_range(..at, "");
                self.cursor = 0;
                at > 0
            }
            KeyCode::Char('k') if ctrl => {
                let at = self.byte_index(self.cursor);
                let changed = at < self.value.len();
                self.value.truncate(at);
                changed
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.insert(c)
            }
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                let at = self.byte_index(self.cursor);
                self.value.remove(at);
                true
            }
            KeyCode::Delete if self.cursor < self.len() => {
                let at = self.byte_index(self.cursor);
                self.value.remove(at);
                true
            }
            KeyCode::Left => self.move_to(self.cursor.saturating_sub(1)),
            KeyCode::Right => self.move_to((self.cursor + 1).min(self.len())),
            KeyCode::Home => self.move_to(0),
            KeyCode::End => self.move_to(self.len()),
            _ => false,
        }
    }

    fn insert(&mut self, c: char) -> bool {
        if self.len() >= self.char_limit {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
        true
    }

    fn move_to(&mut self, cursor: usize) -> bool {
        let moved = cursor != self.cursor;
        self.cursor = cursor;
        moved
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
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

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn typed(text: &str) -> TextInput {
        let mut input = TextInput::new(20);
        for c in text.chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
        input
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut input = typed("note");
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Char('x')));
        assert_eq!(input.value(), "notxe");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn backspace_and_delete_handle_multibyte_chars() {
        let mut input = typed("héllo");
        input.handle_key(key(KeyCode::Home));
        input.handle_key(key(KeyCode::Right));
        input.handle_key(key(KeyCode::Delete));
        assert_eq!(input.value(), "hllo");

        input.handle_key(key(KeyCode::End));
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.value(), "hll");
    }

    #[test]
    fn refuses_input_past_the_limit() {
        let mut input = TextInput::new(3);
        for c in "abcd".chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn control_chords_do_not_insert() {
        let mut input = typed("abc");
        assert!(input.handle_key(ctrl('a')));
        assert_eq!(input.cursor(), 0);
        assert!(input.handle_key(ctrl('k')));
        assert!(input.is_empty());
        assert!(!input.handle_key(ctrl('s')));
    }

    #[test]
    fn ctrl_u_clears_before_cursor() {
        let mut input = typed("abcdef");
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Left));
        input.handle_key(ctrl('u'));
        assert_eq!(input.value(), "ef");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn set_value_truncates_and_moves_cursor_to_end() {
        let mut input = TextInput::new(4).with_placeholder("name");
        input.set_value("abcdefgh");
        assert_eq!(input.value(), "abcd");
        assert_eq!(input.cursor(), 4);
        assert_eq!(input.placeholder(), "name");

        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }
}
