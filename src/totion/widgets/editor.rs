use crate::ui::styles;
use crossterm::event::KeyEvent;
use tui_textarea::{Input, Key, TextArea};

/// Cap on characters the user may type into a note.
pub const EDITOR_CHAR_LIMIT: usize = 2048;

pub const EDITOR_PLACEHOLDER: &str = "💡 Start writing your note...";

/// Builds an editor holding `content` verbatim.
///
/// Lines are split on `\n` only, so a trailing newline or a `\r` survives
/// the trip back through [`editor_text`].
pub fn new_editor(content: &str) -> TextArea<'static> {
    let mut editor = TextArea::new(content.split('\n').map(str::to_string).collect());
    editor.set_max_histories(0);
    editor.set_hard_tab_indent(true);
    editor.set_placeholder_text(EDITOR_PLACEHOLDER);
    editor.set_placeholder_style(styles::PLACEHOLDER);
    editor.set_style(styles::EDITOR_TEXT);
    editor.set_cursor_style(styles::CURSOR);
    editor.set_cursor_line_style(styles::EDITOR_TEXT);
    editor
}

/// The buffer as it would be written to disk.
pub fn editor_text(editor: &TextArea<'_>) -> String {
    editor.lines().join("\n")
}

/// Characters in the buffer, counting line breaks.
pub fn char_count(editor: &TextArea<'_>) -> usize {
    let lines = editor.lines();
    let chars: usize = lines.iter().map(|l| l.chars().count()).sum();
    chars + lines.len().saturating_sub(1)
}

/// Forwards a key to the editor unless it would type past `limit`.
///
/// Content already longer than the limit is left alone; it just cannot grow.
/// A paste that does not fit is cut to the room that is left.
pub fn apply_key(editor: &mut TextArea<'_>, key: KeyEvent, limit: usize) -> bool {
    let input: Input = key.into();
    let room = limit.saturating_sub(char_count(editor));
    if is_paste(&input) {
        return paste_within(editor, room);
    }
    if inserts_text(&input) && room == 0 {
        return false;
    }
    editor.input(input)
}

fn paste_within(editor: &mut TextArea<'_>, room: usize) -> bool {
    let yanked = editor.yank_text();
    if yanked.chars().count() <= room {
        return editor.paste();
    }
    if room == 0 {
        return false;
    }
    editor.set_yank_text(yanked.chars().take(room).collect::<String>());
    let pasted = editor.paste();
    editor.set_yank_text(yanked);
    pasted
}

fn is_paste(input: &Input) -> bool {
    match input.key {
        Key::Char('y') => input.ctrl && !input.alt,
        Key::Paste => true,
        _ => false,
    }
}

fn inserts_text(input: &Input) -> bool {
    match input.key {
        Key::Char('m') if input.ctrl => true,
        Key::Char(_) => !input.ctrl && !input.alt,
        Key::Enter | Key::Tab => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn content_survives_the_editor_unchanged() {
        for content in ["", "hello", "two\nlines", "trailing\n", "\n\nlead", "crlf\r\nline"] {
            assert_eq!(editor_text(&new_editor(content)), content);
        }
    }

    #[test]
    fn counts_line_breaks_as_characters() {
        assert_eq!(char_count(&new_editor("")), 0);
        assert_eq!(char_count(&new_editor("ab\ncd")), 5);
    }

    #[test]
    fn typing_stops_at_the_limit() {
        let mut editor = new_editor("abc");
        assert!(!apply_key(&mut editor, key(KeyCode::Char('d')), 3));
        assert!(!apply_key(&mut editor, key(KeyCode::Enter), 3));
        assert_eq!(editor_text(&editor), "abc");
    }

    #[test]
    fn pasting_is_cut_to_the_room_left() {
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        let mut editor = new_editor("abcd");
        assert!(apply_key(&mut editor, ctrl('k'), 10));
        assert_eq!(editor_text(&editor), "");

        for _ in 0..3 {
            apply_key(&mut editor, ctrl('y'), 10);
        }
        assert_eq!(editor_text(&editor), "abcdabcdab");
        assert!(!apply_key(&mut editor, ctrl('y'), 10));
        assert_eq!(char_count(&editor), 10);
        assert_eq!(editor.yank_text(), "abcd");
    }

    #[test]
    fn tab_counts_as_one_character() {
        let mut editor = new_editor("ab");
        editor.move_cursor(tui_textarea::CursorMove::End);
        assert!(apply_key(&mut editor, key(KeyCode::Tab), 3));
        assert_eq!(editor_text(&editor), "ab\t");
        assert!(!apply_key(&mut editor, key(KeyCode::Tab), 3));
    }

    #[test]
    fn deleting_is_allowed_over_the_limit() {
        let mut editor = new_editor("abcdef");
        editor.move_cursor(tui_textarea::CursorMove::End);
        assert!(apply_key(&mut editor, key(KeyCode::Backspace), 3));
        assert_eq!(editor_text(&editor), "abcde");
    }

    #[test]
    fn enter_inserts_a_line_break() {
        let mut editor = new_editor("ab");
        editor.move_cursor(tui_textarea::CursorMove::End);
        apply_key(&mut editor, key(KeyCode::Enter), EDITOR_CHAR_LIMIT);
        apply_key(&mut editor, key(KeyCode::Char('c')), EDITOR_CHAR_LIMIT);
        assert_eq!(editor_text(&editor), "ab\nc");
    }
}
