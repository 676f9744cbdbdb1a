//! Translates terminal events into [`Action`]s.
//!
//! | Key              | Action        |
//! |------------------|---------------|
//! | `ctrl+n`         | `RequestNew`  |
//! | `ctrl+l`         | `RequestList` |
//! | `ctrl+s`         | `Save`        |
//! | `ctrl+d`         | `Delete`      |
//! | `esc`            | `Cancel`      |
//! | `enter`          | `Confirm`     |
//! | `ctrl+c`/`ctrl+q`| `Quit`        |
//!
//! Every other key press is passed through as [`Action::Input`].

use crate::app::Action;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn action_for(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(key_action(*key)),
        Event::Resize(width, height) => Some(Action::Resize(*width, *height)),
        _ => None,
    }
}

fn key_action(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('n') => return Action::RequestNew,
            KeyCode::Char('l') => return Action::RequestList,
            KeyCode::Char('s') => return Action::Save,
            KeyCode::Char('d') => return Action::Delete,
            KeyCode::Char('c') | KeyCode::Char('q') => return Action::Quit,
            _ => {}
        }
    }

    match key.code {
        KeyCode::Esc => Action::Cancel,
        KeyCode::Enter => Action::Confirm,
        _ => Action::Input(key),
    }
}
