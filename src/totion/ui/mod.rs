//! Presentation layer: draws the [`App`] into a ratatui frame.
//!
//! Rendering only reads from the app. Everything it needs (the active
//! screen, the terminal size, the status line) comes through `App`'s
//! accessors.

pub mod styles;

use crate::app::{App, Screen, StatusMessage};
use crate::model::{ListItem, NoteSummary};
use crate::store::NoteStore;
use crate::widgets::input::TextInput;
use crate::widgets::list::{FilterList, FilterState};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, List, ListItem as Row, Padding, Paragraph};
use ratatui::Frame;
use tui_textarea::TextArea;
use unicode_width::UnicodeWidthStr;

pub const BANNER: &str = "🚀 Totion · Futuristic Notes 🧠";
pub const HELP: &str = "Ctrl+N: new | Ctrl+S: save | Ctrl+L: list | Esc: back | Ctrl+Q: quit";
const LIST_HELP: &str = "↑/↓: move | /: filter | Enter: open | Ctrl+D: delete note";
const EMPTY_LIST: &str = "No notes yet. Press Ctrl+N to write one.";
const IDLE_HINT: &str = "Press Ctrl+N to start a note or Ctrl+L to browse your notes.";
const PROMPT: &str = "> ";
const INPUT_WIDTH: u16 = 60;
const INPUT_HEIGHT: u16 = 5;

pub fn render<S: NoteStore>(frame: &mut Frame, app: &App<S>) {
    let viewport = app.viewport();
    let [_, header, help, _, content, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header);
    frame.render_widget(
        Paragraph::new(HELP)
            .style(styles::HELP)
            .alignment(Alignment::Center),
        help,
    );

    let content = centered(content, viewport.width, viewport.height);
    match app.screen() {
        Screen::Blank => render_blank(frame, content),
        Screen::NewFile(input) => render_new_file(frame, content, input),
        Screen::Notes(notes) => render_notes(frame, content, notes),
        Screen::Editor(editor) => render_editor(frame, content, editor),
    }

    if let Some(message) = app.status() {
        render_status(frame, status, message);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let width = (BANNER.width() as u16).saturating_add(8);
    let area = centered(area, width, area.height);
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(styles::HEADER_BORDER)
        .style(styles::HEADER)
        .padding(Padding::new(3, 3, 1, 1));
    frame.render_widget(
        Paragraph::new(BANNER)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn render_blank(frame: &mut Frame, area: Rect) {
    let area = Rect { height: 1, ..area };
    frame.render_widget(
        Paragraph::new(IDLE_HINT)
            .style(styles::PLACEHOLDER)
            .alignment(Alignment::Center),
        area,
    );
}

fn render_new_file(frame: &mut Frame, area: Rect, input: &TextInput) {
    let area = Rect {
        width: area.width.min(INPUT_WIDTH),
        height: area.height.min(INPUT_HEIGHT),
        ..area
    };
    let block = Block::bordered()
        .border_type(BorderType::Thick)
        .border_style(styles::INPUT_BORDER)
        .style(styles::INPUT_BOX)
        .padding(Padding::new(2, 2, 1, 1));
    let inner = block.inner(area);

    let text = if input.is_empty() {
        Span::styled(input.placeholder(), styles::PLACEHOLDER)
    } else {
        Span::raw(input.value())
    };
    let line = Line::from(vec![Span::styled(PROMPT, styles::PROMPT), text]);
    frame.render_widget(Paragraph::new(line).block(block), area);

    let before_cursor: String = input.value().chars().take(input.cursor()).collect();
    let column = (PROMPT.width() + before_cursor.width()) as u16;
    if column < inner.width {
        frame.set_cursor_position((inner.x + column, inner.y));
    }
}

fn render_notes(frame: &mut Frame, area: Rect, notes: &FilterList<NoteSummary>) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(styles::LIST_BORDER)
        .padding(Padding::new(2, 2, 1, 1))
        .title(Span::styled(format!(" {} ", notes.title()), styles::LIST_TITLE))
        .title_bottom(Line::styled(LIST_HELP, styles::ITEM_DESCRIPTION));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [filter, rows] = Layout::vertical([
        Constraint::Length(if notes.filter_state() == FilterState::Unfiltered {
            0
        } else {
            2
        }),
        Constraint::Min(0),
    ])
    .areas(inner);

    if notes.filter_state() != FilterState::Unfiltered {
        let cursor = if notes.is_filtering() { "▏" } else { "" };
        frame.render_widget(
            Paragraph::new(format!("Filter: {}{}", notes.query(), cursor)).style(styles::FILTER),
            filter,
        );
    }

    if notes.visible_len() == 0 {
        let message = if notes.is_empty() {
            EMPTY_LIST
        } else {
            "Nothing matches the filter."
        };
        frame.render_widget(Paragraph::new(message).style(styles::PLACEHOLDER), rows);
        return;
    }

    let items: Vec<Row> = notes
        .visible_items()
        .map(|note| {
            Row::new(Text::from(vec![
                Line::styled(note.title().to_string(), styles::ITEM_TITLE),
                Line::styled(note.description(), styles::ITEM_DESCRIPTION),
                Line::raw(""),
            ]))
        })
        .collect();
    let list = List::new(items)
        .highlight_style(styles::ITEM_SELECTED)
        .highlight_symbol("│ ");

    let mut state = notes.state().clone();
    frame.render_stateful_widget(list, rows, &mut state);
}

fn render_editor(frame: &mut Frame, area: Rect, editor: &TextArea<'static>) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(styles::EDITOR_BORDER)
        .padding(Padding::new(2, 2, 1, 1));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(editor, inner);
}

fn render_status(frame: &mut Frame, area: Rect, message: &StatusMessage) {
    frame.render_widget(
        Paragraph::new(message.content.as_str())
            .style(styles::status(message.level))
            .alignment(Alignment::Center),
        area,
    );
}

/// A `width` x `height` rectangle centered horizontally in `area`, anchored
/// to its top and clipped to it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height,
    }
}
