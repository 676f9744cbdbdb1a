use crate::app::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

pub const NEON_CYAN: Color = Color::Rgb(0x00, 0xFF, 0xFF);
pub const NEON_MAGENTA: Color = Color::Rgb(0xFF, 0x00, 0xFF);
pub const NEON_GREEN: Color = Color::Rgb(0x39, 0xFF, 0x14);
pub const ELECTRIC_BLUE: Color = Color::Rgb(0x7D, 0xF9, 0xFF);
pub const MIDNIGHT: Color = Color::Rgb(0x11, 0x11, 0x33);
pub const DEEP_SPACE: Color = Color::Rgb(0x0A, 0x0F, 0x25);
pub const DIM_GRAY: Color = Color::Rgb(0x9A, 0x9A, 0x9A);

pub const HEADER: Style = Style::new()
    .fg(NEON_CYAN)
    .bg(MIDNIGHT)
    .add_modifier(Modifier::BOLD);
pub const HEADER_BORDER: Style = Style::new().fg(NEON_MAGENTA);
pub const HELP: Style = Style::new()
    .fg(ELECTRIC_BLUE)
    .add_modifier(Modifier::ITALIC);

pub const INPUT_BOX: Style = Style::new().fg(NEON_GREEN).bg(DEEP_SPACE);
pub const INPUT_BORDER: Style = Style::new().fg(NEON_MAGENTA);
pub const PROMPT: Style = Style::new().fg(NEON_MAGENTA);
pub const PLACEHOLDER: Style = Style::new().fg(DIM_GRAY);

pub const LIST_BORDER: Style = Style::new().fg(NEON_MAGENTA);
pub const LIST_TITLE: Style = Style::new()
    .fg(MIDNIGHT)
    .bg(NEON_MAGENTA)
    .add_modifier(Modifier::BOLD);
pub const ITEM_TITLE: Style = Style::new().add_modifier(Modifier::BOLD);
pub const ITEM_DESCRIPTION: Style = Style::new().fg(DIM_GRAY);
pub const ITEM_SELECTED: Style = Style::new()
    .fg(NEON_MAGENTA)
    .add_modifier(Modifier::BOLD);
pub const FILTER: Style = Style::new().fg(NEON_CYAN);

pub const EDITOR_BORDER: Style = Style::new().fg(NEON_CYAN);
pub const EDITOR_TEXT: Style = Style::new().fg(NEON_GREEN);
pub const CURSOR: Style = Style::new().fg(MIDNIGHT).bg(NEON_CYAN);

pub fn status(level: MessageLevel) -> Style {
    match level {
        MessageLevel::Info => Style::new().fg(DIM_GRAY),
        MessageLevel::Success => Style::new().fg(NEON_GREEN),
        MessageLevel::Warning => Style::new().fg(Color::Yellow),
        MessageLevel::Error => Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}
