//! Widget state for the pieces of the screen that take keyboard input.
//!
//! - [`input::TextInput`]: single-line field used for new file names
//! - [`list::FilterList`]: selectable, filterable list of [`crate::model::ListItem`]s
//!
//! The multi-line note editor is a `tui_textarea::TextArea`; see
//! [`editor`] for how note content moves in and out of it.

pub mod editor;
pub mod input;
pub mod list;
