//! # Interaction State Machine
//!
//! [`App`] owns everything the screen shows and decides what each input
//! event means in the current mode.
//!
//! ## Modes
//!
//! Exactly one [`Mode`] is active at a time:
//!
//! - `Idle`: nothing open
//! - `CreatingFile`: the filename prompt has focus
//! - `Editing`: a note is open; the only state with a [`Session`]
//!
//! The note list is an overlay tracked separately (`list_visible`). It can
//! sit over any mode, but opening a note for editing always closes it.
//!
//! ## Layering
//!
//! Focus and rendering follow the same stacking order, top first: filename
//! prompt, note list, editor. `Cancel` dismisses every layer in one step:
//! the prompt is cleared, the open note is discarded and the list is hidden.
//! A list that is still taking a filter query only drops the query.
//!
//! ## Errors
//!
//! Nothing that happens after startup stops the loop. Store errors become a
//! [`StatusMessage`] and the mode is left as it was, so a failed save keeps
//! the unsaved buffer.

use crate::error::TotionError;
use crate::model::{NoteSummary, Session};
use crate::store::NoteStore;
use crate::widgets::editor::{apply_key, editor_text, new_editor, EDITOR_CHAR_LIMIT};
use crate::widgets::input::TextInput;
use crate::widgets::list::FilterList;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, error, info, warn};
use tui_textarea::TextArea;

pub const FILENAME_CHAR_LIMIT: usize = 156;
pub const FILENAME_PLACEHOLDER: &str = "✨ Name your new file...";
pub const LIST_TITLE: &str = "All Notes 📁";

/// Rows reserved above the content area for the banner and help line.
const HEADER_ROWS: u16 = 8;
const MIN_CONTENT_HEIGHT: u16 = 10;
const SIDE_MARGIN: u16 = 4;
const MIN_CONTENT_WIDTH: u16 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    CreatingFile,
    Editing,
}

/// Everything the state machine reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    RequestNew,
    RequestList,
    Cancel,
    Save,
    Delete,
    Confirm,
    Quit,
    Resize(u16, u16),
    /// Any other key, for whichever widget has focus.
    Input(KeyEvent),
}

/// Which widget receives raw key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    None,
    Filename,
    List,
    Editor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Outcome of the last action, shown on the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl StatusMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Size of the content area (list or editor) for a terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn for_terminal(width: u16, height: u16) -> Self {
        Self {
            width: width.saturating_sub(SIDE_MARGIN).max(MIN_CONTENT_WIDTH),
            height: height.saturating_sub(HEADER_ROWS).max(MIN_CONTENT_HEIGHT),
        }
    }
}

/// What the presentation layer should draw in the content area.
pub enum Screen<'a> {
    Blank,
    NewFile(&'a TextInput),
    Notes(&'a FilterList<NoteSummary>),
    Editor(&'a TextArea<'static>),
}

pub struct App<S: NoteStore> {
    store: S,
    mode: Mode,
    list_visible: bool,
    session: Option<Session<S::Handle>>,
    filename: TextInput,
    editor: TextArea<'static>,
    notes: FilterList<NoteSummary>,
    status: Option<StatusMessage>,
    size: (u16, u16),
    running: bool,
}

impl<S: NoteStore> App<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            mode: Mode::Idle,
            list_visible: false,
            session: None,
            filename: TextInput::new(FILENAME_CHAR_LIMIT).with_placeholder(FILENAME_PLACEHOLDER),
            editor: new_editor(""),
            notes: FilterList::new(LIST_TITLE),
            status: None,
            size: (80, 24),
            running: true,
        }
    }

    /// Processes one event to completion.
    pub fn handle(&mut self, action: Action) {
        if !matches!(action, Action::Resize(..)) {
            self.status = None;
        }

        match action {
            Action::RequestNew => self.request_new(),
            Action::RequestList => self.request_list(),
            Action::Cancel => self.cancel(),
            Action::Save => self.save(),
            Action::Delete => self.delete_selected(),
            Action::Confirm => self.confirm(),
            Action::Quit => self.quit(),
            Action::Resize(width, height) => self.resize(width, height),
            Action::Input(key) => self.forward(key),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_list_visible(&self) -> bool {
        self.list_visible
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn focus(&self) -> Focus {
        if self.mode == Mode::CreatingFile {
            Focus::Filename
        } else if self.list_visible {
            Focus::List
        } else if self.mode == Mode::Editing {
            Focus::Editor
        } else {
            Focus::None
        }
    }

    pub fn screen(&self) -> Screen<'_> {
        match self.focus() {
            Focus::Filename => Screen::NewFile(&self.filename),
            Focus::List => Screen::Notes(&self.notes),
            Focus::Editor => Screen::Editor(&self.editor),
            Focus::None => Screen::Blank,
        }
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::for_terminal(self.size.0, self.size.1)
    }

    pub fn filename(&self) -> &TextInput {
        &self.filename
    }

    pub fn notes(&self) -> &FilterList<NoteSummary> {
        &self.notes
    }

    /// Name of the note being edited, if any.
    pub fn open_note(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.name())
    }

    /// The working copy of the open note.
    pub fn buffer(&self) -> String {
        editor_text(&self.editor)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn request_new(&mut self) {
        if self.mode == Mode::Editing {
            debug!("new note requested while editing; ignored");
            return;
        }
        self.filename.clear();
        self.mode = Mode::CreatingFile;
    }

    /// Opening the list starts unfiltered; refreshing an open list keeps its
    /// filter.
    fn request_list(&mut self) {
        match self.store.list() {
            Ok(notes) => {
                debug!(count = notes.len(), "showing note list");
                if !self.list_visible {
                    self.notes.cancel_filter();
                }
                self.notes.set_items(notes);
                self.list_visible = true;
            }
            Err(e) => {
                error!(error = %e, "unable to list notes");
                self.report(StatusMessage::error(format!("Unable to list notes: {e}")));
            }
        }
    }

    fn cancel(&mut self) {
        if self.mode == Mode::CreatingFile {
            self.filename.clear();
            self.mode = Mode::Idle;
        }

        if self.mode == Mode::Editing {
            if let Some(name) = self.open_note() {
                info!(note = %name, "discarding unsaved changes");
            }
            self.end_editing();
        }

        if self.list_visible {
            if self.notes.is_filtering() {
                self.notes.cancel_filter();
            } else {
                self.list_visible = false;
            }
        }
    }

    fn save(&mut self) {
        if self.mode != Mode::Editing {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let content = editor_text(&self.editor);
        match self.store.save(session, &content) {
            Ok(()) => {
                let name = session.name().to_string();
                self.end_editing();
                if self.status.is_none() {
                    self.report(StatusMessage::success(format!("Saved {name}")));
                }
            }
            Err(e) => {
                error!(note = %session.name(), error = %e, "save failed");
                self.report(StatusMessage::error(format!(
                    "Unable to save the file: {e}"
                )));
            }
        }
    }

    fn delete_selected(&mut self) {
        if !self.list_visible || self.mode == Mode::Editing || self.notes.is_empty() {
            return;
        }
        let Some(name) = self.notes.selected().map(|n| n.name.clone()) else {
            return;
        };

        if let Err(e) = self.store.delete(&name) {
            error!(note = %name, error = %e, "delete failed");
            self.report(StatusMessage::error(format!("Error deleting file: {e}")));
            return;
        }

        match self.store.list() {
            Ok(notes) => {
                self.notes.set_items(notes);
                if !self.notes.is_empty() {
                    self.notes.select_first();
                }
                self.report(StatusMessage::success(format!("Deleted {name}")));
            }
            Err(e) => {
                error!(error = %e, "unable to refresh note list");
                self.report(StatusMessage::error(format!("Unable to list notes: {e}")));
            }
        }
    }

    fn confirm(&mut self) {
        if self.focus() == Focus::List && self.notes.is_filtering() {
            self.notes.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
            return;
        }
        match self.mode {
            // Already editing: Enter belongs to whatever has focus.
            Mode::Editing => self.forward(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            Mode::CreatingFile => self.confirm_filename(),
            Mode::Idle if self.list_visible => self.open_selected(),
            Mode::Idle => {}
        }
    }

    fn open_selected(&mut self) {
        let Some(name) = self.notes.selected().map(|n| n.name.clone()) else {
            return;
        };

        match self.store.open(&name) {
            Ok((session, content)) => self.begin_editing(session, &content),
            Err(e) => {
                error!(note = %name, error = %e, "unable to open note");
                self.report(StatusMessage::error(format!("Error reading file: {e}")));
            }
        }
    }

    /// An existing name opens that note instead of failing.
    fn confirm_filename(&mut self) {
        if self.filename.is_empty() {
            return;
        }
        let name = self.filename.value().to_string();

        let opened = match self.store.open(&name) {
            Ok(opened) => {
                debug!(note = %name, "note exists; opening it for editing");
                Ok(opened)
            }
            Err(TotionError::NotFound(_)) => self
                .store
                .create(&name)
                .map(|session| (session, String::new())),
            Err(e) => Err(e),
        };

        match opened {
            Ok((session, content)) => {
                self.filename.clear();
                self.begin_editing(session, &content);
            }
            Err(e) => {
                error!(note = %name, error = %e, "unable to create note");
                self.report(StatusMessage::error(format!("Unable to open {name}: {e}")));
            }
        }
    }

    fn quit(&mut self) {
        if self.session.is_some() {
            self.end_editing();
        }
        self.running = false;
    }

    fn resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "terminal resized");
        self.size = (width, height);
    }

    fn forward(&mut self, key: KeyEvent) {
        match self.focus() {
            Focus::Filename => {
                self.filename.handle_key(key);
            }
            Focus::List => {
                self.notes.handle_key(key);
            }
            Focus::Editor => {
                apply_key(&mut self.editor, key, EDITOR_CHAR_LIMIT);
            }
            Focus::None => {}
        }
    }

    fn begin_editing(&mut self, session: Session<S::Handle>, content: &str) {
        info!(note = %session.name(), "editing note");
        if session.is_lossy() {
            self.report(StatusMessage::warning(format!(
                "{} is not valid UTF-8; saving replaces the unreadable bytes",
                session.name()
            )));
        }
        self.editor = new_editor(content);
        self.session = Some(session);
        self.mode = Mode::Editing;
        self.list_visible = false;
    }

    /// Closes the session without writing and clears the buffer.
    fn end_editing(&mut self) {
        if let Some(session) = self.session.take() {
            let name = session.name().to_string();
            if let Err(e) = self.store.close(session) {
                warn!(note = %name, error = %e, "unable to close note");
                self.report(StatusMessage::warning(format!(
                    "Unable to close the file: {e}"
                )));
            }
        }
        self.editor = new_editor("");
        self.mode = Mode::Idle;
    }

    fn report(&mut self, message: StatusMessage) {
        self.status = Some(message);
    }
}
