//! # Storage Layer
//!
//! Notes live as plain files in a single flat directory. The [`NoteStore`]
//! trait is the seam between the interaction state machine and that
//! directory, so the state machine can be exercised without a filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage
//!   - one file per note, named exactly as the user typed it
//!   - raw text content, no header or sidecar metadata
//!   - last-modified time comes from the filesystem
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - no persistence
//!   - can be told to fail writes, to exercise error paths
//!
//! ## Storage Format
//!
//! ```text
//! ~/.totion/
//! ├── groceries
//! ├── ideas.md
//! └── todo.txt
//! ```
//!
//! ## Sessions
//!
//! `open` and `create` hand out a [`Session`] that owns the backing handle
//! until it is passed back to `close`. There is never more than one session
//! alive; the state machine guarantees that, the store does not.

use crate::error::Result;
use crate::model::{NoteSummary, Session};

pub mod fs;
pub mod memory;

/// Abstract interface for note storage.
pub trait NoteStore {
    /// What a session holds on to while a note is open.
    type Handle;

    /// Snapshot of every note, ordered by name.
    fn list(&self) -> Result<Vec<NoteSummary>>;

    /// Open an existing note for read-write, returning the session and the
    /// note's current content.
    fn open(&mut self, name: &str) -> Result<(Session<Self::Handle>, String)>;

    /// Create a new, empty note. Fails if the name is taken.
    fn create(&mut self, name: &str) -> Result<Session<Self::Handle>>;

    /// Replace the note's entire content. The session stays open on failure.
    fn save(&mut self, session: &mut Session<Self::Handle>, content: &str) -> Result<()>;

    /// Release the session's handle.
    fn close(&mut self, session: Session<Self::Handle>) -> Result<()>;

    /// Remove a note permanently.
    fn delete(&mut self, name: &str) -> Result<()>;
}
