use super::NoteStore;
use crate::error::{Result, TotionError};
use crate::model::{validate_name, NoteSummary, Session};
use chrono::{DateTime, Local};
use std::collections::BTreeMap;
use std::io;

#[derive(Debug, Clone)]
struct StoredNote {
    content: String,
    modified: DateTime<Local>,
}

/// Handle for a note held by [`InMemoryStore`]; just remembers the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemHandle {
    name: String,
}

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    notes: BTreeMap<String, StoredNote>,
    fail_writes: bool,
    fail_close: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a note directly, bypassing sessions.
    pub fn with_note(mut self, name: &str, content: &str) -> Self {
        self.notes.insert(
            name.to_string(),
            StoredNote {
                content: content.to_string(),
                modified: Local::now(),
            },
        );
        self
    }

    /// Makes every subsequent save and delete fail with an I/O error.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Makes every subsequent close fail after the note was released.
    pub fn fail_close(&mut self, fail: bool) {
        self.fail_close = fail;
    }

    /// Content as last saved, if the note exists.
    pub fn content(&self, name: &str) -> Option<&str> {
        self.notes.get(name).map(|n| n.content.as_str())
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes {
            return Err(TotionError::Io(io::Error::other("simulated write failure")));
        }
        Ok(())
    }
}

impl NoteStore for InMemoryStore {
    type Handle = MemHandle;

    fn list(&self) -> Result<Vec<NoteSummary>> {
        Ok(self
            .notes
            .iter()
            .map(|(name, note)| NoteSummary::new(name.clone(), note.modified))
            .collect())
    }

    fn open(&mut self, name: &str) -> Result<(Session<MemHandle>, String)> {
        validate_name(name)?;
        let note = self
            .notes
            .get(name)
            .ok_or_else(|| TotionError::NotFound(name.to_string()))?;
        let handle = MemHandle {
            name: name.to_string(),
        };
        Ok((Session::new(name, handle), note.content.clone()))
    }

    fn create(&mut self, name: &str) -> Result<Session<MemHandle>> {
        validate_name(name)?;
        if self.notes.contains_key(name) {
            return Err(TotionError::AlreadyExists(name.to_string()));
        }
        self.notes.insert(
            name.to_string(),
            StoredNote {
                content: String::new(),
                modified: Local::now(),
            },
        );
        let handle = MemHandle {
            name: name.to_string(),
        };
        Ok(Session::new(name, handle))
    }

    fn save(&mut self, session: &mut Session<MemHandle>, content: &str) -> Result<()> {
        self.check_writable()?;
        let note = self
            .notes
            .get_mut(&session.handle().name)
            .ok_or_else(|| TotionError::Io(io::Error::from(io::ErrorKind::NotFound)))?;
        note.content = content.to_string();
        note.modified = Local::now();
        Ok(())
    }

    fn close(&mut self, _session: Session<MemHandle>) -> Result<()> {
        if self.fail_close {
            return Err(TotionError::Io(io::Error::other("simulated close failure")));
        }
        Ok(())
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        self.check_writable()?;
        if self.notes.remove(name).is_none() {
            return Err(TotionError::Io(io::Error::from(io::ErrorKind::NotFound)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_notes_by_name() {
        let store = InMemoryStore::new()
            .with_note("b.txt", "world")
            .with_note("a.txt", "hello");
        let names: Vec<_> = store.list().unwrap().into_iter().map(|n| n.name).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn failed_save_leaves_content_alone() {
        let mut store = InMemoryStore::new().with_note("a.txt", "hello");
        let (mut session, _) = store.open("a.txt").unwrap();

        store.fail_writes(true);
        assert!(store.save(&mut session, "changed").is_err());
        assert_eq!(store.content("a.txt"), Some("hello"));
    }

    #[test]
    fn failed_close_keeps_saved_content() {
        let mut store = InMemoryStore::new().with_note("a.txt", "hello");
        let (mut session, _) = store.open("a.txt").unwrap();
        store.save(&mut session, "changed").unwrap();

        store.fail_close(true);
        assert!(matches!(store.close(session), Err(TotionError::Io(_))));
        assert_eq!(store.content("a.txt"), Some("changed"));
    }

    #[test]
    fn delete_missing_is_io_error() {
        let mut store = InMemoryStore::new();
        assert!(matches!(store.delete("ghost"), Err(TotionError::Io(_))));
    }
}
