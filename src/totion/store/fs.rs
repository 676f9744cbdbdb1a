use super::NoteStore;
use crate::error::{Result, TotionError};
use crate::model::{validate_name, NoteSummary, Session};
use chrono::{DateTime, Local};
use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File-backed storage: one plain file per note in a flat directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Wraps an existing directory without touching the filesystem.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates the storage directory if needed and makes sure it can be
    /// listed. Any failure here is a startup error.
    pub fn init(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let startup = |source: io::Error| TotionError::Startup {
            path: root.clone(),
            source,
        };

        create_storage_dir(&root).map_err(startup)?;
        let store = Self::new(root.clone());
        let notes = store.read_listing().map_err(startup)?;

        info!(dir = %root.display(), notes = notes.len(), "storage ready");
        Ok(store)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn note_path(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        Ok(self.root.join(name))
    }

    fn read_listing(&self) -> io::Result<Vec<NoteSummary>> {
        let mut notes = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                continue;
            }

            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    warn!(name = ?raw, "skipping note with a non UTF-8 name");
                    continue;
                }
            };
            let modified: DateTime<Local> = entry.metadata()?.modified()?.into();
            notes.push(NoteSummary::new(name, modified));
        }

        notes.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(notes)
    }
}

#[cfg(unix)]
fn create_storage_dir(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o750).create(path)
}

#[cfg(not(unix))]
fn create_storage_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}

impl NoteStore for FileStore {
    type Handle = File;

    fn list(&self) -> Result<Vec<NoteSummary>> {
        let notes = self.read_listing()?;
        debug!(count = notes.len(), "listed notes");
        Ok(notes)
    }

    fn open(&mut self, name: &str) -> Result<(Session<File>, String)> {
        let path = self.note_path(name)?;
        let mut file = match OpenOptions::new().read(true).write(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(TotionError::NotFound(name.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;

        let session = Session::new(name, file);
        let (session, content) = match String::from_utf8(bytes) {
            Ok(content) => (session, content),
            Err(e) => {
                warn!(note = %name, "note is not valid UTF-8; invalid bytes replaced");
                let content = String::from_utf8_lossy(e.as_bytes()).into_owned();
                (session.lossy(), content)
            }
        };

        debug!(note = %name, bytes = content.len(), "opened note");
        Ok((session, content))
    }

    fn create(&mut self, name: &str) -> Result<Session<File>> {
        let path = self.note_path(name)?;
        let file = match OpenOptions::new()
            .read(true)
            .write(true)
            .create_new(true)
            .open(&path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(TotionError::AlreadyExists(name.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        info!(note = %name, "created note");
        Ok(Session::new(name, file))
    }

    fn save(&mut self, session: &mut Session<File>, content: &str) -> Result<()> {
        let file = session.handle_mut();
        file.set_len(0)?;
        file.seek(SeekFrom::Start(0))?;
        file.write_all(content.as_bytes())?;
        file.flush()?;

        info!(note = %session.name(), bytes = content.len(), "saved note");
        Ok(())
    }

    fn close(&mut self, session: Session<File>) -> Result<()> {
        let name = session.name().to_string();
        session.into_handle().sync_all()?;
        debug!(note = %name, "closed note");
        Ok(())
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        let path = self.note_path(name)?;
        fs::remove_file(path)?;
        info!(note = %name, "deleted note");
        Ok(())
    }
}
