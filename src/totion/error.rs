use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TotionError {
    #[error("Storage directory unavailable ({})", .path.display())]
    Startup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine the home directory")]
    NoHomeDir,

    #[error("Note not found: {0}")]
    NotFound(String),

    #[error("Note already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid note name: {0:?}")]
    InvalidName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TotionError {
    /// Errors that leave the application with nothing to work on.
    pub fn is_startup(&self) -> bool {
        matches!(self, TotionError::Startup { .. } | TotionError::NoHomeDir)
    }
}

pub type Result<T> = std::result::Result<T, TotionError>;
