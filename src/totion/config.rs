use crate::error::{Result, TotionError};
use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};

/// Notes live in this directory under the user's home.
pub const STORAGE_DIR_NAME: &str = ".totion";
const LOG_FILENAME: &str = "totion.log";

/// Where totion keeps its notes, and where it writes its log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotionConfig {
    storage_dir: PathBuf,
    log_file: Option<PathBuf>,
}

impl TotionConfig {
    pub fn new(storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage_dir: storage_dir.into(),
            log_file: None,
        }
    }

    pub fn with_log_file(mut self, log_file: impl Into<PathBuf>) -> Self {
        self.log_file = Some(log_file.into());
        self
    }

    /// The standard layout: notes in `~/.totion`, the log in the platform
    /// cache directory.
    pub fn from_home() -> Result<Self> {
        let base = BaseDirs::new().ok_or(TotionError::NoHomeDir)?;
        let config = Self::new(base.home_dir().join(STORAGE_DIR_NAME));

        Ok(match ProjectDirs::from("com", "totion", "totion") {
            Some(dirs) => config.with_log_file(dirs.cache_dir().join(LOG_FILENAME)),
            None => config,
        })
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}
