use crate::error::{Result, TotionError};
use chrono::{DateTime, Local};

/// Format used for the "last modified" line of a listing entry.
pub const MODIFIED_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Capabilities a row of the list widget needs.
///
/// The list is generic over this trait, so whatever is selected comes back
/// out with its concrete type.
pub trait ListItem {
    fn title(&self) -> &str;
    fn description(&self) -> String;
    fn filter_value(&self) -> &str;
}

/// One entry of a listing snapshot. Notes are keyed by their file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSummary {
    pub name: String,
    pub modified: DateTime<Local>,
}

impl NoteSummary {
    pub fn new(name: impl Into<String>, modified: DateTime<Local>) -> Self {
        Self {
            name: name.into(),
            modified,
        }
    }
}

impl ListItem for NoteSummary {
    fn title(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        format!("Last modified : {}", self.modified.format(MODIFIED_FORMAT))
    }

    fn filter_value(&self) -> &str {
        &self.name
    }
}

/// A note that is open for editing.
///
/// Owns the backing handle for as long as the edit lasts; the handle type
/// depends on the store that produced the session.
#[derive(Debug)]
pub struct Session<H> {
    name: String,
    handle: H,
    lossy: bool,
}

impl<H> Session<H> {
    pub fn new(name: impl Into<String>, handle: H) -> Self {
        Self {
            name: name.into(),
            handle,
            lossy: false,
        }
    }

    /// Marks content that had invalid UTF-8 replaced while loading.
    pub fn lossy(mut self) -> Self {
        self.lossy = true;
        self
    }

    /// Saving a lossy session writes the replacement characters back.
    pub fn is_lossy(&self) -> bool {
        self.lossy
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn handle_mut(&mut self) -> &mut H {
        &mut self.handle
    }

    pub fn into_handle(self) -> H {
        self.handle
    }
}

/// Rejects names that would leave the flat storage directory.
///
/// Names are otherwise taken verbatim: no extension is added and nothing is
/// rewritten.
pub fn validate_name(name: &str) -> Result<()> {
    let escapes = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains(std::path::MAIN_SEPARATOR)
        || name.contains('\0');
    if escapes {
        return Err(TotionError::InvalidName(name.to_string()));
    }
    Ok(())
}
