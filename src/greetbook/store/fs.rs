use super::BookStore;
use crate::book::AddressBook;
use crate::error::{GreetbookError, Result};
use std::fs;
use std::path::PathBuf;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl BookStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        if !self.path.exists() {
            return Ok(AddressBook::new());
        }
        let content = fs::read_to_string(&self.path).map_err(GreetbookError::Io)?;
        let book = serde_json::from_str(&content).map_err(GreetbookError::Serialization)?;
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        let dir = self.path.parent().ok_or_else(|| {
            GreetbookError::Store(format!("No parent directory for {}", self.path.display()))
        })?;
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(GreetbookError::Io)?;
        }

        let content = serde_json::to_string_pretty(book).map_err(GreetbookError::Serialization)?;

        // Write-to-temp-then-rename so a crash mid-save cannot clobber the
        // previously saved book.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(GreetbookError::Io)?;
        fs::rename(&tmp, &self.path).map_err(GreetbookError::Io)?;
        Ok(())
    }
}
