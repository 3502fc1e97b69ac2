use super::BookStore;
use crate::book::AddressBook;
use crate::error::Result;

/// In-memory store for tests: `save` keeps a snapshot, `load` clones it.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    book: AddressBook,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: AddressBook) -> Self {
        Self { book }
    }

    /// The last saved snapshot, for assertions.
    pub fn snapshot(&self) -> &AddressBook {
        &self.book
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        Ok(self.book.clone())
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.book = book.clone();
        Ok(())
    }
}
