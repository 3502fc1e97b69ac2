//! # Storage Layer
//!
//! Persistence for the address book sits behind the [`BookStore`] trait:
//!
//! - [`fs::FileStore`]: production storage, one JSON document on disk.
//!   Saves write to a temp file in the same directory and rename over the
//!   target, so a crash mid-save leaves the previous state intact.
//! - [`memory::InMemoryStore`]: no persistence, for tests.
//!
//! A missing file loads as an empty book. A corrupt file surfaces as an
//! error; the session layer degrades that to an empty book with a warning
//! instead of aborting startup.

use crate::book::AddressBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for address-book persistence.
pub trait BookStore {
    /// Load the persisted book; an absent backing store yields an empty book.
    fn load(&self) -> Result<AddressBook>;

    /// Persist the book, replacing any previous state.
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}
