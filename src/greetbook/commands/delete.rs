use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// `delete <name>`: remove a contact entirely.
pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    book.delete(name)?;
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Contact '{}' deleted.",
        name
    ))))
}
