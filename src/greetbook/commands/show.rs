use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GreetbookError, Result};

/// `phone <name>`: show one contact with all its numbers.
pub fn phone(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = book
        .find(name)
        .ok_or_else(|| GreetbookError::ContactNotFound(name.to_string()))?;
    Ok(CmdResult::message(CmdMessage::info(record.to_string())))
}

/// `all`: show every record, or a hint when the book is empty.
pub fn all(book: &AddressBook) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(CmdResult::message(CmdMessage::info("No contacts stored.")));
    }
    Ok(CmdResult::message(CmdMessage::info(book.to_string())))
}
