use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GreetbookError, Result};
use crate::model::Phone;

/// `change <name> <old> <new>`: replace one of a contact's phone numbers
/// in place.
pub fn run(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let new_phone = Phone::new(new)?;
    let record = book
        .find_mut(name)
        .ok_or_else(|| GreetbookError::ContactNotFound(name.to_string()))?;

    record.edit_phone(old, new_phone)?;

    Ok(CmdResult::message(CmdMessage::success(format!(
        "Number changed from '{}' to '{}' for contact '{}'.",
        old, new, name
    ))))
}
