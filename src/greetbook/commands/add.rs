use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GreetbookError, Result};
use crate::model::{Name, Phone, Record};

/// `add <name> <phone>`: append a phone to an existing contact, or create
/// the contact if absent. A phone the contact already has is an error.
pub fn run(book: &mut AddressBook, name: &str, number: &str) -> Result<CmdResult> {
    let phone = Phone::new(number)?;

    if let Some(record) = book.find_mut(name) {
        if record.find_phone(phone.as_str()).is_some() {
            return Err(GreetbookError::DuplicatePhone(number.to_string()));
        }
        record.add_phone(phone)?;
        return Ok(CmdResult::message(CmdMessage::success(format!(
            "Added number '{}' to contact '{}'.",
            number, name
        ))));
    }

    let mut record = Record::new(Name::new(name)?);
    record.add_phone(phone)?;
    book.add_record(record);

    Ok(CmdResult::message(CmdMessage::success(format!(
        "Contact '{}' with number '{}' added.",
        name, number
    ))))
}
