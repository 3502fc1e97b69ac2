use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GreetbookError, Result};
use crate::model::Birthday;

/// `add-birthday <name> <DD.MM.YYYY>`: set a contact's birthday,
/// overwriting any previous value.
pub fn add(book: &mut AddressBook, name: &str, date_text: &str) -> Result<CmdResult> {
    let birthday = Birthday::parse(date_text)?;
    let record = book
        .find_mut(name)
        .ok_or_else(|| GreetbookError::ContactNotFound(name.to_string()))?;
    record.set_birthday(birthday);

    Ok(CmdResult::message(CmdMessage::success(format!(
        "{}'s birthday is {}.",
        name, birthday
    ))))
}

/// `show-birthday <name>`.
pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = book
        .find(name)
        .ok_or_else(|| GreetbookError::ContactNotFound(name.to_string()))?;

    let message = match &record.birthday {
        Some(birthday) => CmdMessage::info(format!("{}'s birthday is {}.", name, birthday)),
        None => CmdMessage::info(format!("No birthday recorded for '{}'.", name)),
    };
    Ok(CmdResult::message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add as add_cmd;

    #[test]
    fn sets_and_shows_birthday() {
        let mut book = AddressBook::new();
        add_cmd::run(&mut book, "Anna", "1234567890").unwrap();
        add(&mut book, "Anna", "06.01.1990").unwrap();

        let result = show(&book, "Anna").unwrap();
        assert!(result.messages[0].content.contains("06.01.1990"));
    }

    #[test]
    fn overwrites_previous_birthday() {
        let mut book = AddressBook::new();
        add_cmd::run(&mut book, "Anna", "1234567890").unwrap();
        add(&mut book, "Anna", "06.01.1990").unwrap();
        add(&mut book, "Anna", "07.02.1991").unwrap();
        assert_eq!(
            book.find("Anna").unwrap().birthday.unwrap().to_string(),
            "07.02.1991"
        );
    }

    #[test]
    fn unparsable_date_errors() {
        let mut book = AddressBook::new();
        add_cmd::run(&mut book, "Anna", "1234567890").unwrap();
        assert!(matches!(
            add(&mut book, "Anna", "1990/01/06"),
            Err(GreetbookError::InvalidDate(_))
        ));
    }

    #[test]
    fn missing_contact_errors() {
        let mut book = AddressBook::new();
        assert!(matches!(
            add(&mut book, "Anna", "06.01.1990"),
            Err(GreetbookError::ContactNotFound(_))
        ));
        assert!(matches!(
            show(&book, "Anna"),
            Err(GreetbookError::ContactNotFound(_))
        ));
    }

    #[test]
    fn contact_without_birthday_reports_none() {
        let mut book = AddressBook::new();
        add_cmd::run(&mut book, "Anna", "1234567890").unwrap();
        let result = show(&book, "Anna").unwrap();
        assert!(result.messages[0].content.contains("No birthday recorded"));
    }
}
