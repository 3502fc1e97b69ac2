use crate::birthdays::upcoming_birthdays;
use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GreetbookError, Result};
use crate::model::DATE_FORMAT;
use chrono::NaiveDate;

pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// `birthdays [days]`: report contacts to congratulate within the window.
/// `today` comes from the caller so the computation stays clock-free.
pub fn run(book: &AddressBook, today: NaiveDate, window_days: u32) -> Result<CmdResult> {
    let upcoming = upcoming_birthdays(book, today, window_days);

    if upcoming.is_empty() {
        return Ok(
            CmdResult::message(CmdMessage::info("No upcoming birthdays.")).with_upcoming(upcoming)
        );
    }

    let mut lines = vec!["Upcoming birthdays:".to_string()];
    for entry in &upcoming {
        lines.push(format!(
            "  {} - {}",
            entry.name,
            entry.congratulation_date.format(DATE_FORMAT)
        ));
    }

    Ok(CmdResult::message(CmdMessage::info(lines.join("\n"))).with_upcoming(upcoming))
}

/// Parse the optional window argument of the `birthdays` command.
pub fn parse_window(arg: Option<&str>) -> Result<u32> {
    match arg {
        None => Ok(DEFAULT_WINDOW_DAYS),
        Some(text) => text
            .parse()
            .map_err(|_| GreetbookError::InvalidWindow(text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, birthday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_report_says_so() {
        let book = AddressBook::new();
        let result = run(&book, date(2024, 1, 5), 7).unwrap();
        assert!(result.upcoming.is_empty());
        assert_eq!(result.messages[0].content, "No upcoming birthdays.");
    }

    #[test]
    fn report_lists_congratulation_dates() {
        let mut book = AddressBook::new();
        add::run(&mut book, "Anna", "1234567890").unwrap();
        birthday::add(&mut book, "Anna", "06.01.1990").unwrap();

        let result = run(&book, date(2024, 1, 5), 7).unwrap();
        assert_eq!(result.upcoming.len(), 1);
        // Saturday shifted to Monday.
        assert!(result.messages[0].content.contains("Anna - 08.01.2024"));
    }

    #[test]
    fn window_argument_parses_with_default() {
        assert_eq!(parse_window(None).unwrap(), DEFAULT_WINDOW_DAYS);
        assert_eq!(parse_window(Some("30")).unwrap(), 30);
        assert_eq!(parse_window(Some("0")).unwrap(), 0);
        assert!(matches!(
            parse_window(Some("-1")),
            Err(GreetbookError::InvalidWindow(_))
        ));
        assert!(matches!(
            parse_window(Some("soon")),
            Err(GreetbookError::InvalidWindow(_))
        ));
    }
}
