//! # Birthday Engine
//!
//! The upcoming-birthday computation: next occurrence of a stored birthday,
//! weekend adjustment, and window filtering.
//!
//! Everything here is a pure function over `chrono::NaiveDate` — `today`
//! is always an explicit parameter, never read from the system clock, so
//! every case can be tested against a frozen calendar. The session layer
//! supplies `Local::now().date_naive()`.
//!
//! Policies (see DESIGN.md):
//! - A Feb-29 birthday whose next occurrence lands in a non-leap year is
//!   observed on Feb-28.
//! - Window filtering uses the unshifted occurrence; the weekend shift
//!   never adds or removes a candidate, so a shifted congratulation date
//!   may fall up to two days past `today + window`.
//! - Ties on equal congratulation date keep the book's name order.

use crate::book::AddressBook;
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// One entry of the upcoming-birthday report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upcoming {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

/// The birthday's month/day placed in `year`. Feb-29 in a non-leap year
/// lands on Feb-28; every other month/day is valid in every year.
fn occurrence_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or_default()
}

/// The next calendar occurrence of `birthday` on or after `today`.
/// Rolls to next year when this year's date has already passed.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = occurrence_in_year(birthday, today.year());
    if this_year < today {
        occurrence_in_year(birthday, today.year() + 1)
    } else {
        this_year
    }
}

/// Shift a weekend date to the following Monday: Saturday +2, Sunday +1,
/// weekdays unchanged.
pub fn adjust_for_weekend(date: NaiveDate) -> NaiveDate {
    let shift = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => return date,
    };
    date.checked_add_days(Days::new(shift)).unwrap_or(date)
}

/// Contacts whose next birthday occurrence falls within `window_days` of
/// `today` (both boundaries inclusive), with weekend occurrences shifted
/// to the following Monday. Sorted by ascending congratulation date, ties
/// by contact name. Read-only: identical inputs give identical results.
pub fn upcoming_birthdays(
    book: &AddressBook,
    today: NaiveDate,
    window_days: u32,
) -> Vec<Upcoming> {
    let mut upcoming: Vec<Upcoming> = book
        .records()
        .filter_map(|record| {
            let birthday = record.birthday.as_ref()?;
            let next = next_occurrence(birthday.date(), today);
            let delta = (next - today).num_days();
            if delta <= i64::from(window_days) {
                Some(Upcoming {
                    name: record.name.as_str().to_string(),
                    congratulation_date: adjust_for_weekend(next),
                })
            } else {
                None
            }
        })
        .collect();

    // Stable sort: ties keep the book's name order.
    upcoming.sort_by_key(|u| u.congratulation_date);
    upcoming
}
