use crate::error::{GreetbookError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text form used for birthday input and display.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A contact's name. Trimmed on construction; the identity key of a
/// [`Record`] within the book, compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(GreetbookError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number: exactly 10 ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: &str) -> Result<Self> {
        if value.len() != 10 || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(GreetbookError::InvalidPhone(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A birthday, parsed from `DD.MM.YYYY` text. Serializes as chrono's ISO
/// date form, which round-trips losslessly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(value: &str) -> Result<Self> {
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| GreetbookError::InvalidDate(value.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// One contact: a name, an ordered list of phones, an optional birthday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: Name,
    pub phones: Vec<Phone>,
    pub birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Append a phone. Duplicate values within one record are rejected.
    pub fn add_phone(&mut self, phone: Phone) -> Result<()> {
        if self.find_phone(phone.as_str()).is_some() {
            return Err(GreetbookError::DuplicatePhone(phone.as_str().to_string()));
        }
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone matching `value`. Errors if absent.
    pub fn remove_phone(&mut self, value: &str) -> Result<()> {
        let pos = self
            .phones
            .iter()
            .position(|p| p.as_str() == value)
            .ok_or_else(|| GreetbookError::PhoneNotFound(value.to_string()))?;
        self.phones.remove(pos);
        Ok(())
    }

    /// Replace `old_value` with a new phone, preserving its position.
    pub fn edit_phone(&mut self, old_value: &str, new_phone: Phone) -> Result<()> {
        if self
            .phones
            .iter()
            .any(|p| p.as_str() == new_phone.as_str() && p.as_str() != old_value)
        {
            return Err(GreetbookError::DuplicatePhone(
                new_phone.as_str().to_string(),
            ));
        }
        let pos = self
            .phones
            .iter()
            .position(|p| p.as_str() == old_value)
            .ok_or_else(|| GreetbookError::PhoneNotFound(old_value.to_string()))?;
        self.phones[pos] = new_phone;
        Ok(())
    }

    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Attach a birthday, overwriting any existing one.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for phone in &self.phones {
            write!(f, "\n  {}", phone)?;
        }
        if let Some(birthday) = &self.birthday {
            write!(f, "\n  born {}", birthday)?;
        }
        Ok(())
    }
}
