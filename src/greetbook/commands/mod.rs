//! # Command Layer
//!
//! Pure business logic for each user-facing command. Every module exposes
//! `run` functions that take the address book and plain arguments and
//! return a [`CmdResult`]; nothing here touches stdin, stdout, or the
//! filesystem, so the whole layer is testable without a terminal.

pub mod add;
pub mod birthday;
pub mod change;
pub mod delete;
pub mod show;
pub mod upcoming;

use crate::birthdays::Upcoming;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of one command: messages for the UI to render plus,
/// for the birthday report, the computed entries.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub upcoming: Vec<Upcoming>,
}

impl CmdResult {
    pub fn message(message: CmdMessage) -> Self {
        Self {
            messages: vec![message],
            upcoming: Vec::new(),
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_upcoming(mut self, upcoming: Vec<Upcoming>) -> Self {
        self.upcoming = upcoming;
        self
    }
}
