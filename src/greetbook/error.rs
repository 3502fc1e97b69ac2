use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreetbookError {
    #[error("Phone number must be 10 digits, got '{0}'.")]
    InvalidPhone(String),

    #[error("Accepted date format: 'DD.MM.YYYY', got '{0}'.")]
    InvalidDate(String),

    #[error("Contact name cannot be empty.")]
    EmptyName,

    #[error("Contact '{0}' not found.")]
    ContactNotFound(String),

    #[error("Phone number '{0}' not found.")]
    PhoneNotFound(String),

    #[error("Phone number '{0}' already exists.")]
    DuplicatePhone(String),

    #[error("Invalid day count '{0}'.")]
    InvalidWindow(String),

    #[error("Invalid arguments. Usage:\n{usage}")]
    MissingArguments { usage: String },

    #[error("Unknown command '{0}'.")]
    UnknownCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, GreetbookError>;
