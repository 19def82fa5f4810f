//! Shared error types for roster and history data

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("Unknown meeting kind: {input}")]
    UnknownEventKind { input: String },

    #[error("Moderator name cannot be empty")]
    EmptyName,

    #[error("Moderator already exists: {name}")]
    DuplicateModerator { name: String },

    #[error("Unknown moderator: {name}")]
    UnknownModerator { name: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
