//! Moderator selection and history error types

use chrono::{NaiveDate, Weekday};
use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModeratorError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("No eligible candidate: all {candidates} candidates moderated one of the last {window} sessions")]
    NoEligibleCandidate { candidates: usize, window: usize },

    #[error("Event date {requested} is earlier than the last recorded date {last}")]
    EventDateRegression { requested: NaiveDate, last: NaiveDate },

    #[error("{weekday} is an off day, no moderator is drawn")]
    OffDay { weekday: Weekday },

    #[error("Failed to parse {sheet} row {row}: invalid date '{value}'")]
    ParseError { sheet: String, row: usize, value: String },

    #[error("Malformed history artifact: {message}")]
    MalformedArtifact { message: String },

    #[error("History artifact not found: {path}")]
    StoreNotFound { path: String },

    #[error("Failed to persist history snapshot: {message}")]
    Persist { message: String },

    #[error("Configuration error: {field}")]
    ConfigurationError { field: String },

    #[error("Roster error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ModeratorError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn persist(message: impl Into<String>) -> Self {
        Self::Persist {
            message: message.into(),
        }
    }

    pub fn config(field: impl Into<String>) -> Self {
        Self::ConfigurationError { field: field.into() }
    }
}

pub type ModeratorResult<T> = Result<T, ModeratorError>;
