//! Trait definitions with mockall annotations for testing
//!
//! The session depends only on these seams: where the history artifact lives
//! and what day it is. Real implementations live in `services`.

use chrono::NaiveDate;
use shared::HistorySnapshot;

use crate::error::ModeratorResult;

/// Whole-artifact storage for the roster and both meeting histories
#[mockall::automock]
#[async_trait::async_trait]
pub trait HistoryStore: Send + Sync {
    /// Load the complete snapshot
    ///
    /// Every date column is parsed into a calendar date; a malformed value
    /// aborts the load with `ModeratorError::ParseError`.
    async fn load(&self) -> ModeratorResult<HistorySnapshot>;

    /// Replace the stored artifact with `snapshot`
    ///
    /// Overwrite semantics: callers pass the complete, already updated
    /// snapshot. Saving the same snapshot twice is harmless.
    async fn save(&self, snapshot: &HistorySnapshot) -> ModeratorResult<()>;
}

/// Source of "today"
#[mockall::automock]
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
