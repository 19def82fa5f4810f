//! Core business logic modules
//!
//! Pure functions over the in-memory history with no I/O. Randomness and
//! "today" are passed in, so everything here is deterministic under test.

pub mod leaderboard;
pub mod recorder;
pub mod roster;
pub mod schedule;
pub mod selector;
pub mod workbook;

pub use leaderboard::{LeaderboardRow, Leaderboards};
pub use recorder::record;
pub use selector::select_next;
