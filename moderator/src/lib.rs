//! Next moderator library
//!
//! Randomly picks the next stand-up or retrospective moderator from the
//! available team members, skipping whoever moderated most recently, and
//! keeps the roster and both meeting histories in one shared artifact.

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod session;
pub mod traits;

// Re-export commonly used types
pub use config::StoreConfig;
pub use crate::core::{LeaderboardRow, Leaderboards, record, select_next};
pub use error::{ModeratorError, ModeratorResult};
pub use session::{Draw, DrawRequest, Overview, Session};
pub use traits::{Clock, HistoryStore};
