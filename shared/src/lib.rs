//! Shared types for the next-moderator tool
//!
//! Holds the roster and meeting-history data model used by every layer,
//! plus the tracing setup shared by the binary and tests.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
