//! Service implementations
//!
//! Real implementations of the traits in `crate::traits`, handling actual
//! file I/O and the system clock.

pub mod clock;
pub mod file_store;

#[cfg(test)]
mod tests;

pub use clock::SystemClock;
pub use file_store::FileHistoryStore;
