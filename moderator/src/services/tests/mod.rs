//! Service-specific tests
//!
//! Each service has its own test file with dedicated fixtures and helpers.


// Common test utilities for services
pub mod common {
    use chrono::NaiveDate;
    use shared::{Event, HistorySnapshot, Moderator};

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    /// Small snapshot with every sheet populated
    pub fn sample_snapshot() -> HistorySnapshot {
        HistorySnapshot::new(
            vec![
                Moderator::active("Alice"),
                Moderator::active("Bob"),
                Moderator::new("Carol", false),
            ],
            vec![
                Event::new(date(2024, 1, 1), "Alice"),
                Event::new(date(2024, 1, 3), "Bob"),
            ],
            vec![Event::new(date(2023, 12, 20), "Carol")],
        )
    }
}
