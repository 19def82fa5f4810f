//! Test fixtures for roster and history data

use chrono::NaiveDate;
use shared::{Event, HistorySnapshot, Moderator};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Thursday; the next stand-up is Friday 2024-01-12
    pub fn thursday() -> NaiveDate {
        Self::date(2024, 1, 11)
    }

    pub fn friday() -> NaiveDate {
        Self::date(2024, 1, 12)
    }

    pub fn saturday() -> NaiveDate {
        Self::date(2024, 1, 13)
    }

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    pub fn roster() -> Vec<Moderator> {
        vec![
            Moderator::active("Alice"),
            Moderator::active("Bob"),
            Moderator::active("Carol"),
            Moderator::active("Dan"),
            Moderator::new("Erin", false),
        ]
    }

    pub fn standups() -> Vec<Event> {
        vec![
            Event::new(Self::date(2023, 12, 29), "Erin"),
            Event::new(Self::date(2024, 1, 3), "Alice"),
            Event::new(Self::date(2024, 1, 5), "Carol"),
            Event::new(Self::date(2024, 1, 8), "Bob"),
            Event::new(Self::date(2024, 1, 10), "Alice"),
        ]
    }

    pub fn retrospectives() -> Vec<Event> {
        vec![
            Event::new(Self::date(2023, 12, 6), "Bob"),
            Event::new(Self::date(2023, 12, 20), "Dan"),
            Event::new(Self::date(2024, 1, 3), "Carol"),
        ]
    }

    pub fn snapshot() -> HistorySnapshot {
        HistorySnapshot::new(Self::roster(), Self::standups(), Self::retrospectives())
    }
}
