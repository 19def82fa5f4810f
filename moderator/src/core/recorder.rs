//! Appending drawn moderators to a meeting history

use chrono::NaiveDate;
use shared::Event;

use crate::error::{ModeratorError, ModeratorResult};

/// Record `chosen` as the moderator for `event_date`
///
/// A trailing event on the same date is a pending placeholder and is
/// replaced, so each date holds at most one trailing entry. Dates earlier
/// than the last stored date are rejected.
pub fn record(mut events: Vec<Event>, chosen: &str, event_date: NaiveDate) -> ModeratorResult<Vec<Event>> {
    ensure_not_before_last(&events, event_date)?;

    if events.last().is_some_and(|last| last.date == event_date) {
        if let Some(pending) = events.pop() {
            tracing::debug!("♻️ Replacing pending entry {}", pending);
        }
    }

    events.push(Event::new(event_date, chosen));
    Ok(events)
}

/// Check that `event_date` may be recorded after `events`
pub fn ensure_not_before_last(events: &[Event], event_date: NaiveDate) -> ModeratorResult<()> {
    match events.last() {
        Some(last) if event_date < last.date => Err(ModeratorError::EventDateRegression {
            requested: event_date,
            last: last.date,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_date_replaces_pending_entry() {
        let events = vec![Event::new(date(2024, 1, 1), "Bob")];

        let events = record(events, "Alice", date(2024, 1, 1)).unwrap();

        assert_eq!(events, vec![Event::new(date(2024, 1, 1), "Alice")]);
    }

    #[test]
    fn test_recording_twice_keeps_one_entry_for_the_date() {
        let events = vec![
            Event::new(date(2024, 1, 1), "Bob"),
            Event::new(date(2024, 1, 3), "Carol"),
        ];

        let events = record(events, "Dan", date(2024, 1, 5)).unwrap();
        let events = record(events, "Eve", date(2024, 1, 5)).unwrap();

        let on_date: Vec<_> = events.iter().filter(|e| e.date == date(2024, 1, 5)).collect();
        assert_eq!(on_date.len(), 1);
        assert_eq!(on_date[0].moderator, "Eve");
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn test_later_date_appends() {
        let events = vec![Event::new(date(2024, 1, 1), "Bob")];

        let events = record(events, "Carol", date(2024, 1, 8)).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[1], Event::new(date(2024, 1, 8), "Carol"));
    }

    #[test]
    fn test_empty_history_appends() {
        let events = record(Vec::new(), "Alice", date(2024, 1, 1)).unwrap();
        assert_eq!(events, vec![Event::new(date(2024, 1, 1), "Alice")]);
    }

    #[test]
    fn test_earlier_date_rejected() {
        let events = vec![Event::new(date(2024, 1, 8), "Bob")];

        let result = record(events, "Alice", date(2024, 1, 1));

        match result {
            Err(ModeratorError::EventDateRegression { requested, last }) => {
                assert_eq!(requested, date(2024, 1, 1));
                assert_eq!(last, date(2024, 1, 8));
            }
            other => panic!("expected EventDateRegression, got {other:?}"),
        }
    }

    #[test]
    fn test_ensure_not_before_last() {
        let events = vec![Event::new(date(2024, 1, 8), "Bob")];

        assert!(ensure_not_before_last(&events, date(2024, 1, 8)).is_ok());
        assert!(ensure_not_before_last(&events, date(2024, 1, 9)).is_ok());
        assert!(ensure_not_before_last(&events, date(2024, 1, 7)).is_err());
        assert!(ensure_not_before_last(&[], date(2024, 1, 7)).is_ok());
    }
}
