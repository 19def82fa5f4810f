//! Meeting calendar rules
//!
//! Stand-ups happen on Monday, Wednesday and Friday. Weekends are off days:
//! nobody is drawn and the last moderator stays on display.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use shared::{Event, EventKind};

use crate::error::{ModeratorError, ModeratorResult};

pub fn is_off_day(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Fail with `OffDay` on weekends
pub fn ensure_working_day(today: NaiveDate) -> ModeratorResult<()> {
    if is_off_day(today) {
        return Err(ModeratorError::OffDay {
            weekday: today.weekday(),
        });
    }
    Ok(())
}

/// Closest upcoming Monday, Wednesday or Friday after `today`
///
/// `None` on weekends.
pub fn next_standup_date(today: NaiveDate) -> Option<NaiveDate> {
    let days_ahead = match today.weekday() {
        Weekday::Mon => 2,
        Weekday::Tue => 1,
        Weekday::Wed => 2,
        Weekday::Thu => 1,
        Weekday::Fri => 3,
        Weekday::Sat | Weekday::Sun => return None,
    };
    Some(today + Duration::days(days_ahead))
}

/// Default date offered for the next draw of `kind`
///
/// Retrospectives default to the last recorded retrospective, so a fresh
/// draw replaces it; with no history they default to today.
pub fn default_date(kind: EventKind, today: NaiveDate, events: &[Event]) -> Option<NaiveDate> {
    if is_off_day(today) {
        return None;
    }
    match kind {
        EventKind::Standup => next_standup_date(today),
        EventKind::Retrospective => Some(events.last().map_or(today, |event| event.date)),
    }
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // 2024-01-01 is a Monday
    #[test]
    fn test_next_standup_dates() {
        assert_eq!(next_standup_date(date(2024, 1, 1)), Some(date(2024, 1, 3)));
        assert_eq!(next_standup_date(date(2024, 1, 2)), Some(date(2024, 1, 3)));
        assert_eq!(next_standup_date(date(2024, 1, 3)), Some(date(2024, 1, 5)));
        assert_eq!(next_standup_date(date(2024, 1, 4)), Some(date(2024, 1, 5)));
        assert_eq!(next_standup_date(date(2024, 1, 5)), Some(date(2024, 1, 8)));
        assert_eq!(next_standup_date(date(2024, 1, 6)), None);
        assert_eq!(next_standup_date(date(2024, 1, 7)), None);
    }

    #[test]
    fn test_off_days() {
        assert!(is_off_day(date(2024, 1, 6)));
        assert!(is_off_day(date(2024, 1, 7)));
        assert!(!is_off_day(date(2024, 1, 8)));

        assert!(matches!(
            ensure_working_day(date(2024, 1, 6)),
            Err(ModeratorError::OffDay { weekday: Weekday::Sat })
        ));
        assert!(ensure_working_day(date(2024, 1, 5)).is_ok());
    }

    #[test]
    fn test_retrospective_default_is_last_date() {
        let events = vec![Event::new(date(2023, 12, 20), "Alice")];

        assert_eq!(
            default_date(EventKind::Retrospective, date(2024, 1, 2), &events),
            Some(date(2023, 12, 20))
        );
        assert_eq!(
            default_date(EventKind::Retrospective, date(2024, 1, 2), &[]),
            Some(date(2024, 1, 2))
        );
        assert_eq!(default_date(EventKind::Retrospective, date(2024, 1, 6), &events), None);
    }

    #[test]
    fn test_month_start() {
        assert_eq!(month_start(date(2024, 2, 29)), date(2024, 2, 1));
    }
}
