//! Read-only leaderboard aggregation over a meeting history

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use shared::{Event, Moderator};

use crate::core::schedule::month_start;

/// Number of entries shown in the recent moderators table
pub const RECENT_LIMIT: usize = 8;

/// Moderation count for one moderator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub moderator: String,
    pub count: usize,
    /// Holds the highest count on this board (ties share the lead)
    pub leader: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboards {
    pub this_month: Vec<LeaderboardRow>,
    pub all_time: Vec<LeaderboardRow>,
    pub recent: Vec<Event>,
}

/// Build all boards for one meeting history
///
/// `cutoff` is the next default session date; entries on or after it are
/// pending and left out of the monthly board and the recent table.
pub fn build(events: &[Event], roster: &[Moderator], today: NaiveDate, cutoff: Option<NaiveDate>) -> Leaderboards {
    Leaderboards {
        this_month: this_month(events, today, cutoff),
        all_time: all_time(events, roster),
        recent: recent(events, cutoff, RECENT_LIMIT),
    }
}

/// Counts for events from the first of today's month up to `cutoff`
pub fn this_month(events: &[Event], today: NaiveDate, cutoff: Option<NaiveDate>) -> Vec<LeaderboardRow> {
    let start = month_start(today);
    to_rows(
        events
            .iter()
            .filter(|event| event.date >= start && before_cutoff(event, cutoff))
            .map(|event| event.moderator.as_str()),
    )
}

/// Counts for active moderators over the whole history
///
/// The most recent entry is the pending one and does not count yet.
pub fn all_time(events: &[Event], roster: &[Moderator]) -> Vec<LeaderboardRow> {
    let active: HashSet<&str> = roster
        .iter()
        .filter(|m| m.active)
        .map(|m| m.name.as_str())
        .collect();

    let settled = match events.split_last() {
        Some((_, settled)) => settled,
        None => events,
    };

    to_rows(
        settled
            .iter()
            .map(|event| event.moderator.as_str())
            .filter(|name| active.contains(name)),
    )
}

/// Up to `limit` events before `cutoff`, newest first
pub fn recent(events: &[Event], cutoff: Option<NaiveDate>, limit: usize) -> Vec<Event> {
    events
        .iter()
        .rev()
        .filter(|event| before_cutoff(event, cutoff))
        .take(limit)
        .cloned()
        .collect()
}

fn before_cutoff(event: &Event, cutoff: Option<NaiveDate>) -> bool {
    cutoff.is_none_or(|cutoff| event.date < cutoff)
}

fn to_rows<'a>(names: impl Iterator<Item = &'a str>) -> Vec<LeaderboardRow> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for name in names {
        *counts.entry(name).or_default() += 1;
    }

    let max = counts.values().copied().max().unwrap_or(0);
    counts
        .into_iter()
        .map(|(moderator, count)| LeaderboardRow {
            moderator: moderator.to_string(),
            count,
            leader: count == max,
        })
        .collect()
}
