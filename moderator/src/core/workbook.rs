//! Three-sheet history artifact format
//!
//! The artifact is a single JSON document with one array per sheet:
//!
//! ```json
//! {
//!   "moderators": [{ "moderator": "Alice", "is_active": true }],
//!   "standup_history": [{ "date": "2024-01-03", "moderator": "Alice" }],
//!   "retrospective_history": []
//! }
//! ```

use serde::{Deserialize, Serialize};
use shared::{Event, EventKind, HistorySnapshot, Moderator, format_date, parse_date};

use crate::error::{ModeratorError, ModeratorResult};

pub const MODERATORS_SHEET: &str = "moderators";

#[derive(Debug, Serialize, Deserialize)]
struct Workbook {
    moderators: Vec<Moderator>,
    standup_history: Vec<EventRow>,
    retrospective_history: Vec<EventRow>,
}

#[derive(Debug, Serialize, Deserialize)]
struct EventRow {
    date: String,
    moderator: String,
}

impl From<&Event> for EventRow {
    fn from(event: &Event) -> Self {
        Self {
            date: format_date(event.date),
            moderator: event.moderator.clone(),
        }
    }
}

/// Serialize a snapshot into artifact bytes
pub fn encode(snapshot: &HistorySnapshot) -> ModeratorResult<Vec<u8>> {
    let workbook = Workbook {
        moderators: snapshot.roster.clone(),
        standup_history: snapshot.standups.iter().map(EventRow::from).collect(),
        retrospective_history: snapshot.retrospectives.iter().map(EventRow::from).collect(),
    };
    Ok(serde_json::to_vec_pretty(&workbook)?)
}

/// Parse artifact bytes into a snapshot
pub fn decode(bytes: &[u8]) -> ModeratorResult<HistorySnapshot> {
    let workbook: Workbook = serde_json::from_slice(bytes).map_err(|e| ModeratorError::MalformedArtifact {
        message: e.to_string(),
    })?;

    Ok(HistorySnapshot {
        roster: workbook.moderators,
        standups: parse_rows(EventKind::Standup, workbook.standup_history)?,
        retrospectives: parse_rows(EventKind::Retrospective, workbook.retrospective_history)?,
    })
}

fn parse_rows(kind: EventKind, rows: Vec<EventRow>) -> ModeratorResult<Vec<Event>> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            let date = parse_date(&row.date).map_err(|_| ModeratorError::ParseError {
                sheet: kind.sheet_name().to_string(),
                row: index + 1,
                value: row.date.clone(),
            })?;
            Ok(Event::new(date, row.moderator))
        })
        .collect()
}
