//! Core shared types for the moderator roster and meeting history

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{SharedError, SharedResult};

/// Date format used for every date column in the history artifact
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A team member who can moderate meetings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Moderator {
    #[serde(rename = "moderator")]
    pub name: String,
    #[serde(rename = "is_active")]
    pub active: bool,
}

impl Moderator {
    pub fn new(name: impl Into<String>, active: bool) -> Self {
        Self {
            name: name.into(),
            active,
        }
    }

    pub fn active(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }
}

/// A single meeting occurrence and who moderated it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub date: NaiveDate,
    pub moderator: String,
}

impl Event {
    pub fn new(date: NaiveDate, moderator: impl Into<String>) -> Self {
        Self {
            date,
            moderator: moderator.into(),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date.format(DATE_FORMAT), self.moderator)
    }
}

/// Kind of meeting a moderator is drawn for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Standup,
    Retrospective,
}

impl EventKind {
    /// Number of most recent entries whose moderators may not be drawn again
    pub fn exclusion_window(self) -> usize {
        match self {
            EventKind::Standup => 1,
            EventKind::Retrospective => 3,
        }
    }

    /// Name of the sheet holding this kind's history
    pub fn sheet_name(self) -> &'static str {
        match self {
            EventKind::Standup => "standup_history",
            EventKind::Retrospective => "retrospective_history",
        }
    }

    /// Human readable label
    pub fn label(self) -> &'static str {
        match self {
            EventKind::Standup => "Stand-Up",
            EventKind::Retrospective => "Retrospective",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Standup => write!(f, "standup"),
            EventKind::Retrospective => write!(f, "retrospective"),
        }
    }
}

impl FromStr for EventKind {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standup" | "stand-up" => Ok(EventKind::Standup),
            "retro" | "retrospective" => Ok(EventKind::Retrospective),
            other => Err(SharedError::UnknownEventKind {
                input: other.to_string(),
            }),
        }
    }
}

/// Roster plus both meeting histories, loaded and persisted as one unit
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistorySnapshot {
    pub roster: Vec<Moderator>,
    pub standups: Vec<Event>,
    pub retrospectives: Vec<Event>,
}

impl HistorySnapshot {
    pub fn new(roster: Vec<Moderator>, standups: Vec<Event>, retrospectives: Vec<Event>) -> Self {
        Self {
            roster,
            standups,
            retrospectives,
        }
    }

    pub fn events(&self, kind: EventKind) -> &[Event] {
        match kind {
            EventKind::Standup => &self.standups,
            EventKind::Retrospective => &self.retrospectives,
        }
    }

    pub fn events_mut(&mut self, kind: EventKind) -> &mut Vec<Event> {
        match kind {
            EventKind::Standup => &mut self.standups,
            EventKind::Retrospective => &mut self.retrospectives,
        }
    }

    /// Most recent event of the given kind (today's or the pending one)
    pub fn last_event(&self, kind: EventKind) -> Option<&Event> {
        self.events(kind).last()
    }

    /// Names of active moderators in roster order
    pub fn active_names(&self) -> Vec<String> {
        self.roster
            .iter()
            .filter(|m| m.active)
            .map(|m| m.name.clone())
            .collect()
    }

    pub fn moderator(&self, name: &str) -> Option<&Moderator> {
        self.roster.iter().find(|m| m.name == name)
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.moderator(name).is_some_and(|m| m.active)
    }
}

/// Parse a date column value
pub fn parse_date(value: &str) -> SharedResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| SharedError::InvalidDate {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
