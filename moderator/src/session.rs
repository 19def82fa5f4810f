//! Session-scoped state
//!
//! A `Session` loads the history snapshot once, serves every read from that
//! cached copy and drops the cache after each successful write so the next
//! read goes back to the store.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::{logging, Event, EventKind, HistorySnapshot, Moderator, SharedResult};
use tracing::{debug, info, warn};

use crate::core::{leaderboard, record, recorder, roster, schedule, select_next, selector, Leaderboards};
use crate::error::{ModeratorError, ModeratorResult};
use crate::traits::{Clock, HistoryStore};

/// What the user asked for when pressing "draw"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawRequest {
    pub kind: EventKind,
    pub candidates: BTreeSet<String>,
    /// Session date; the kind's default date when `None`
    pub date: Option<NaiveDate>,
    /// Record and save the result
    pub persist: bool,
}

impl DrawRequest {
    pub fn new<I, S>(kind: EventKind, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            candidates: candidates.into_iter().map(Into::into).collect(),
            date: None,
            persist: true,
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn dry_run(mut self) -> Self {
        self.persist = false;
        self
    }
}

/// Outcome of a successful draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub kind: EventKind,
    pub date: NaiveDate,
    pub moderator: String,
    pub persisted: bool,
    /// Pending entry on the same date that this draw replaced
    pub replaced: Option<Event>,
    /// Only one candidate was available, so there was nothing to draw
    pub lone_candidate: bool,
}

/// Current state of one meeting kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overview {
    pub kind: EventKind,
    pub last: Option<Event>,
    /// The last event is today's
    pub is_today: bool,
    pub off_day: bool,
    pub default_date: Option<NaiveDate>,
    pub available: Vec<String>,
}

pub struct Session<S, C>
where
    S: HistoryStore,
    C: Clock,
{
    store: S,
    clock: C,
    rng: StdRng,
    cached: Option<HistorySnapshot>,
    /// The cached snapshot holds changes whose save failed
    unsaved: bool,
    /// Draw recorded in the unsaved snapshot
    unsaved_draw: Option<Draw>,
}

impl<S, C> Session<S, C>
where
    S: HistoryStore,
    C: Clock,
{
    pub fn new(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            rng: StdRng::from_entropy(),
            cached: None,
            unsaved: false,
            unsaved_draw: None,
        }
    }

    /// Replace the random source, e.g. with a seeded one in tests
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Cached snapshot, loading it on first use
    pub async fn snapshot(&mut self) -> ModeratorResult<&HistorySnapshot> {
        let snapshot = match self.cached.take() {
            Some(snapshot) => snapshot,
            None => self.store.load().await?,
        };
        Ok(&*self.cached.insert(snapshot))
    }

    /// Drop the cached snapshot; the next read loads from the store
    pub fn invalidate(&mut self) {
        if self.unsaved {
            warn!("⚠️ Discarding history changes that were never saved");
        }
        self.cached = None;
        self.unsaved = false;
        self.unsaved_draw = None;
        debug!("🧹 Snapshot cache invalidated");
    }

    pub async fn reload(&mut self) -> ModeratorResult<&HistorySnapshot> {
        self.invalidate();
        self.snapshot().await
    }

    pub async fn overview(&mut self, kind: EventKind) -> ModeratorResult<Overview> {
        let today = self.clock.today();
        let snapshot = self.snapshot().await?;
        let events = snapshot.events(kind);
        let last = events.last().cloned();

        Ok(Overview {
            kind,
            is_today: last.as_ref().is_some_and(|event| event.date == today),
            off_day: schedule::is_off_day(today),
            default_date: schedule::default_date(kind, today, events),
            available: snapshot.active_names(),
            last,
        })
    }

    /// Draw the next moderator and, when requested, record and save it
    pub async fn draw(&mut self, request: DrawRequest) -> ModeratorResult<Draw> {
        let kind = request.kind;
        let today = self.clock.today();
        schedule::ensure_working_day(today)?;

        if request.candidates.is_empty() {
            return Err(ModeratorError::invalid_input("select at least one candidate"));
        }

        let snapshot = self.snapshot().await?.clone();
        if let Some(unknown) = request.candidates.iter().find(|name| !snapshot.is_active(name)) {
            return Err(ModeratorError::invalid_input(format!(
                "{unknown} is not an active moderator"
            )));
        }

        let lone_candidate = request.candidates.len() == 1;
        if lone_candidate {
            warn!("🤨 Only one team member is available, the draw is a formality");
        }

        let events = snapshot.events(kind);
        let date = request
            .date
            .or_else(|| schedule::default_date(kind, today, events))
            .ok_or(ModeratorError::OffDay {
                weekday: today.weekday(),
            })?;
        recorder::ensure_not_before_last(events, date)?;

        let history = selector::selection_history(events, date);
        let moderator = select_next(history, &request.candidates, kind.exclusion_window(), &mut self.rng)?;
        let replaced = events
            .last()
            .filter(|event| request.persist && event.date == date)
            .cloned();

        info!("🎯 {} {} moderator: {}", date, kind.label(), moderator);

        let mut draw = Draw {
            kind,
            date,
            moderator,
            persisted: false,
            replaced,
            lone_candidate,
        };

        if request.persist {
            let mut updated = snapshot;
            let recorded = record(std::mem::take(updated.events_mut(kind)), &draw.moderator, date)?;
            *updated.events_mut(kind) = recorded;
            if let Err(e) = self.persist(updated).await {
                self.unsaved_draw = Some(draw);
                return Err(e);
            }
            draw.persisted = true;
        }

        Ok(draw)
    }

    /// Save the cached snapshot again after a failed persist
    ///
    /// Saves are full overwrites, so repeating one is safe. Returns the
    /// draw whose save failed, now persisted, if there was one.
    pub async fn retry_save(&mut self) -> ModeratorResult<Option<Draw>> {
        if !self.unsaved {
            debug!("Nothing to retry, no unsaved changes");
            return Ok(None);
        }
        let Some(snapshot) = self.cached.take() else {
            return Ok(None);
        };

        let draw = self.unsaved_draw.take();
        match self.persist(snapshot).await {
            Ok(()) => Ok(draw.map(|draw| Draw {
                persisted: true,
                ..draw
            })),
            Err(e) => {
                self.unsaved_draw = draw;
                Err(e)
            }
        }
    }

    /// Leaderboards for one meeting kind
    ///
    /// Only events before the kind's default date count towards this month's
    /// board and the recent list. For retrospectives that date is the last
    /// retrospective itself, so the latest one is always left out, however
    /// long ago it took place.
    pub async fn leaderboards(&mut self, kind: EventKind) -> ModeratorResult<Leaderboards> {
        let today = self.clock.today();
        let snapshot = self.snapshot().await?;
        let events = snapshot.events(kind);
        let cutoff = schedule::default_date(kind, today, events);

        Ok(leaderboard::build(events, &snapshot.roster, today, cutoff))
    }

    /// Apply a roster edit and save the full snapshot
    ///
    /// The roster is validated and sorted by name before saving.
    pub async fn update_roster<F>(&mut self, edit: F) -> ModeratorResult<Vec<Moderator>>
    where
        F: FnOnce(&mut Vec<Moderator>) -> SharedResult<()>,
    {
        let mut snapshot = self.snapshot().await?.clone();
        edit(&mut snapshot.roster)?;
        snapshot.roster = roster::normalize(std::mem::take(&mut snapshot.roster))?;

        let saved = snapshot.roster.clone();
        self.persist(snapshot).await?;
        info!("👥 Saved roster with {} moderators", saved.len());
        Ok(saved)
    }

    /// Replace the whole roster
    pub async fn save_roster(&mut self, roster: Vec<Moderator>) -> ModeratorResult<Vec<Moderator>> {
        self.update_roster(|current| {
            *current = roster;
            Ok(())
        })
        .await
    }

    /// Save `snapshot`; keep it cached as unsaved when the store fails
    async fn persist(&mut self, snapshot: HistorySnapshot) -> ModeratorResult<()> {
        match self.store.save(&snapshot).await {
            Ok(()) => {
                self.cached = None;
                self.unsaved = false;
                self.unsaved_draw = None;
                debug!("💾 Snapshot saved, cache invalidated");
                Ok(())
            }
            Err(e) => {
                logging::log_error("Saving history", &e);
                self.cached = Some(snapshot);
                self.unsaved = true;
                Err(match e {
                    ModeratorError::Persist { .. } => e,
                    other => ModeratorError::persist(other.to_string()),
                })
            }
        }
    }
}
