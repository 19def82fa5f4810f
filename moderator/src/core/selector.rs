//! Random moderator selection with a recency exclusion window

use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use shared::Event;

use crate::error::{ModeratorError, ModeratorResult};

/// Choose the next moderator
///
/// `history` is ordered most recent first. The first `exclusion_window`
/// entries are ineligible; the result is drawn uniformly from the remaining
/// candidates using `rng`.
pub fn select_next<I, S, R>(
    history: I,
    candidates: &BTreeSet<String>,
    exclusion_window: usize,
    rng: &mut R,
) -> ModeratorResult<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    if candidates.is_empty() {
        return Err(ModeratorError::invalid_input("select at least one candidate"));
    }

    let excluded: HashSet<String> = history
        .into_iter()
        .take(exclusion_window)
        .map(|name| name.as_ref().to_string())
        .collect();

    let eligible: Vec<&String> = candidates
        .iter()
        .filter(|candidate| !excluded.contains(candidate.as_str()))
        .collect();

    let next = eligible
        .choose(rng)
        .ok_or(ModeratorError::NoEligibleCandidate {
            candidates: candidates.len(),
            window: exclusion_window,
        })?;

    tracing::debug!(
        "🎲 Drew {} from {} eligible of {} candidates (excluded: {:?})",
        next,
        eligible.len(),
        candidates.len(),
        excluded
    );
    Ok((*next).clone())
}

/// Moderators of events strictly before `before`, most recent first
///
/// A pending entry on `before` itself is being replaced, so it does not
/// count towards the exclusion window.
pub fn selection_history(events: &[Event], before: NaiveDate) -> Vec<&str> {
    events
        .iter()
        .rev()
        .filter(|event| event.date < before)
        .map(|event| event.moderator.as_str())
        .collect()
}
