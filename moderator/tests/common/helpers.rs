//! Test helpers for building sessions over a temporary artifact

use chrono::NaiveDate;
use next_moderator::services::FileHistoryStore;
use next_moderator::{Clock, HistoryStore, Session};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::HistorySnapshot;
use tempfile::TempDir;

/// Clock pinned to one day
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub struct TestHelpers;

impl TestHelpers {
    /// Temporary directory holding an artifact seeded with `snapshot`
    pub async fn seeded_store(snapshot: &HistorySnapshot) -> (TempDir, FileHistoryStore) {
        let temp_dir = TempDir::new().expect("temp dir");
        let store = FileHistoryStore::new(temp_dir.path().join("moderators.json"));
        store.save(snapshot).await.expect("seed artifact");
        (temp_dir, store)
    }

    /// Fresh store handle for the same artifact
    pub fn reopen(temp_dir: &TempDir) -> FileHistoryStore {
        FileHistoryStore::new(temp_dir.path().join("moderators.json"))
    }

    pub fn session(store: FileHistoryStore, today: NaiveDate, seed: u64) -> Session<FileHistoryStore, FixedClock> {
        Session::new(store, FixedClock(today)).with_rng(StdRng::seed_from_u64(seed))
    }
}
