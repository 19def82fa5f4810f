//! Local file history store
//!
//! Keeps the whole roster and history in a single artifact on disk. Saves
//! write a sibling temp file and rename it over the artifact, so a reader
//! sees either the old or the new snapshot, never a mix.
//!
//! There is no locking: two sessions saving from stale snapshots overwrite
//! each other and the last save wins.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use shared::HistorySnapshot;
use tokio::fs;

use crate::core::workbook;
use crate::error::{ModeratorError, ModeratorResult};
use crate::traits::HistoryStore;

/// File-backed implementation of `HistoryStore`
pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Temp file written before the rename
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "moderators.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    pub async fn exists(&self) -> bool {
        fs::try_exists(&self.path).await.unwrap_or(false)
    }

    /// Create an empty artifact unless one already exists
    ///
    /// Returns whether a new artifact was written.
    pub async fn init(&self) -> ModeratorResult<bool> {
        if self.exists().await {
            tracing::debug!("📁 History artifact already present at {}", self.path.display());
            return Ok(false);
        }
        self.save(&HistorySnapshot::default()).await?;
        tracing::info!("📁 Created empty history artifact at {}", self.path.display());
        Ok(true)
    }

    async fn write_atomically(&self, bytes: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let staging = self.staging_path();
        fs::write(&staging, bytes).await?;
        fs::rename(&staging, &self.path).await
    }
}

#[async_trait]
impl HistoryStore for FileHistoryStore {
    async fn load(&self) -> ModeratorResult<HistorySnapshot> {
        let bytes = fs::read(&self.path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => ModeratorError::StoreNotFound {
                path: self.path.display().to_string(),
            },
            _ => ModeratorError::IoError(e),
        })?;

        let snapshot = workbook::decode(&bytes)?;
        tracing::debug!(
            "📖 Loaded {} moderators, {} stand-ups, {} retrospectives from {}",
            snapshot.roster.len(),
            snapshot.standups.len(),
            snapshot.retrospectives.len(),
            self.path.display()
        );
        Ok(snapshot)
    }

    async fn save(&self, snapshot: &HistorySnapshot) -> ModeratorResult<()> {
        let bytes = workbook::encode(snapshot)?;

        self.write_atomically(&bytes).await.map_err(|e| {
            ModeratorError::persist(format!("writing {}: {}", self.path.display(), e))
        })?;

        tracing::debug!("💾 Saved history snapshot to {}", self.path.display());
        Ok(())
    }
}
