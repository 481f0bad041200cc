//! Persistence adapter - mirrors the whole store into a single JSON document.
//!
//! The on-disk shape is `{ "<account id>": [{ "trainer": "...", "code": "..." }] }`
//! with no schema version. Every save rewrites the full document: the snapshot is
//! written to `<path>.tmp` and renamed over the target, so a crash mid-write leaves
//! the previous file intact.

use crate::errors::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// One trainer and its friend code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendCodeEntry {
    /// User-chosen trainer label, not unique
    pub trainer: String,
    /// Opaque friend code
    pub code: String,
}

impl FriendCodeEntry {
    /// Builds an entry from anything string-like.
    pub fn new(trainer: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            trainer: trainer.into(),
            code: code.into(),
        }
    }
}

/// Full store contents keyed by account id, in first-seen order.
pub type Snapshot = IndexMap<String, Vec<FriendCodeEntry>>;

/// The JSON file backing the store.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    /// Points the adapter at `path`. Nothing is read or created yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the persisted document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// Reads the persisted snapshot.
    ///
    /// A missing file is an empty snapshot. A file that exists but does not parse
    /// is reported as [`Error::CorruptState`] rather than silently discarded.
    pub async fn load(&self) -> Result<Snapshot> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No friend code file yet, starting empty");
                return Ok(Snapshot::new());
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot: Snapshot =
            serde_json::from_str(&contents).map_err(|source| Error::CorruptState {
                path: self.path.clone(),
                source,
            })?;
        info!(
            path = %self.path.display(),
            accounts = snapshot.len(),
            "Loaded friend codes"
        );
        Ok(snapshot)
    }

    /// Overwrites the persisted document with `snapshot`.
    pub async fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let json = serde_json::to_string_pretty(snapshot)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let temp = self.temp_path();
        tokio::fs::write(&temp, json.as_bytes()).await?;
        tokio::fs::rename(&temp, &self.path).await?;

        debug!(
            path = %self.path.display(),
            bytes = json.len(),
            "Saved friend codes"
        );
        Ok(())
    }
}
