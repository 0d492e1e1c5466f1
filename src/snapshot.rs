// src/snapshot.rs

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::{MonitorError, Result};
use crate::member::Member;

pub const SNAPSHOT_FILE: &str = "members.json";

/// Load/save of the persisted roster snapshot, a pretty-printed JSON array
/// of members under the data directory. Owned exclusively by this process;
/// read at cycle start, written at cycle end.
#[derive(Clone, Debug)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(SNAPSHOT_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when no snapshot exists yet (first run). A file that
    /// exists but cannot be read or parsed is an error, distinct from
    /// absence.
    pub async fn load(&self) -> Result<Option<Vec<Member>>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(MonitorError::Snapshot(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };

        let members = serde_json::from_str(&raw).map_err(|e| {
            MonitorError::Snapshot(format!("corrupt snapshot {}: {e}", self.path.display()))
        })?;

        Ok(Some(members))
    }

    /// Overwrite the snapshot with the given roster, creating the data
    /// directory on first use.
    pub async fn save(&self, members: &[Member]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).await.map_err(|e| {
                MonitorError::Snapshot(format!("failed to create {}: {e}", dir.display()))
            })?;
        }

        let json = serde_json::to_string_pretty(members)
            .map_err(|e| MonitorError::Snapshot(format!("failed to serialize snapshot: {e}")))?;

        fs::write(&self.path, json).await.map_err(|e| {
            MonitorError::Snapshot(format!("failed to write {}: {e}", self.path.display()))
        })
    }
}
