//! JSON file backing the history log

use chrono::Utc;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use super::entry::HistoryEntry;
use crate::error::{Error, Result};

/// Read/modify/rewrite access to the history file
///
/// The store does no locking of its own. Share it through a
/// [`HistoryQueue`](super::HistoryQueue) when more than one task mutates it.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full log
    ///
    /// A missing or empty file is an empty log. Unreadable content is
    /// `StorageParse`, any other I/O failure is `StorageRead`.
    pub async fn list(&self) -> Result<Vec<HistoryEntry>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::StorageRead(e.to_string())),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| Error::StorageParse(e.to_string()))
    }

    /// Append `entry` to the end of the log and rewrite the file
    ///
    /// A corrupt log is moved aside to `<file>.corrupted.<unix-ts>` and a new
    /// log is started with `entry` as its only element.
    pub async fn append(&self, entry: HistoryEntry) -> Result<()> {
        let mut history = match self.list().await {
            Ok(history) => history,
            Err(Error::StorageParse(reason)) => {
                let backup = self.backup_corrupted().await?;
                warn!(
                    "History file corrupted ({}), backed up to {}",
                    reason,
                    backup.display()
                );
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        history.push(entry);
        self.save(&history).await
    }

    /// Drop every entry whose timestamp equals `timestamp`
    ///
    /// Returns how many entries were removed. Nothing is written when no entry
    /// matches.
    pub async fn remove(&self, timestamp: &str) -> Result<usize> {
        let mut history = self.list().await?;
        let before = history.len();
        history.retain(|entry| entry.timestamp != timestamp);
        let removed = before - history.len();

        if removed > 0 {
            self.save(&history).await?;
        }

        Ok(removed)
    }

    /// Replace the file contents with `history`
    ///
    /// Writes to a sibling temp file and renames it over the log.
    pub async fn save(&self, history: &[HistoryEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::StorageWrite(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(history)
            .map_err(|e| Error::StorageWrite(e.to_string()))?;

        let temp_file = self.sibling(".tmp");
        fs::write(&temp_file, json)
            .await
            .map_err(|e| Error::StorageWrite(e.to_string()))?;
        fs::rename(&temp_file, &self.path)
            .await
            .map_err(|e| Error::StorageWrite(e.to_string()))?;

        debug!(
            "Wrote {} history entries to {}",
            history.len(),
            self.path.display()
        );
        Ok(())
    }

    async fn backup_corrupted(&self) -> Result<PathBuf> {
        let backup = self.sibling(&format!(".corrupted.{}", Utc::now().timestamp()));
        fs::rename(&self.path, &backup)
            .await
            .map_err(|e| Error::StorageWrite(e.to_string()))?;
        Ok(backup)
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(suffix);
        PathBuf::from(name)
    }
}
