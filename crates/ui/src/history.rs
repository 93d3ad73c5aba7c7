// crates/ui/src/history.rs
//! Search history: an append-only JSON file of submitted queries.
//!
//! Recording is best-effort. A missing or corrupt file reads as an empty
//! history and is overwritten on the next write; callers log failures at
//! warn and carry on, so a search never fails because its bookkeeping did.

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How many entries the recent-searches display shows by default.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("IO error accessing search history {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not serialize search history: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One recorded search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub query: String,
    /// Local wall-clock time, `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
}

/// Handle to the history file. Each operation opens the file fresh; there is
/// no in-memory cache to invalidate.
#[derive(Debug, Clone)]
pub struct SearchHistory {
    path: PathBuf,
}

impl SearchHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// History at the per-user data directory
    /// (`<data_dir>/archive-view/search_history.json`), or `None` when the
    /// platform has no data directory.
    pub fn default_location() -> Option<Self> {
        let dir = dirs::data_dir()?;
        Some(Self::new(dir.join("archive-view").join("search_history.json")))
    }

    /// Append `query` with the current timestamp.
    pub fn record(&self, query: &str) -> Result<(), HistoryError> {
        let mut entries = self.load();
        entries.push(HistoryEntry {
            query: query.to_string(),
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        });

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| HistoryError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json).map_err(|source| HistoryError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// The most recent `limit` entries, oldest first.
    pub fn recent(&self, limit: usize) -> Vec<HistoryEntry> {
        let entries = self.load();
        let skip = entries.len().saturating_sub(limit);
        entries.into_iter().skip(skip).collect()
    }

    fn load(&self) -> Vec<HistoryEntry> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn history_in(dir: &tempfile::TempDir) -> SearchHistory {
        SearchHistory::new(dir.path().join("search_history.json"))
    }

    #[test]
    fn test_record_then_recent_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let history = history_in(&dir);

        history.record("rust async").unwrap();
        history.record("borrow checker").unwrap();

        let recent = history.recent(10);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].query, "rust async");
        assert_eq!(recent[1].query, "borrow checker");
        assert!(!recent[0].timestamp.is_empty());
    }

    #[test]
    fn test_recent_caps_at_limit_keeping_newest() {
        let dir = tempfile::tempdir().unwrap();
        let history = history_in(&dir);

        for i in 0..8 {
            history.record(&format!("query {i}")).unwrap();
        }

        let recent = history.recent(DEFAULT_RECENT_LIMIT);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].query, "query 3");
        assert_eq!(recent[4].query, "query 7");
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(history_in(&dir).recent(5).is_empty());
    }

    #[test]
    fn test_corrupt_file_reads_as_empty_and_recovers_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let history = history_in(&dir);
        fs::write(dir.path().join("search_history.json"), "not json{").unwrap();

        assert!(history.recent(5).is_empty());

        history.record("fresh start").unwrap();
        let recent = history.recent(5);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].query, "fresh start");
    }

    #[test]
    fn test_record_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let history = SearchHistory::new(dir.path().join("nested/deeper/history.json"));
        history.record("q").unwrap();
        assert_eq!(history.recent(1).len(), 1);
    }
}
