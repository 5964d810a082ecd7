//! File-backed high-score table.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::HighScoreError;

/// Number of entries kept on disk.
pub const MAX_ENTRIES: usize = 10;

/// Name stored when the player leaves the prompt blank.
pub const DEFAULT_NAME: &str = "Anonymous";

/// Longest name the game-over prompt accepts.
pub const MAX_NAME_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub name: String,
    pub score: u32,
    pub date: DateTime<Utc>,
}

impl HighScore {
    /// Entry with a trimmed name; blank names become [`DEFAULT_NAME`].
    pub fn new(name: &str, score: u32, date: DateTime<Utc>) -> Self {
        let trimmed = name.trim();
        let name = if trimmed.is_empty() {
            DEFAULT_NAME
        } else {
            trimmed
        };
        Self {
            name: name.to_string(),
            score,
            date,
        }
    }
}

/// Whether `score` earns a place in `entries`: the table has room, or the
/// score beats the lowest kept score.
pub fn qualifies(entries: &[HighScore], score: u32) -> bool {
    entries.len() < MAX_ENTRIES || entries.iter().map(|e| e.score).min().is_some_and(|low| score > low)
}

fn sort_best_first(entries: &mut [HighScore]) {
    // Stable, so earlier entries win ties.
    entries.sort_by(|a, b| b.score.cmp(&a.score));
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries sorted best first. A missing file is an empty table.
    pub fn try_load(&self) -> Result<Vec<HighScore>, HighScoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let data =
            fs::read_to_string(&self.path).map_err(|e| HighScoreError::io(&self.path, e))?;
        let mut entries: Vec<HighScore> =
            serde_json::from_str(&data).map_err(|e| HighScoreError::json(&self.path, e))?;
        sort_best_first(&mut entries);
        Ok(entries)
    }

    /// Like [`try_load`](Self::try_load), degrading to an empty table on any
    /// error.
    pub fn load(&self) -> Vec<HighScore> {
        match self.try_load() {
            Ok(entries) => {
                debug!(path = %self.path.display(), count = entries.len(), "high scores loaded");
                entries
            }
            Err(err) => {
                warn!(error = %err, "ignoring unreadable high score file");
                Vec::new()
            }
        }
    }

    /// Record a score stamped with the current time.
    pub fn save(&self, name: &str, score: u32) -> Result<(), HighScoreError> {
        self.save_entry(HighScore::new(name, score, Utc::now()))
    }

    /// Insert `entry`, keep the best [`MAX_ENTRIES`] and rewrite the file.
    ///
    /// An unreadable existing file is replaced rather than reported.
    pub fn save_entry(&self, entry: HighScore) -> Result<(), HighScoreError> {
        let mut entries = self.load();
        info!(name = %entry.name, score = entry.score, "saving high score");

        entries.push(entry);
        sort_best_first(&mut entries);
        entries.truncate(MAX_ENTRIES);

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| HighScoreError::io(dir, e))?;
        }

        let json =
            serde_json::to_string_pretty(&entries).map_err(|e| HighScoreError::json(&self.path, e))?;
        fs::write(&self.path, json).map_err(|e| HighScoreError::io(&self.path, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap()
    }

    fn entry(name: &str, score: u32) -> HighScore {
        HighScore::new(name, score, at(1))
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::new(dir.path().join("scores.json"));
        assert!(store.try_load().unwrap().is_empty());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_corrupt_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "{ not json").unwrap();

        let store = HighScoreStore::new(&path);
        assert!(matches!(store.try_load(), Err(HighScoreError::Json { .. })));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_then_load_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::new(dir.path().join("scores.json"));

        store.save_entry(entry("amy", 300)).unwrap();
        store.save_entry(entry("bob", 900)).unwrap();
        store.save_entry(entry("cat", 500)).unwrap();

        let scores: Vec<u32> = store.load().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![900, 500, 300]);
    }

    #[test]
    fn test_save_keeps_top_ten() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::new(dir.path().join("scores.json"));

        for i in 1..=12 {
            store.save_entry(entry("p", i * 100)).unwrap();
        }

        let entries = store.load();
        assert_eq!(entries.len(), MAX_ENTRIES);
        assert_eq!(entries[0].score, 1200);
        assert_eq!(entries[9].score, 300);
    }

    #[test]
    fn test_blank_name_becomes_default() {
        assert_eq!(entry("   ", 10).name, DEFAULT_NAME);
        assert_eq!(entry("  ada ", 10).name, "ada");
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("scores.json");
        let store = HighScoreStore::new(&path);
        assert_eq!(store.path(), path);

        store.save("ada", 42).unwrap();
        assert!(path.exists());
        assert_eq!(store.load()[0].name, "ada");
    }

    #[test]
    fn test_file_is_pretty_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        let store = HighScoreStore::new(&path);
        store.save_entry(HighScore::new("ada", 1500, at(3))).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("[\n"));

        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["name"], "ada");
        assert_eq!(value[0]["score"], 1500);
        assert!(value[0]["date"].as_str().unwrap().starts_with("2024-05-03T12:00:00"));
    }

    #[test]
    fn test_reads_millisecond_iso_dates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(
            &path,
            r#"[{"name":"old","score":50,"date":"2023-01-02T03:04:05.678Z"},
                {"name":"new","score":70,"date":"2023-01-03T03:04:05.000Z"}]"#,
        )
        .unwrap();

        let entries = HighScoreStore::new(&path).try_load().unwrap();
        assert_eq!(entries[0].name, "new");
        assert_eq!(entries[1].name, "old");
    }

    #[test]
    fn test_qualifies() {
        assert!(qualifies(&[], 0));

        let nine: Vec<_> = (1..=9).map(|i| entry("p", i * 100)).collect();
        assert!(qualifies(&nine, 1));

        let mut ten = nine.clone();
        ten.push(entry("p", 50));
        sort_best_first(&mut ten);
        assert!(!qualifies(&ten, 50));
        assert!(qualifies(&ten, 51));
    }

    #[test]
    fn test_ties_keep_earlier_entry_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::new(dir.path().join("scores.json"));
        store.save_entry(entry("first", 100)).unwrap();
        store.save_entry(entry("second", 100)).unwrap();

        let names: Vec<String> = store.load().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["first", "second"]);
    }
}
