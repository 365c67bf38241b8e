//! High score table.
//!
//! A bounded list ordered by score, best first. A new entry that ties an
//! existing score ranks below it.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::types::{Tile, DEFAULT_HIGH_SCORE_SLOTS};
use crate::json::{read_json, write_json};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighScoreEntry {
    pub name: String,
    pub score: u64,
    pub highest_tile: Tile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighScores {
    capacity: usize,
    entries: Vec<HighScoreEntry>,
}

impl Default for HighScores {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HIGH_SCORE_SLOTS)
    }
}

impl HighScores {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn best(&self) -> Option<&HighScoreEntry> {
        self.entries.first()
    }

    /// 0-based rank `score` would take, or `None` if it does not make the table.
    pub fn rank_of(&self, score: u64) -> Option<usize> {
        let rank = self.entries.partition_point(|e| e.score >= score);
        (rank < self.capacity).then_some(rank)
    }

    pub fn qualifies(&self, score: u64) -> bool {
        self.rank_of(score).is_some()
    }

    /// Insert an entry, dropping the lowest one if the table overflows.
    ///
    /// Returns the 0-based rank, or `None` when the entry does not qualify.
    pub fn insert(&mut self, entry: HighScoreEntry) -> Option<usize> {
        let rank = self.rank_of(entry.score)?;
        self.entries.insert(rank, entry);
        self.entries.truncate(self.capacity);
        Some(rank)
    }

    /// Load the table; a missing file gives an empty default table.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut scores = read_json::<HighScores>(path)
            .context("failed to load high scores")?
            .unwrap_or_default();

        // Hand-edited files may be unordered or overlong.
        scores.entries.sort_by(|a, b| b.score.cmp(&a.score));
        scores.entries.truncate(scores.capacity);
        Ok(scores)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        write_json(path.as_ref(), self).context("failed to save high scores")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, score: u64) -> HighScoreEntry {
        HighScoreEntry {
            name: name.to_string(),
            score,
            highest_tile: 64,
        }
    }

    #[test]
    fn test_insert_keeps_descending_order() {
        let mut scores = HighScores::default();
        assert_eq!(scores.insert(entry("a", 100)), Some(0));
        assert_eq!(scores.insert(entry("b", 300)), Some(0));
        assert_eq!(scores.insert(entry("c", 200)), Some(1));

        let order: Vec<u64> = scores.entries().iter().map(|e| e.score).collect();
        assert_eq!(order, vec![300, 200, 100]);
        assert_eq!(scores.best().unwrap().name, "b");
    }

    #[test]
    fn test_ties_rank_below_existing() {
        let mut scores = HighScores::default();
        scores.insert(entry("first", 50));
        assert_eq!(scores.insert(entry("second", 50)), Some(1));
        assert_eq!(scores.entries()[0].name, "first");
    }

    #[test]
    fn test_full_table_drops_lowest() {
        let mut scores = HighScores::with_capacity(2);
        scores.insert(entry("a", 10));
        scores.insert(entry("b", 20));

        assert!(!scores.qualifies(5));
        assert_eq!(scores.insert(entry("c", 5)), None);
        assert_eq!(scores.insert(entry("d", 15)), Some(1));

        assert_eq!(scores.len(), 2);
        let names: Vec<&str> = scores.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["b", "d"]);
    }

    #[test]
    fn test_zero_capacity_accepts_nothing() {
        let mut scores = HighScores::with_capacity(0);
        assert_eq!(scores.insert(entry("a", 1_000)), None);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");

        let mut scores = HighScores::with_capacity(3);
        scores.insert(entry("a", 10));
        scores.insert(entry("b", 30));
        scores.save(&path).unwrap();

        assert_eq!(HighScores::load(&path).unwrap(), scores);
    }

    #[test]
    fn test_load_normalizes_hand_edited_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        std::fs::write(
            &path,
            r#"{ "capacity": 2, "entries": [
                { "name": "low", "score": 1, "highestTile": 2 },
                { "name": "high", "score": 9, "highestTile": 8 },
                { "name": "mid", "score": 5, "highestTile": 4 }
            ] }"#,
        )
        .unwrap();

        let scores = HighScores::load(&path).unwrap();
        let names: Vec<&str> = scores.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["high", "mid"]);
    }

    #[test]
    fn test_missing_file_is_empty_default() {
        let dir = tempfile::tempdir().unwrap();
        let scores = HighScores::load(dir.path().join("scores.json")).unwrap();
        assert!(scores.is_empty());
        assert_eq!(scores.capacity(), DEFAULT_HIGH_SCORE_SLOTS);
    }
}
