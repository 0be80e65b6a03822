//! High score table
//!
//! Tracks the top 10 scores across sessions, persisted as JSON.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Pipes cleared in the session
    pub score: u32,
    /// Session length in ticks
    pub ticks_survived: u64,
    /// Seed the session ran with
    pub seed: u64,
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the table
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a score if it qualifies; returns the 1-indexed rank achieved
    pub fn add_score(&mut self, score: u32, ticks_survived: u64, seed: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            score,
            ticks_survived,
            seed,
        };

        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    /// Best score recorded so far, if any
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load the table from a JSON file; missing or corrupt files yield an
    /// empty table.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Self>(&json) {
                Ok(scores) => {
                    log::info!("loaded {} high scores", scores.entries.len());
                    scores
                }
                Err(e) => {
                    log::warn!("corrupt high score file {}: {e}", path.display());
                    Self::new()
                }
            },
            Err(_) => {
                log::info!("no high scores at {}, starting fresh", path.display());
                Self::new()
            }
        }
    }

    /// Persist the table; failures are logged, not fatal
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    log::warn!("failed to save high scores to {}: {e}", path.display());
                } else {
                    log::info!("high scores saved ({} entries)", self.entries.len());
                }
            }
            Err(e) => log::warn!("failed to serialize high scores: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_never_qualifies() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert!(scores.qualifies(1));
    }

    #[test]
    fn test_add_keeps_descending_order() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(5, 600, 1), Some(1));
        assert_eq!(scores.add_score(12, 1_400, 2), Some(1));
        assert_eq!(scores.add_score(8, 900, 3), Some(2));

        let values: Vec<u32> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(values, vec![12, 8, 5]);
        assert_eq!(scores.top_score(), Some(12));
    }

    #[test]
    fn test_table_is_capped() {
        let mut scores = HighScores::new();
        for i in 1..=15 {
            scores.add_score(i, 100, 0);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        // Lowest retained score is 6 (1..=5 pushed out)
        assert_eq!(scores.entries.last().unwrap().score, 6);
        assert!(!scores.qualifies(6));
        assert!(scores.qualifies(7));
    }
}
