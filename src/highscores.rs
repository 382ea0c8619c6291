//! High score leaderboard
//!
//! Tracks the top 10 runs. The core only produces candidate entries; this
//! collaborator owns qualification, ordering and truncation.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub name: String,
    /// Final run score
    pub score: u32,
    /// Bugs collected across the run
    pub bugs: u32,
    /// Levels reached
    pub levels: u32,
    /// Unix timestamp (ms) when achieved
    pub timestamp: u64,
}

/// High score leaderboard, sorted descending by score. Ties keep insertion
/// order: an equal score never displaces an earlier one.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Must beat the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if it doesn't
    /// qualify)
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add an entry (if it qualifies). Returns the rank achieved (1-indexed)
    /// or None if it didn't chart.
    pub fn add(&mut self, entry: HighScoreEntry) -> Option<usize> {
        if !self.qualifies(entry.score) {
            return None;
        }

        let pos = self.entries.iter().position(|e| entry.score > e.score);
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

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, score: u32) -> HighScoreEntry {
        HighScoreEntry {
            name: name.to_string(),
            score,
            bugs: 0,
            levels: 1,
            timestamp: 0,
        }
    }

    #[test]
    fn test_empty_board_accepts_any_nonzero_score() {
        let scores = HighScores::new();
        assert!(scores.qualifies(1));
        assert!(!scores.qualifies(0));
        assert_eq!(scores.potential_rank(7), Some(1));
    }

    #[test]
    fn test_full_board_requires_beating_the_lowest() {
        let mut scores = HighScores::new();
        for i in 0..MAX_HIGH_SCORES {
            scores.add(entry("dev", 100 - i as u32));
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);

        // Lowest is 91: equal does not qualify, better does
        assert!(!scores.qualifies(91));
        assert!(scores.qualifies(92));
    }

    #[test]
    fn test_add_keeps_descending_order_and_trims() {
        let mut scores = HighScores::new();
        for s in [30, 50, 10, 40, 20, 60, 5, 35, 45, 25] {
            scores.add(entry("dev", s));
        }
        assert_eq!(scores.top_score(), Some(60));

        let rank = scores.add(entry("late", 55));
        assert_eq!(rank, Some(2));
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        // The previous lowest (5) fell off
        assert!(scores.entries.iter().all(|e| e.score > 5));
        for pair in scores.entries.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut scores = HighScores::new();
        scores.add(entry("first", 40));
        scores.add(entry("second", 40));
        assert_eq!(scores.entries[0].name, "first");
        assert_eq!(scores.entries[1].name, "second");
    }
}
