//! Best-effort JSON storage for the leaderboard and level unlocks
//!
//! Gameplay never waits on storage: loads fall back to defaults and failed
//! writes are logged and dropped.

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::highscores::HighScores;
use crate::level::LEVEL_COUNT;

/// Set of unlocked level indices. Level 1 is always available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockedLevels {
    levels: Vec<u32>,
}

impl Default for UnlockedLevels {
    fn default() -> Self {
        Self { levels: vec![1] }
    }
}

impl UnlockedLevels {
    pub fn is_unlocked(&self, index: u32) -> bool {
        index == 1 || self.levels.contains(&index)
    }

    /// Idempotent; indices outside the catalog are ignored.
    pub fn unlock(&mut self, index: u32) {
        if index == 0 || index > LEVEL_COUNT {
            return;
        }
        if !self.levels.contains(&index) {
            self.levels.push(index);
            self.levels.sort_unstable();
            log::info!("level {index} unlocked");
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.levels.iter().copied()
    }
}

/// JSON files under a data directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    const SCORES_FILE: &'static str = "leaderboard.json";
    const UNLOCKS_FILE: &'static str = "unlocks.json";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn load_scores(&self) -> HighScores {
        self.load_json(Self::SCORES_FILE)
    }

    pub fn save_scores(&self, scores: &HighScores) {
        self.save_json(Self::SCORES_FILE, scores);
    }

    pub fn load_unlocks(&self) -> UnlockedLevels {
        self.load_json(Self::UNLOCKS_FILE)
    }

    pub fn save_unlocks(&self, unlocks: &UnlockedLevels) {
        self.save_json(Self::UNLOCKS_FILE, unlocks);
    }

    fn load_json<T: DeserializeOwned + Default>(&self, file: &str) -> T {
        let path = self.dir.join(file);
        match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(value) => value,
                Err(err) => {
                    log::warn!("{} is corrupt ({err}), starting fresh", path.display());
                    T::default()
                }
            },
            Err(_) => T::default(),
        }
    }

    fn save_json<T: Serialize>(&self, file: &str, value: &T) {
        let path = self.dir.join(file);
        let json = match serde_json::to_string_pretty(value) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("failed to serialize {file} ({err})");
                return;
            }
        };
        if let Err(err) = fs::create_dir_all(&self.dir).and_then(|_| fs::write(&path, json)) {
            log::warn!("failed to write {} ({err}), not persisted", path.display());
        }
    }
}
