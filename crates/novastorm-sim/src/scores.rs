//! High-score persistence — the only durable-storage contract in the
//! engine. Scores are kept per game mode as a simple mode -> integer map,
//! serialized with serde_json.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use novastorm_core::enums::GameMode;

/// Best score per game mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    best: HashMap<GameMode, u32>,
}

impl HighScores {
    /// Load from a JSON file. A missing or unreadable file yields an empty
    /// table rather than an error: first launch has no record to load.
    pub fn load(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default()
    }

    /// Persist to a JSON file.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)
    }

    /// Best recorded score for a mode (0 if none).
    pub fn best(&self, mode: GameMode) -> u32 {
        self.best.get(&mode).copied().unwrap_or(0)
    }

    /// Record a finished game's score. Returns true if it set a new record.
    pub fn record(&mut self, mode: GameMode, score: u32) -> bool {
        if score > self.best(mode) {
            self.best.insert(mode, score);
            true
        } else {
            false
        }
    }
}
