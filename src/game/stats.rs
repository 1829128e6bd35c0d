//! Win/loss statistics persisted across sessions

use crate::core::MAX_GUESSES;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Aggregate results over every finished round
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub wins: u32,
    pub losses: u32,
    /// Index n counts wins on guess n+1
    pub guess_distribution: [u32; MAX_GUESSES],
}

impl Stats {
    /// Record a win that took `guesses` guesses
    pub fn record_win(&mut self, guesses: usize) {
        self.wins = self.wins.saturating_add(1);
        let slot = guesses.clamp(1, MAX_GUESSES) - 1;
        self.guess_distribution[slot] = self.guess_distribution[slot].saturating_add(1);
    }

    pub fn record_loss(&mut self) {
        self.losses = self.losses.saturating_add(1);
    }

    /// Total finished rounds, widened so full counters cannot overflow
    #[must_use]
    pub fn played(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.losses)
    }

    /// Win percentage, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        match self.played() {
            0 => 0.0,
            played => f64::from(self.wins) / played as f64 * 100.0,
        }
    }

    /// Default stats file under the user's data directory
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("wordle_game").join("stats.json"))
    }

    /// Load stats, returning defaults when the file does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read stats from {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse stats in {}", path.display()))
    }

    /// Write stats as pretty JSON, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write stats to {}", path.display()))?;
        tracing::debug!(path = %path.display(), "saved stats");
        Ok(())
    }
}
