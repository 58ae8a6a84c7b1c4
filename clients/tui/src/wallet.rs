//! The player's wallet and ledger: chip and token balances, the grade log,
//! and win statistics, persisted as a JSON file in the platform data
//! directory. The game engine only sees this through the `blackjack::Wallet`
//! trait; it validates bets against the balance and calls debit/credit.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use time::OffsetDateTime;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt profile data: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("no data directory available on this platform")]
    NoDataDir,
}

/// One logged assignment grade and the chips it earned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeEntry {
    pub assignment: String,
    pub grade: f64,
    pub chips_earned: u64,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub chips: u64,
    pub tokens: u64,
    pub grades: Vec<GradeEntry>,
    pub games_played: u32,
    pub games_won: u32,
    /// Prize ids redeemed so far, in redemption order.
    pub redeemed: Vec<u32>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: String::new(),
            chips: 0,
            tokens: 0,
            grades: Vec::new(),
            games_played: 0,
            games_won: 0,
            redeemed: Vec::new(),
        }
    }
}

impl Profile {
    /// Record a finished round. A round counts as won iff it paid out
    /// tokens, so a push counts as a win (the stake came back).
    pub fn record_round(&mut self, tokens_won: u64) {
        self.games_played += 1;
        if tokens_won > 0 {
            self.games_won += 1;
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played)
        }
    }

    pub fn average_grade(&self) -> Option<f64> {
        if self.grades.is_empty() {
            return None;
        }
        let sum: f64 = self.grades.iter().map(|g| g.grade).sum();
        Some(sum / self.grades.len() as f64)
    }

    pub fn total_chips_earned(&self) -> u64 {
        self.grades.iter().map(|g| g.chips_earned).sum()
    }
}

impl blackjack::Wallet for Profile {
    fn chips(&self) -> u64 {
        self.chips
    }

    fn debit_chips(&mut self, amount: u64) {
        self.chips = self.chips.saturating_sub(amount);
    }

    fn credit_tokens(&mut self, amount: u64) {
        self.tokens += amount;
    }
}

/// Loads and saves the profile JSON. A missing file yields a fresh default
/// profile; a file that exists but fails to parse is reported, not wiped.
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_location() -> Result<Self, StoreError> {
        let dir = dirs_next::data_dir().ok_or(StoreError::NoDataDir)?;
        Ok(Self::at(dir.join("gradejack").join("profile.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Profile, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(data) => Ok(serde_json::from_str(&data)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Profile::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, profile: &Profile) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(profile)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}
