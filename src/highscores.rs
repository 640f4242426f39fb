//! High score table
//!
//! One best score per player name, persisted as a JSON map. The game only
//! sees the `ScoreStore` trait.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;

/// Longest accepted player name (after trimming)
pub const MAX_NAME_LEN: usize = 20;

/// Largest score the table accepts
pub const MAX_SCORE: u32 = 1_000_000_000;

/// Name -> best score persistence as seen by the game
pub trait ScoreStore {
    /// Best recorded score for `name`, 0 if absent
    fn best_score(&self, name: &str) -> u32;

    /// Record `score`, keeping the larger of old and new
    fn register_or_update(&mut self, name: &str, score: u32) -> Result<(), ScoreError>;
}

/// The current player and their last finished round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub last_score: u32,
}

impl PlayerRecord {
    /// Player with a trimmed, validated name
    pub fn new(name: &str) -> Result<Self, ScoreError> {
        Ok(Self {
            name: validate_name(name)?,
            last_score: 0,
        })
    }
}

/// Trim and check a player name
pub fn validate_name(name: &str) -> Result<String, ScoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ScoreError::EmptyName);
    }
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(ScoreError::NameTooLong {
            len,
            max: MAX_NAME_LEN,
        });
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == ' ')
    {
        return Err(ScoreError::InvalidNameChars {
            name: name.to_string(),
        });
    }
    Ok(name.to_string())
}

/// High score table
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    entries: BTreeMap<String, u32>,
    /// Where `save` writes; `None` keeps the table in memory only
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl HighScores {
    /// Create an empty, in-memory table
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the table at `path`; a missing file starts fresh
    pub fn load(path: &Path) -> Result<Self, ScoreError> {
        let mut scores = if path.exists() {
            let json = std::fs::read_to_string(path)?;
            let scores: HighScores = serde_json::from_str(&json)?;
            log::info!("Loaded {} high scores", scores.entries.len());
            scores
        } else {
            log::info!("No high scores found, starting fresh");
            Self::new()
        };
        scores.path = Some(path.to_path_buf());
        Ok(scores)
    }

    /// Write the table to its file, if it has one
    pub fn save(&self) -> Result<(), ScoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Best `n` entries, highest first; ties by name
    pub fn top_scores(&self, n: usize) -> Vec<(String, u32)> {
        let mut ranked: Vec<(String, u32)> = self
            .entries
            .iter()
            .map(|(name, score)| (name.clone(), *score))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(n);
        ranked
    }

    /// 1-indexed position of `name` in the ranking
    pub fn rank_of(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.top_scores(self.entries.len())
            .iter()
            .position(|(n, _)| n == name)
            .map(|idx| idx + 1)
    }
}

impl ScoreStore for HighScores {
    fn best_score(&self, name: &str) -> u32 {
        self.entries.get(name.trim()).copied().unwrap_or(0)
    }

    fn register_or_update(&mut self, name: &str, score: u32) -> Result<(), ScoreError> {
        let name = validate_name(name)?;
        if score > MAX_SCORE {
            return Err(ScoreError::ScoreOutOfRange {
                score,
                max: MAX_SCORE,
            });
        }
        let best = self.entries.entry(name).or_insert(0);
        if score > *best {
            *best = score;
        }
        self.save()
    }
}
