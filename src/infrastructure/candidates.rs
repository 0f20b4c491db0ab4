use crate::domain::parlay::Pick;
use crate::domain::ports::CandidateSource;
use crate::domain::types::PlayerType;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;

/// Built-in demo pool, used when no pool file is configured.
#[derive(Debug, Clone)]
pub struct SamplePool {
    picks: Vec<Pick>,
}

impl SamplePool {
    pub fn new() -> Self {
        Self {
            picks: vec![
                Pick::new(PlayerType::Pitcher, "Sample Game A", "Strikeouts: 7.0", 9.0),
                Pick::new(PlayerType::Hitter, "Sample Game B", "Home Runs: 1.0", 8.6),
                Pick::new(PlayerType::Hitter, "Sample Game C", "Hits: 2.0", 8.3),
            ],
        }
    }
}

impl Default for SamplePool {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateSource for SamplePool {
    fn current_picks(&self) -> Result<Vec<Pick>> {
        Ok(self.picks.clone())
    }
}

/// Pool read from a JSON array of picks on every request, so the file can be
/// replaced while the server runs.
#[derive(Debug, Clone)]
pub struct JsonFilePool {
    path: PathBuf,
}

impl JsonFilePool {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CandidateSource for JsonFilePool {
    fn current_picks(&self) -> Result<Vec<Pick>> {
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read candidate pool {:?}", self.path))?;
        let picks: Vec<Pick> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse candidate pool {:?}", self.path))?;
        debug!("Loaded {} candidates from {:?}", picks.len(), self.path);
        Ok(picks)
    }
}
