//! Score persistence (high score and rankings as JSON files).
//!
//! Layout under the data directory:
//!
//! - `highscore.json`: the single best [`ScoreRecord`]
//! - `rankings.json`: array of the top 10 records, best first
//!
//! Missing files mean "no data yet". Load and save failures are reported as
//! `anyhow` errors; [`ScoreStore::load_leaderboard`] and [`ScoreStore::commit`]
//! turn them into warnings so the game keeps running.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use flappy_core::{Leaderboard, Rankings, ScoreRecord};

/// Directory created under the home directory by default.
pub const DATA_DIR_NAME: &str = ".flappy-bird-tui";
pub const HIGH_SCORE_FILE: &str = "highscore.json";
pub const RANKINGS_FILE: &str = "rankings.json";

/// `~/.flappy-bird-tui`
pub fn default_data_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("could not determine home directory"))?;
    Ok(home.join(DATA_DIR_NAME))
}

#[derive(Debug, Clone)]
pub struct ScoreStore {
    dir: PathBuf,
}

impl ScoreStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn high_score_path(&self) -> PathBuf {
        self.dir.join(HIGH_SCORE_FILE)
    }

    pub fn rankings_path(&self) -> PathBuf {
        self.dir.join(RANKINGS_FILE)
    }

    pub fn load_high_score(&self) -> Result<Option<ScoreRecord>> {
        read_json(&self.high_score_path())
    }

    pub fn save_high_score(&self, record: &ScoreRecord) -> Result<()> {
        write_json(&self.high_score_path(), record)
    }

    /// Stored rankings, re-sorted and truncated to the table size.
    pub fn load_rankings(&self) -> Result<Rankings> {
        Ok(read_json::<Rankings>(&self.rankings_path())?.unwrap_or_default())
    }

    pub fn save_rankings(&self, rankings: &Rankings) -> Result<()> {
        write_json(&self.rankings_path(), rankings)
    }

    /// Load both files; a file that cannot be read counts as empty.
    pub fn load_leaderboard(&self) -> Leaderboard {
        let high_score = self.load_high_score().unwrap_or_else(|err| {
            warn!(error = %format!("{err:#}"), "failed to load high score");
            None
        });
        let rankings = self.load_rankings().unwrap_or_else(|err| {
            warn!(error = %format!("{err:#}"), "failed to load rankings");
            Rankings::new()
        });
        debug!(
            best = high_score.as_ref().map_or(0, |h| h.score),
            rankings = rankings.len(),
            "leaderboard loaded"
        );
        Leaderboard {
            high_score,
            rankings,
        }
    }

    /// Record a finished run.
    ///
    /// Saves a new high score when the run beats it, then inserts the run into
    /// the rankings and saves them. Each part of `leaderboard` is only updated
    /// once its file was written. Returns the 1-based rank, or 0 when the run
    /// did not place (or the rankings could not be saved).
    pub fn commit(&self, leaderboard: &mut Leaderboard, record: ScoreRecord) -> usize {
        if leaderboard.is_new_high_score(record.score) {
            match self.save_high_score(&record) {
                Ok(()) => leaderboard.high_score = Some(record.clone()),
                Err(err) => warn!(error = %format!("{err:#}"), "failed to save high score"),
            }
        }

        let mut rankings = leaderboard.rankings.clone();
        let rank = rankings.insert(record);
        if rank == 0 {
            return 0;
        }

        match self.save_rankings(&rankings) {
            Ok(()) => {
                leaderboard.rankings = rankings;
                rank
            }
            Err(err) => {
                warn!(error = %format!("{err:#}"), "failed to save rankings");
                0
            }
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err).with_context(|| format!("read {}", path.display())),
    };
    let value =
        serde_json::from_str(&json).with_context(|| format!("parse {}", path.display()))?;
    Ok(Some(value))
}

/// Pretty JSON written to a sibling temp file, then renamed into place.
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(value).context("serialize")?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).with_context(|| format!("write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("rename into {}", path.display()))?;
    Ok(())
}
