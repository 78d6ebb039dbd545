//! Runtime configuration (environment variables, overridden by CLI flags).

use std::env;
use std::path::PathBuf;

use crate::store::{default_data_dir, DATA_DIR_NAME};
use crate::types::Difficulty;

pub const ENV_DATA_DIR: &str = "FLAPPY_DATA_DIR";
pub const ENV_MUTE: &str = "FLAPPY_MUTE";
pub const ENV_LOG_PATH: &str = "FLAPPY_LOG_PATH";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Where `highscore.json` and `rankings.json` live
    pub data_dir: PathBuf,
    pub mute: bool,
    /// Log file; no subscriber is installed when unset
    pub log_path: Option<PathBuf>,
    /// Preselected difficulty on the title screen
    pub difficulty: Difficulty,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: fallback_data_dir(),
            mute: false,
            log_path: None,
            difficulty: Difficulty::default(),
        }
    }
}

impl Config {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an injectable variable source.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            get(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let data_dir = non_empty(ENV_DATA_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(fallback_data_dir);
        let mute = non_empty(ENV_MUTE).is_some_and(|s| parse_flag(&s));
        let log_path = non_empty(ENV_LOG_PATH).map(PathBuf::from);

        Self {
            data_dir,
            mute,
            log_path,
            difficulty: Difficulty::default(),
        }
    }
}

fn fallback_data_dir() -> PathBuf {
    default_data_dir().unwrap_or_else(|_| PathBuf::from(DATA_DIR_NAME))
}

fn parse_flag(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
