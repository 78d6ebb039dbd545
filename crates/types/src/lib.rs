//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, so they can be used
//! by the simulation, the terminal view, the input mapper and the audio layer
//! alike.
//!
//! # Playfield Geometry
//!
//! Coordinates are terminal cells. Row 0 is the top of the screen, so "up" is
//! numerically smaller.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BIRD_X` | 10 | Fixed column of the bird's left cell |
//! | `BIRD_WIDTH` | 2 | The bird sprite covers two columns |
//! | `PIPE_WIDTH` | 8 | Columns covered by a pipe |
//! | `MIN_GAP_TOP` | 3 | Minimum rows kept above and below a gap |
//! | `PIPE_SPAWN_GAP` | 50 | Horizontal distance between consecutive pipes |
//!
//! # Physics
//!
//! - `GRAVITY`: 0.3 rows/tick² added to velocity every tick
//! - `JUMP_FORCE`: -2.3 rows/tick, replaces the velocity on a flap
//!
//! # Difficulty Table
//!
//! | Level | Initial | Step | Every N pipes | Floor | Gap |
//! |-------|---------|------|---------------|-------|-----|
//! | Easy | 60ms | 5ms | 5 | 30ms | 15 |
//! | Normal | 45ms | 8ms | 3 | 20ms | 12 |
//! | Hard | 30ms | 10ms | 2 | 10ms | 9 |
//!
//! Speed-ups shorten the tick interval; pipes always scroll one column per tick.
//!
//! # Examples
//!
//! ```
//! use flappy_types::{Difficulty, GameAction, Theme};
//! use std::time::Duration;
//!
//! let normal = Difficulty::Normal.settings();
//! assert_eq!(normal.initial_interval, Duration::from_millis(45));
//! assert_eq!(normal.pipe_gap, 12);
//!
//! assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
//! assert_eq!(Theme::Neon.next(), Theme::Classic);
//! assert_eq!(
//!     GameAction::SelectDifficulty(Difficulty::Easy),
//!     GameAction::SelectDifficulty(Difficulty::from_index(0))
//! );
//! ```

use std::time::Duration;

/// Default playfield width before the first resize event (80 columns)
pub const DEFAULT_WIDTH: u16 = 80;

/// Default playfield height before the first resize event (24 rows)
pub const DEFAULT_HEIGHT: u16 = 24;

/// Smallest playfield the game runs in (40 columns)
pub const MIN_PLAYFIELD_WIDTH: u16 = 40;

/// Smallest playfield the game runs in (10 rows)
pub const MIN_PLAYFIELD_HEIGHT: u16 = 10;

/// Fixed column of the bird
pub const BIRD_X: i32 = 10;

/// Bird sprite width in columns
pub const BIRD_WIDTH: i32 = 2;

/// Pipe width in columns
pub const PIPE_WIDTH: i32 = 8;

/// Minimum rows between a gap and the top/bottom edge
pub const MIN_GAP_TOP: i32 = 3;

/// A new pipe spawns once the newest one is this far left of the right edge
pub const PIPE_SPAWN_GAP: i32 = 50;

/// Downward acceleration per tick
pub const GRAVITY: f64 = 0.3;

/// Velocity set by a flap (negative = upward)
pub const JUMP_FORCE: f64 = -2.3;

/// Number of entries kept in the rankings table
pub const MAX_RANKINGS: usize = 10;

/// Difficulty levels selectable on the title screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

/// Tuning constants for one difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultySettings {
    /// Tick interval at the start of a run (larger = slower)
    pub initial_interval: Duration,
    /// How much a speed-up shortens the tick interval
    pub interval_step: Duration,
    /// Pipes passed between speed-ups
    pub score_interval: u32,
    /// Fastest allowed tick interval
    pub min_interval: Duration,
    /// Rows in each pipe gap (smaller = harder)
    pub pipe_gap: u16,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Look up the tuning constants for this level
    pub const fn settings(self) -> DifficultySettings {
        match self {
            Difficulty::Easy => DifficultySettings {
                initial_interval: Duration::from_millis(60),
                interval_step: Duration::from_millis(5),
                score_interval: 5,
                min_interval: Duration::from_millis(30),
                pipe_gap: 15,
            },
            Difficulty::Normal => DifficultySettings {
                initial_interval: Duration::from_millis(45),
                interval_step: Duration::from_millis(8),
                score_interval: 3,
                min_interval: Duration::from_millis(20),
                pipe_gap: 12,
            },
            Difficulty::Hard => DifficultySettings {
                initial_interval: Duration::from_millis(30),
                interval_step: Duration::from_millis(10),
                score_interval: 2,
                min_interval: Duration::from_millis(10),
                pipe_gap: 9,
            },
        }
    }

    /// Display label, also stored in score records
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    /// Map a zero-based menu index to a level (out of range falls back to Normal)
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Difficulty::Easy,
            2 => Difficulty::Hard,
            _ => Difficulty::Normal,
        }
    }

    /// Parse a level name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use flappy_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("Normal"), Some(Difficulty::Normal));
    /// assert_eq!(Difficulty::from_str("insane"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Colour themes for the terminal view
///
/// The palette itself belongs to the renderer; the simulation only tracks
/// which theme is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Classic,
    Retro,
    Neon,
}

impl Theme {
    /// Next theme in rotation (Classic → Retro → Neon → Classic)
    pub fn next(self) -> Self {
        match self {
            Theme::Classic => Theme::Retro,
            Theme::Retro => Theme::Neon,
            Theme::Neon => Theme::Classic,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Classic => "Classic",
            Theme::Retro => "Retro",
            Theme::Neon => "Neon",
        }
    }
}

/// Input actions consumed by the simulation
///
/// `Flap` is context dependent: it starts a run on the title screen, flaps
/// while playing and restarts after a game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Space bar: start / flap / restart
    Flap,
    /// Restart after a game over
    Restart,
    /// Leave the game from any screen
    Quit,
    /// Pick a difficulty on the title screen
    SelectDifficulty(Difficulty),
    /// Cycle the colour theme on the title screen
    ToggleTheme,
    /// New playfield size in cells
    Resize { width: u16, height: u16 },
}

/// Sound cues emitted by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    Jump,
    Score,
    GameOver,
}

impl SoundEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEvent::Jump => "jump",
            SoundEvent::Score => "score",
            SoundEvent::GameOver => "gameover",
        }
    }
}
