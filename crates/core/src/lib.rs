//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on the terminal, audio devices or the file system:
//!
//! - **Deterministic**: Same seed and the same inputs produce identical runs
//! - **Testable**: Every rule is exercised by unit tests with injected pipes
//! - **Portable**: Runs headless; the binary wires it to crossterm and rodio
//!
//! # Module Structure
//!
//! - [`bird`]: Player entity with gravity and flap physics
//! - [`pipe`]: Scrolling obstacles, gap placement and collision tests
//! - [`playfield`]: Playfield bounds and gap fitting for small terminals
//! - [`stats`]: Per-run jump and height statistics
//! - [`record`]: Score records, the top-10 rankings table and the high score
//! - [`effects`]: Side effects requested by a simulation step
//! - [`game_state`]: Phase state machine, tick processing and scoring
//!
//! # Game Rules
//!
//! - **Physics**: velocity += 0.3 then y += velocity, every tick
//! - **Flap**: sets the velocity to -2.3 (upwards)
//! - **Pipes**: scroll one column per tick; a new one spawns every 50 columns
//! - **Scoring**: one point per cleared pipe
//! - **Speed-up**: every N points the tick interval shrinks, down to a floor
//! - **Game over**: leaving the playfield vertically or touching a pipe
//!
//! # Example
//!
//! ```
//! use flappy_core::{Effects, GameState, Moment, Phase};
//! use flappy_types::GameAction;
//!
//! let now = Moment::now();
//! let mut game = GameState::new(12345);
//!
//! // Flap on the title screen starts a run and asks for the first tick
//! let fx = game.handle(GameAction::Flap, now);
//! assert_eq!(game.phase(), Phase::Playing);
//! assert!(fx.schedule_tick.is_some());
//!
//! // Every tick re-arms the timer while the run lasts
//! let fx: Effects = game.tick(now);
//! assert_eq!(fx.schedule_tick, Some(game.tick_interval()));
//! assert_eq!(game.pipes().len(), 1);
//! ```
//!
//! # Timing
//!
//! The simulation never reads the clock. Callers pass a [`Moment`] into
//! [`GameState::handle`] and [`GameState::tick`] and deliver the next tick
//! after [`Effects::schedule_tick`].

pub mod bird;
pub mod effects;
pub mod game_state;
pub mod pipe;
pub mod playfield;
pub mod record;
pub mod stats;

pub use flappy_types as types;

// Re-export commonly used types for convenience
pub use bird::Bird;
pub use effects::{Effects, Moment};
pub use game_state::{GameState, Phase};
pub use pipe::Pipe;
pub use playfield::Playfield;
pub use record::{Leaderboard, Rankings, ScoreRecord};
pub use stats::RunStats;
