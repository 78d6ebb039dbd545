//! Flappy Bird in the terminal (workspace facade crate).
//!
//! The game lives in dedicated crates under `crates/`, re-exported here as
//! `flappy_tui::{audio,core,input,store,term,types}`. This package adds the
//! pieces the binary wires together: configuration, the tick timer, the
//! background persistence worker and log setup.

pub use flappy_audio as audio;
pub use flappy_core as core;
pub use flappy_input as input;
pub use flappy_store as store;
pub use flappy_term as term;
pub use flappy_types as types;

pub mod config;
pub mod logging;
pub mod persist;
pub mod timer;

pub use config::Config;
pub use persist::PersistWorker;
pub use timer::TickTimer;
