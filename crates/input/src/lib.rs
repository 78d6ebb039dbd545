//! Terminal input module.
//!
//! Maps `crossterm` key and resize events into [`crate::types::GameAction`].
//! Nothing here reads the terminal; the binary polls events and feeds them in.

pub mod map;

pub use flappy_types as types;

pub use map::{handle_key_event, map_event, playfield_size, should_quit};
