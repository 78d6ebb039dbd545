//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: screens are drawn into a plain
//! framebuffer which is then diffed and flushed to the terminal with
//! crossterm. No widget toolkit is involved.
//!
//! - [`fb`]: framebuffer, cells and styles
//! - [`palette`]: theme colours
//! - [`game_view`]: title, playing and game-over screens (pure)
//! - [`renderer`]: raw-mode terminal lifecycle and diff flushing

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use flappy_core as core;
pub use flappy_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{format_clock, GameView, Viewport, TOO_SMALL_MESSAGE};
pub use palette::Palette;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
