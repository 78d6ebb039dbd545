//! Playfield bounds used by spawning and collision.
//!
//! Terminal sizes are clamped to a minimum so that a pipe gap always fits
//! between the top and bottom margins.

use crate::types::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, MIN_GAP_TOP, MIN_PLAYFIELD_HEIGHT, MIN_PLAYFIELD_WIDTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playfield {
    width: i32,
    height: i32,
}

impl Playfield {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width.max(MIN_PLAYFIELD_WIDTH) as i32,
            height: height.max(MIN_PLAYFIELD_HEIGHT) as i32,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether a row lies inside the playfield
    pub fn contains_row(&self, row: i32) -> bool {
        row >= 0 && row < self.height
    }

    /// Largest gap that still leaves a non-empty range of gap positions
    pub fn max_gap(&self) -> i32 {
        self.height - 2 * MIN_GAP_TOP - 1
    }

    /// Shrink a configured gap so it fits this playfield
    pub fn fit_gap(&self, gap: u16) -> i32 {
        (gap as i32).clamp(1, self.max_gap())
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
