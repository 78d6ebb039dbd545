//! Bird entity - vertical physics only.
//!
//! The bird never moves horizontally; the world scrolls past it instead.

use crate::types::{BIRD_X, GRAVITY, JUMP_FORCE};

/// The player character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    /// Column of the bird's left cell (fixed for the whole run)
    pub x: i32,
    /// Vertical position in rows (row 0 = top)
    pub y: f64,
    /// Vertical velocity in rows per tick (positive = falling)
    pub velocity: f64,
}

impl Bird {
    /// Create a resting bird at the given cell
    pub fn new(x: i32, row: i32) -> Self {
        Self {
            x,
            y: row as f64,
            velocity: 0.0,
        }
    }

    /// Bird at its run-start position for a playfield of `height` rows
    pub fn spawn(height: i32) -> Self {
        Self::new(BIRD_X, height / 2)
    }

    /// Flap: replaces the current velocity, it does not add to it
    pub fn jump(&mut self) {
        self.velocity = JUMP_FORCE;
    }

    /// Apply gravity, then move by the new velocity
    pub fn update(&mut self) {
        self.velocity += GRAVITY;
        self.y += self.velocity;
    }

    /// Row used for every cell-based comparison (rounded toward -inf)
    pub fn row(&self) -> i32 {
        self.y.floor() as i32
    }

    /// Whether the bird is on its way up (selects the sprite)
    pub fn is_rising(&self) -> bool {
        self.velocity < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_update_applies_gravity_then_moves() {
        let mut bird = Bird::new(BIRD_X, 12);
        bird.update();
        assert!((bird.velocity - 0.3).abs() < EPS);
        assert!((bird.y - 12.3).abs() < EPS);
        assert_eq!(bird.row(), 12);
    }

    #[test]
    fn test_jump_then_update() {
        let mut bird = Bird::new(BIRD_X, 12);
        bird.update();
        bird.jump();
        bird.update();
        assert!((bird.velocity - (-2.0)).abs() < EPS);
        assert!((bird.y - 10.3).abs() < EPS);
        assert_eq!(bird.row(), 10);
    }

    #[test]
    fn test_jump_is_a_reset() {
        let mut a = Bird::new(BIRD_X, 12);
        a.velocity = 5.0;
        a.jump();
        let mut b = Bird::new(BIRD_X, 12);
        b.velocity = -7.0;
        b.jump();
        assert_eq!(a.velocity, JUMP_FORCE);
        assert_eq!(b.velocity, JUMP_FORCE);

        a.jump();
        assert_eq!(a.velocity, JUMP_FORCE);
    }

    #[test]
    fn test_velocity_is_not_clamped() {
        let mut bird = Bird::new(BIRD_X, 0);
        let mut prev_v = bird.velocity;
        for _ in 0..100 {
            let prev_y = bird.y;
            bird.update();
            assert!((bird.velocity - prev_v - GRAVITY).abs() < EPS);
            assert!((bird.y - prev_y - bird.velocity).abs() < 1e-6);
            prev_v = bird.velocity;
        }
        assert!(bird.velocity > 29.0);
    }

    #[test]
    fn test_row_floors_negative_positions() {
        let mut bird = Bird::new(BIRD_X, 0);
        bird.y = -0.5;
        assert_eq!(bird.row(), -1);
        bird.y = 0.99;
        assert_eq!(bird.row(), 0);
    }

    #[test]
    fn test_spawn_centers_bird() {
        let bird = Bird::spawn(24);
        assert_eq!(bird.x, BIRD_X);
        assert_eq!(bird.row(), 12);
        assert_eq!(bird.velocity, 0.0);
        assert!(!bird.is_rising());
    }
}
