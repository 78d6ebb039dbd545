//! Pipe entity - a scrolling obstacle pair with a vertical gap.

use rand::Rng;

use crate::bird::Bird;
use crate::types::{BIRD_WIDTH, MIN_GAP_TOP, PIPE_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipe {
    /// Column of the pipe's left edge
    pub x: i32,
    /// First open row of the gap
    pub gap_top: i32,
    /// Number of open rows
    pub gap_size: i32,
    /// Set once the bird has cleared this pipe
    pub passed: bool,
}

impl Pipe {
    /// Spawn a pipe just off the right edge with a random gap.
    ///
    /// The gap top is drawn from `[MIN_GAP_TOP, height - gap_size - MIN_GAP_TOP)`.
    ///
    /// # Panics
    ///
    /// Panics if that range is empty (`gap_size >= height - 2 * MIN_GAP_TOP`).
    /// [`Playfield::fit_gap`](crate::Playfield::fit_gap) rules this out.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, width: i32, height: i32, gap_size: i32) -> Self {
        let max_top = height - gap_size - MIN_GAP_TOP;
        let gap_top = rng.gen_range(MIN_GAP_TOP..max_top);

        Self {
            x: width,
            gap_top,
            gap_size,
            passed: false,
        }
    }

    /// Scroll one column left
    pub fn advance(&mut self) {
        self.x -= 1;
    }

    /// The right edge has left the screen
    pub fn is_off_screen(&self) -> bool {
        self.x + PIPE_WIDTH < 0
    }

    /// Whether a row is inside the gap
    pub fn in_gap(&self, row: i32) -> bool {
        row >= self.gap_top && row < self.gap_top + self.gap_size
    }

    fn covers_column(&self, col: i32) -> bool {
        col >= self.x && col < self.x + PIPE_WIDTH
    }

    /// Whether any bird column overlapping the pipe sits outside the gap
    pub fn collides_with(&self, bird: &Bird) -> bool {
        let row = bird.row();
        (bird.x..bird.x + BIRD_WIDTH).any(|col| self.covers_column(col) && !self.in_gap(row))
    }

    /// The bird's rightmost column is past the pipe and it was not counted yet
    pub fn is_passed(&self, bird: &Bird) -> bool {
        !self.passed && bird.x + BIRD_WIDTH - 1 > self.x + PIPE_WIDTH
    }

    pub fn mark_passed(&mut self) {
        self.passed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BIRD_X;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pipe_at(x: i32, gap_top: i32, gap_size: i32) -> Pipe {
        Pipe {
            x,
            gap_top,
            gap_size,
            passed: false,
        }
    }

    #[test]
    fn test_spawn_respects_margins() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let pipe = Pipe::spawn(&mut rng, 80, 24, 12);
            assert_eq!(pipe.x, 80);
            assert!(!pipe.passed);
            assert!(pipe.gap_top >= MIN_GAP_TOP);
            assert!(pipe.gap_top + pipe.gap_size <= 24 - MIN_GAP_TOP);
        }
    }

    #[test]
    fn test_spawn_tightest_fit() {
        let mut rng = StdRng::seed_from_u64(1);
        // 10 rows, gap 3: only gap_top = 3 is valid.
        let pipe = Pipe::spawn(&mut rng, 40, 10, 3);
        assert_eq!(pipe.gap_top, 3);
    }

    #[test]
    fn test_advance_and_off_screen() {
        let mut pipe = pipe_at(-PIPE_WIDTH + 1, 5, 10);
        assert!(!pipe.is_off_screen());
        pipe.advance();
        assert_eq!(pipe.x, -PIPE_WIDTH);
        assert!(!pipe.is_off_screen());
        pipe.advance();
        assert!(pipe.is_off_screen());
    }

    #[test]
    fn test_collision_outside_gap() {
        let mut bird = Bird::new(BIRD_X, 2);
        let pipe = pipe_at(BIRD_X, 5, 10);
        assert!(pipe.collides_with(&bird));

        bird.y = 15.0; // first row below the gap
        assert!(pipe.collides_with(&bird));
    }

    #[test]
    fn test_no_collision_inside_gap() {
        let pipe = pipe_at(BIRD_X, 5, 10);
        for row in 5..15 {
            let bird = Bird::new(BIRD_X, row);
            assert!(!pipe.collides_with(&bird), "row {row} is inside the gap");
        }
    }

    #[test]
    fn test_no_collision_outside_span() {
        let bird = Bird::new(BIRD_X, 0);
        // Pipe entirely right of the bird.
        assert!(!pipe_at(BIRD_X + BIRD_WIDTH, 5, 10).collides_with(&bird));
        // Pipe entirely left of the bird.
        assert!(!pipe_at(BIRD_X - PIPE_WIDTH, 5, 10).collides_with(&bird));
    }

    #[test]
    fn test_partial_overlap_checks_second_column() {
        let bird = Bird::new(BIRD_X, 0);
        // Only the bird's right column (BIRD_X + 1) is inside the pipe.
        let pipe = pipe_at(BIRD_X + 1, 5, 10);
        assert!(pipe.collides_with(&bird));
        // Only the bird's left column is inside the pipe.
        let pipe = pipe_at(BIRD_X - PIPE_WIDTH + 1, 5, 10);
        assert!(pipe.collides_with(&bird));
    }

    #[test]
    fn test_is_passed_once() {
        let bird = Bird::new(BIRD_X, 10);
        // Right bird column is BIRD_X + 1; passed once it exceeds x + PIPE_WIDTH.
        let mut pipe = pipe_at(BIRD_X + 1 - PIPE_WIDTH, 5, 10);
        assert!(!pipe.is_passed(&bird));

        pipe.advance();
        assert!(pipe.is_passed(&bird));
        pipe.mark_passed();
        assert!(!pipe.is_passed(&bird));

        for _ in 0..20 {
            pipe.advance();
            assert!(!pipe.is_passed(&bird));
        }
    }

    #[test]
    fn test_passed_pipe_no_longer_overlaps() {
        let bird = Bird::new(BIRD_X, 0);
        let mut pipe = pipe_at(BIRD_X + 1 - PIPE_WIDTH, 5, 10);
        pipe.advance();
        assert!(pipe.is_passed(&bird));
        assert!(!pipe.collides_with(&bird));
    }
}
