//! Per-run statistics.
//!
//! Heights are row indices, so the naming is inverted relative to the screen:
//! `max_height` holds the *smallest* row the bird reached (highest on screen)
//! and `min_height` the *largest* row (lowest on screen). Stored records keep
//! this convention.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStats {
    pub jump_count: u32,
    /// Smallest row reached
    pub max_height: i32,
    /// Largest row reached
    pub min_height: i32,
    pub total_height: i64,
    pub height_samples: u32,
}

impl RunStats {
    /// Neutral stats for a run that starts at `start_row`
    pub fn new(start_row: i32) -> Self {
        Self {
            jump_count: 0,
            max_height: start_row,
            min_height: start_row,
            total_height: 0,
            height_samples: 0,
        }
    }

    pub fn record_jump(&mut self) {
        self.jump_count += 1;
    }

    /// Sample the bird's row once per physics tick
    pub fn sample(&mut self, row: i32) {
        self.max_height = self.max_height.min(row);
        self.min_height = self.min_height.max(row);
        self.total_height += row as i64;
        self.height_samples += 1;
    }

    /// Mean sampled row, `0.0` before the first sample
    pub fn average_height(&self) -> f64 {
        if self.height_samples == 0 {
            return 0.0;
        }
        self.total_height as f64 / self.height_samples as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_of_zero_samples() {
        let stats = RunStats::new(12);
        assert_eq!(stats.average_height(), 0.0);
        assert!(!stats.average_height().is_nan());
        assert_eq!(RunStats::default().average_height(), 0.0);
    }

    #[test]
    fn test_sampling_tracks_inverted_extremes() {
        let mut stats = RunStats::new(12);
        for row in [12, 10, 7, 9, 15, 13] {
            stats.sample(row);
        }
        assert_eq!(stats.max_height, 7);
        assert_eq!(stats.min_height, 15);
        assert_eq!(stats.height_samples, 6);
        assert_eq!(stats.total_height, 66);
        assert!((stats.average_height() - 11.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_start_row_seeds_extremes() {
        let mut stats = RunStats::new(12);
        stats.sample(13);
        // The start row still counts as the highest point reached.
        assert_eq!(stats.max_height, 12);
        assert_eq!(stats.min_height, 13);
    }

    #[test]
    fn test_jump_count() {
        let mut stats = RunStats::new(0);
        stats.record_jump();
        stats.record_jump();
        assert_eq!(stats.jump_count, 2);
    }
}
