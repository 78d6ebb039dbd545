//! Side-effect requests produced by one simulation step.
//!
//! The simulation never performs I/O itself. Each step returns an [`Effects`]
//! value and the caller executes it: arm the tick timer, play sounds, hand the
//! finished run to persistence, or quit.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use chrono::{DateTime, Local};

use crate::record::ScoreRecord;
use crate::types::SoundEvent;

/// Point in time at which an event is handled.
///
/// `instant` drives durations, `wall` stamps score records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moment {
    pub instant: Instant,
    pub wall: DateTime<Local>,
}

impl Moment {
    pub fn now() -> Self {
        Self {
            instant: Instant::now(),
            wall: Local::now(),
        }
    }

    /// The same moment shifted forward (handy for driving the simulation in tests)
    pub fn after(&self, elapsed: Duration) -> Self {
        Self {
            instant: self.instant + elapsed,
            wall: self.wall
                + chrono::Duration::from_std(elapsed).unwrap_or_else(|_| chrono::Duration::zero()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Effects {
    /// Deliver the next tick after this long
    pub schedule_tick: Option<Duration>,
    /// Sounds to play, in order
    pub sounds: ArrayVec<SoundEvent, 4>,
    /// Finished run to hand to persistence
    pub persist: Option<ScoreRecord>,
    /// Tear the process down
    pub quit: bool,
}

impl Effects {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn quit() -> Self {
        Self {
            quit: true,
            ..Self::default()
        }
    }

    pub fn tick_after(interval: Duration) -> Self {
        Self {
            schedule_tick: Some(interval),
            ..Self::default()
        }
    }

    /// Queue a sound; extra cues beyond capacity are dropped
    pub fn play(&mut self, sound: SoundEvent) {
        let _ = self.sounds.try_push(sound);
    }

    pub fn is_empty(&self) -> bool {
        self.schedule_tick.is_none()
            && self.sounds.is_empty()
            && self.persist.is_none()
            && !self.quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_drops_overflow() {
        let mut fx = Effects::none();
        for _ in 0..10 {
            fx.play(SoundEvent::Score);
        }
        assert_eq!(fx.sounds.len(), 4);
    }

    #[test]
    fn test_constructors() {
        assert!(Effects::none().is_empty());
        assert!(Effects::quit().quit);
        assert_eq!(
            Effects::tick_after(Duration::from_millis(45)).schedule_tick,
            Some(Duration::from_millis(45))
        );
    }

    #[test]
    fn test_moment_after() {
        let m = Moment::now();
        let later = m.after(Duration::from_secs(2));
        assert_eq!(later.instant - m.instant, Duration::from_secs(2));
        assert_eq!((later.wall - m.wall).num_seconds(), 2);
    }
}
