//! One-shot tick timer driven by the event loop.
//!
//! The simulation asks for its next tick through
//! [`Effects::schedule_tick`](crate::core::Effects); the loop arms this timer,
//! uses [`TickTimer::timeout`] as its input poll timeout and calls
//! [`TickTimer::fire`] afterwards. At most one tick is ever pending.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickTimer {
    deadline: Option<Instant>,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer, replacing any pending deadline.
    pub fn schedule(&mut self, after: Duration, now: Instant) {
        self.deadline = Some(now + after);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the deadline (zero when overdue), `None` when idle.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Consume the deadline if it has passed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_timer_never_fires() {
        let mut timer = TickTimer::new();
        let now = Instant::now();
        assert_eq!(timer.timeout(now), None);
        assert!(!timer.fire(now + Duration::from_secs(60)));
    }

    #[test]
    fn fires_once_after_deadline() {
        let mut timer = TickTimer::new();
        let t0 = Instant::now();
        timer.schedule(Duration::from_millis(45), t0);

        assert_eq!(timer.timeout(t0), Some(Duration::from_millis(45)));
        assert!(!timer.fire(t0 + Duration::from_millis(44)));
        assert!(timer.fire(t0 + Duration::from_millis(45)));
        assert!(!timer.is_armed());
        assert!(!timer.fire(t0 + Duration::from_millis(100)));
    }

    #[test]
    fn overdue_timeout_is_zero() {
        let mut timer = TickTimer::new();
        let t0 = Instant::now();
        timer.schedule(Duration::from_millis(10), t0);
        assert_eq!(timer.timeout(t0 + Duration::from_secs(1)), Some(Duration::ZERO));
    }

    #[test]
    fn reschedule_replaces_deadline() {
        let mut timer = TickTimer::new();
        let t0 = Instant::now();
        timer.schedule(Duration::from_millis(60), t0);
        timer.schedule(Duration::from_millis(10), t0);
        assert!(timer.fire(t0 + Duration::from_millis(10)));

        timer.schedule(Duration::from_millis(10), t0);
        timer.cancel();
        assert!(!timer.fire(t0 + Duration::from_secs(1)));
    }
}
