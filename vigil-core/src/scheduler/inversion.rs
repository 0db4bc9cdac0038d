//! Phase inversion scheduler
//!
//! Flips between the normal and inverted layouts on a fixed period for the
//! whole session, without jitter.

use crate::config::InversionStart;
use crate::state::Phase;
use crate::timer::PeriodicTimer;

/// Inversion scheduler
#[derive(Debug, Clone)]
pub struct InversionScheduler {
    phase: Phase,
    interval_ms: u64,
    start: InversionStart,
    timer: PeriodicTimer,
}

impl InversionScheduler {
    /// Create a stopped scheduler in the normal phase
    pub fn new(interval_ms: u32, start: InversionStart) -> Self {
        Self {
            phase: Phase::Normal,
            interval_ms: u64::from(interval_ms),
            start,
            timer: PeriodicTimer::new(),
        }
    }

    /// Reset to the normal phase and start the cycle
    pub fn start(&mut self, now_ms: u64) {
        self.phase = Phase::Normal;
        let first = match self.start {
            InversionStart::Immediate => now_ms,
            InversionStart::Delayed => now_ms.saturating_add(self.interval_ms),
        };
        self.timer.start(first, self.interval_ms);
    }

    /// Cancel the recurring timer
    pub fn stop(&mut self) {
        self.timer.stop();
    }

    /// Cancel the timer and return to the normal phase
    pub fn reset(&mut self) {
        self.timer.stop();
        self.phase = Phase::Normal;
    }

    /// Consume a due tick, if any
    ///
    /// The caller flips the phase by handling the resulting tick event.
    pub fn tick_if_due(&mut self, now_ms: u64) -> bool {
        self.timer.fire_if_due(now_ms)
    }

    /// Flip the phase and return the new one
    pub fn flip(&mut self) -> Phase {
        self.phase = self.phase.flipped();
        self.phase
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Next tick deadline
    pub fn deadline(&self) -> Option<u64> {
        self.timer.deadline()
    }

    /// Whether the cycle is running
    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_immediate_start() {
        let mut sched = InversionScheduler::new(30_000, InversionStart::Immediate);
        sched.start(1_000);
        assert_eq!(sched.deadline(), Some(1_000));
        assert!(sched.tick_if_due(1_000));
        assert_eq!(sched.deadline(), Some(31_000));
    }

    #[test]
    fn test_delayed_start() {
        let mut sched = InversionScheduler::new(30_000, InversionStart::Delayed);
        sched.start(1_000);
        assert!(!sched.tick_if_due(1_000));
        assert!(sched.tick_if_due(31_000));
    }

    #[test]
    fn test_phase_alternates() {
        let mut sched = InversionScheduler::new(100, InversionStart::Immediate);
        sched.start(0);
        let mut last = sched.phase();
        for _ in 0..10 {
            let next = sched.flip();
            assert_ne!(next, last);
            last = next;
        }
    }

    #[test]
    fn test_stop_and_restart() {
        let mut sched = InversionScheduler::new(100, InversionStart::Immediate);
        sched.start(0);
        sched.flip();
        sched.stop();
        assert!(!sched.is_running());
        assert!(!sched.tick_if_due(10_000));

        sched.start(500);
        assert_eq!(sched.phase(), Phase::Normal);
        assert!(sched.is_running());
    }

    #[test]
    fn test_reset_returns_to_normal() {
        let mut sched = InversionScheduler::new(100, InversionStart::Immediate);
        sched.start(0);
        assert_eq!(sched.flip(), Phase::Inverted);

        sched.reset();
        assert_eq!(sched.phase(), Phase::Normal);
        assert_eq!(sched.deadline(), None);
    }
}
