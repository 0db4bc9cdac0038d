//! Brightness wake/idle controller

use crate::timer::{OneShotTimer, TimerToken};

/// Logical brightness level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BrightnessLevel {
    /// Idle level
    Dim,
    /// Peeking after a tap or wrist raise
    Full,
}

/// Brightness controller
///
/// Owns the only revert timer. `wake` cancels the pending revert before
/// arming a new one, so there are never two reverts in flight.
#[derive(Debug, Clone)]
pub struct BrightnessController {
    level: BrightnessLevel,
    dim: f32,
    full: f32,
    peek_ms: u64,
    revert: OneShotTimer,
    last_wake_ms: Option<u64>,
}

impl BrightnessController {
    /// Create a controller at dim brightness
    pub fn new(dim: f32, full: f32, peek_ms: u32) -> Self {
        Self {
            level: BrightnessLevel::Dim,
            dim,
            full,
            peek_ms: u64::from(peek_ms),
            revert: OneShotTimer::new(),
            last_wake_ms: None,
        }
    }

    /// Go to full brightness and (re)arm the revert
    pub fn wake(&mut self, now_ms: u64) -> TimerToken {
        self.level = BrightnessLevel::Full;
        self.last_wake_ms = Some(now_ms);
        self.revert.arm(now_ms.saturating_add(self.peek_ms))
    }

    /// Disarm the revert timer if its deadline has passed
    ///
    /// The level is left untouched; the caller follows up with [`revert`].
    ///
    /// [`revert`]: Self::revert
    pub fn take_due(&mut self, now_ms: u64) -> Option<TimerToken> {
        self.revert.fire_if_due(now_ms)
    }

    /// Drop to dim brightness
    ///
    /// Only the armed timer calls this. Any deadline still pending is
    /// cleared along with it.
    pub fn revert(&mut self) {
        self.revert.cancel();
        self.level = BrightnessLevel::Dim;
    }

    /// Return to the idle state with nothing pending
    pub fn reset(&mut self) {
        self.revert.cancel();
        self.level = BrightnessLevel::Dim;
        self.last_wake_ms = None;
    }

    /// Current logical level
    pub fn level(&self) -> BrightnessLevel {
        self.level
    }

    /// Current brightness value
    pub fn current_level(&self) -> f32 {
        match self.level {
            BrightnessLevel::Dim => self.dim,
            BrightnessLevel::Full => self.full,
        }
    }

    /// Whether the screen is at full brightness
    pub fn is_full(&self) -> bool {
        self.level == BrightnessLevel::Full
    }

    /// Deadline of the pending revert, if any
    pub fn wake_until(&self) -> Option<u64> {
        self.revert.deadline()
    }

    /// Time of the most recent wake
    pub fn last_wake_ms(&self) -> Option<u64> {
        self.last_wake_ms
    }

    /// Whether more than `window_ms` has passed since the last wake
    pub fn debounce_elapsed(&self, now_ms: u64, window_ms: u64) -> bool {
        match self.last_wake_ms {
            Some(last) => now_ms.saturating_sub(last) > window_ms,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn controller() -> BrightnessController {
        BrightnessController::new(0.2, 1.0, 10_000)
    }

    /// Fire the revert the way the state machine does
    fn revert_if_due(ctrl: &mut BrightnessController, now_ms: u64) -> bool {
        if ctrl.take_due(now_ms).is_some() {
            ctrl.revert();
            true
        } else {
            false
        }
    }

    #[test]
    fn test_wake_and_revert() {
        let mut ctrl = controller();
        assert_eq!(ctrl.current_level(), 0.2);

        ctrl.wake(0);
        assert_eq!(ctrl.current_level(), 1.0);
        assert_eq!(ctrl.wake_until(), Some(10_000));

        assert!(!revert_if_due(&mut ctrl, 9_999));
        assert!(revert_if_due(&mut ctrl, 10_000));
        assert_eq!(ctrl.level(), BrightnessLevel::Dim);
        assert_eq!(ctrl.wake_until(), None);
    }

    #[test]
    fn test_second_wake_supersedes_first() {
        let mut ctrl = controller();
        ctrl.wake(0);
        ctrl.wake(100);

        // The first deadline no longer exists
        assert!(!revert_if_due(&mut ctrl, 10_000));
        assert!(ctrl.is_full());
        assert!(revert_if_due(&mut ctrl, 10_100));
        assert!(!revert_if_due(&mut ctrl, 20_000));
    }

    #[test]
    fn test_debounce() {
        let mut ctrl = controller();
        assert!(ctrl.debounce_elapsed(0, 1_000));

        ctrl.wake(500);
        assert!(!ctrl.debounce_elapsed(1_500, 1_000));
        assert!(ctrl.debounce_elapsed(1_501, 1_000));
    }

    #[test]
    fn test_reset() {
        let mut ctrl = controller();
        ctrl.wake(0);
        ctrl.reset();
        assert!(!ctrl.is_full());
        assert_eq!(ctrl.last_wake_ms(), None);
        assert!(!revert_if_due(&mut ctrl, u64::MAX));
    }

    proptest! {
        #[test]
        fn at_most_one_revert_per_wake_burst(
            gaps in proptest::collection::vec(1u64..5_000, 1..20),
        ) {
            let peek = 10_000u64;
            let mut ctrl = controller();
            let mut now = 0u64;
            let mut last_deadline = 0u64;

            for gap in gaps {
                ctrl.wake(now);
                last_deadline = now + peek;
                now += gap;
                // Every gap is shorter than the peek, so nothing fires mid-burst
                prop_assert!(!revert_if_due(&mut ctrl, now));
                prop_assert!(ctrl.is_full());
            }

            let mut reverts = 0;
            for t in [last_deadline - 1, last_deadline, last_deadline + 1, last_deadline + peek] {
                if revert_if_due(&mut ctrl, t) {
                    reverts += 1;
                    prop_assert_eq!(t, last_deadline);
                }
                prop_assert_eq!(ctrl.is_full(), t < last_deadline);
            }
            prop_assert_eq!(reverts, 1);
        }
    }
}
