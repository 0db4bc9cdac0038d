//! One-shot and periodic timer slots

/// Identifies one arming of a [`OneShotTimer`]
///
/// Every `arm` call yields a new token, so a firing can always be traced to
/// the arming that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerToken(u32);

impl TimerToken {
    /// Generation number of this arming
    pub const fn generation(&self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Armed {
    deadline_ms: u64,
    token: TimerToken,
}

/// Single deferred action
#[derive(Debug, Clone, Default)]
pub struct OneShotTimer {
    armed: Option<Armed>,
    generation: u32,
}

impl OneShotTimer {
    /// Create a disarmed timer
    pub const fn new() -> Self {
        Self {
            armed: None,
            generation: 0,
        }
    }

    /// Arm the timer, replacing any pending deadline
    pub fn arm(&mut self, deadline_ms: u64) -> TimerToken {
        self.cancel();
        self.generation = self.generation.wrapping_add(1);
        let token = TimerToken(self.generation);
        self.armed = Some(Armed { deadline_ms, token });
        token
    }

    /// Disarm the timer
    ///
    /// Returns the token of the cancelled arming, if any.
    pub fn cancel(&mut self) -> Option<TimerToken> {
        self.armed.take().map(|a| a.token)
    }

    /// Pending deadline
    pub fn deadline(&self) -> Option<u64> {
        self.armed.map(|a| a.deadline_ms)
    }

    /// Whether a deadline is pending
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Disarm and return the token if the deadline has passed
    pub fn fire_if_due(&mut self, now_ms: u64) -> Option<TimerToken> {
        match self.armed {
            Some(a) if a.deadline_ms <= now_ms => {
                self.armed = None;
                Some(a.token)
            }
            _ => None,
        }
    }
}

/// Self-rescheduling recurring action
#[derive(Debug, Clone, Default)]
pub struct PeriodicTimer {
    deadline_ms: Option<u64>,
    interval_ms: u64,
}

impl PeriodicTimer {
    /// Create a stopped timer
    pub const fn new() -> Self {
        Self {
            deadline_ms: None,
            interval_ms: 0,
        }
    }

    /// Start (or restart) the timer
    ///
    /// Any previous schedule is discarded.
    pub fn start(&mut self, first_deadline_ms: u64, interval_ms: u64) {
        self.interval_ms = interval_ms;
        self.deadline_ms = Some(first_deadline_ms);
    }

    /// Stop the timer
    pub fn stop(&mut self) {
        self.deadline_ms = None;
    }

    /// Next deadline
    pub fn deadline(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Whether the timer is running
    pub fn is_running(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Fire once if due and re-arm for the next period
    ///
    /// If the host fell behind by more than one period, the missed periods
    /// collapse into this single firing and the next deadline is one period
    /// after `now_ms`.
    pub fn fire_if_due(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if deadline <= now_ms => {
                let next = deadline.saturating_add(self.interval_ms);
                self.deadline_ms = Some(if next > now_ms {
                    next
                } else {
                    now_ms.saturating_add(self.interval_ms)
                });
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
    fn test_one_shot_fires_once() {
        let mut timer = OneShotTimer::new();
        let token = timer.arm(100);

        assert_eq!(timer.fire_if_due(99), None);
        assert_eq!(timer.fire_if_due(100), Some(token));
        assert_eq!(timer.fire_if_due(200), None);
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_rearm_replaces_deadline() {
        let mut timer = OneShotTimer::new();
        let first = timer.arm(100);
        let second = timer.arm(250);

        assert_ne!(first, second);
        assert_eq!(second.generation(), first.generation() + 1);
        assert_eq!(timer.deadline(), Some(250));
        assert_eq!(timer.fire_if_due(150), None);
        assert_eq!(timer.fire_if_due(250), Some(second));
    }

    #[test]
    fn test_cancel() {
        let mut timer = OneShotTimer::new();
        let token = timer.arm(10);
        assert_eq!(timer.cancel(), Some(token));
        assert_eq!(timer.cancel(), None);
        assert_eq!(timer.fire_if_due(1_000), None);
    }

    #[test]
    fn test_periodic_cadence() {
        let mut timer = PeriodicTimer::new();
        timer.start(0, 100);

        assert!(timer.fire_if_due(0));
        assert_eq!(timer.deadline(), Some(100));
        assert!(!timer.fire_if_due(99));
        assert!(timer.fire_if_due(105));
        // Cadence is anchored to the schedule, not to the late poll
        assert_eq!(timer.deadline(), Some(200));
    }

    #[test]
    fn test_periodic_collapses_missed_periods() {
        let mut timer = PeriodicTimer::new();
        timer.start(100, 100);

        assert!(timer.fire_if_due(1_050));
        assert_eq!(timer.deadline(), Some(1_150));
        assert!(!timer.fire_if_due(1_100));
    }

    #[test]
    fn test_periodic_stop() {
        let mut timer = PeriodicTimer::new();
        timer.start(50, 50);
        timer.stop();
        assert!(!timer.is_running());
        assert!(!timer.fire_if_due(10_000));
    }
}
