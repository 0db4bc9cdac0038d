//! Events that drive the display state machine

/// Events handled by [`DisplayStateMachine`](super::DisplayStateMachine)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Lifecycle events
    /// Display session started
    Activate,
    /// Display session ended
    Deactivate,

    // Input events
    /// User tapped the screen
    Tap,
    /// Accelerometer reading, as the magnitude of the acceleration vector
    Motion {
        /// Magnitude in m/s²
        magnitude: f32,
    },

    // Timer events
    /// Inversion period elapsed
    InversionTick,
    /// Offset refresh period elapsed
    OffsetTick,
    /// Peek deadline elapsed
    BrightnessRevert,
}

impl Event {
    /// Check if this event is a session lifecycle event
    pub fn is_lifecycle_event(&self) -> bool {
        matches!(self, Event::Activate | Event::Deactivate)
    }

    /// Check if this event is produced by a timer firing
    pub fn is_timer_event(&self) -> bool {
        matches!(
            self,
            Event::InversionTick | Event::OffsetTick | Event::BrightnessRevert
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_classes() {
        assert!(Event::Activate.is_lifecycle_event());
        assert!(Event::Deactivate.is_lifecycle_event());
        assert!(!Event::Tap.is_lifecycle_event());

        assert!(!Event::Motion { magnitude: 9.8 }.is_timer_event());
        assert!(Event::InversionTick.is_timer_event());
        assert!(Event::BrightnessRevert.is_timer_event());
        assert!(!Event::Activate.is_timer_event());
    }
}
