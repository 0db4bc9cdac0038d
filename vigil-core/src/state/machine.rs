//! Display state machine definition
//!
//! The display has a single steady state, `Active`. Its sub-state is the
//! cross product of mode, phase, brightness and offset. Every handled event
//! ends with one render; events outside a session are dropped. Timer events
//! only come from [`DisplayStateMachine::advance`].
//!
//! The machine never reads a clock. Hosts pass `now_ms` with every call,
//! sleep until [`DisplayStateMachine::next_deadline`], then call
//! [`DisplayStateMachine::advance`] to fire whatever timers are due.

use heapless::Vec;
use rand::RngCore;

use super::events::Event;
use super::mode::{Mode, Phase};
use super::snapshot::{Asset, RenderSnapshot};
use crate::brightness::BrightnessController;
use crate::config::{ConfigError, DisplayConfig};
use crate::policy::{ColorPolicy, Offset, OffsetPolicy, Rgb};
use crate::scheduler::InversionScheduler;
use crate::timer::PeriodicTimer;
use crate::traits::Renderer;

/// Maximum timer events fired by one [`DisplayStateMachine::advance`]
///
/// One per timer: revert, inversion and offset refresh.
pub const MAX_DUE_EVENTS: usize = 3;

/// Display state machine
///
/// Single owner of all display state. Callers serialize access (one event
/// at a time); the runtime does this with a channel feeding one task.
#[derive(Debug)]
pub struct DisplayStateMachine<G> {
    config: DisplayConfig,
    colors: ColorPolicy,
    offsets: OffsetPolicy,
    brightness: BrightnessController,
    inversion: InversionScheduler,
    offset_timer: PeriodicTimer,
    mode: Mode,
    offset: Offset,
    /// Current (background, foreground), redrawn when mode or phase changes
    presented: (Rgb, Rgb),
    active: bool,
    rng: G,
}

impl<G: RngCore> DisplayStateMachine<G> {
    /// Create an inactive machine
    ///
    /// Fails if the configuration is invalid.
    pub fn new(config: DisplayConfig, rng: G) -> Result<Self, ConfigError> {
        config.validate()?;

        let colors = ColorPolicy::new(&config);
        let presented = (colors.base_color(Mode::A), config.neutral_light);

        Ok(Self {
            offsets: OffsetPolicy::new(config.offset_range),
            brightness: BrightnessController::new(
                config.dim_brightness,
                config.full_brightness,
                config.peek_ms,
            ),
            inversion: InversionScheduler::new(
                config.inversion_interval_ms,
                config.inversion_start,
            ),
            offset_timer: PeriodicTimer::new(),
            mode: Mode::A,
            offset: Offset::ZERO,
            presented,
            active: false,
            colors,
            config,
            rng,
        })
    }

    /// Handle one external event and render the result
    ///
    /// Returns `false` if the event was dropped: timer events are only
    /// produced by [`advance`](Self::advance), and nothing but `Activate` is
    /// accepted outside a session.
    pub fn handle<R: Renderer>(&mut self, event: Event, now_ms: u64, renderer: &mut R) -> bool {
        if event.is_timer_event() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Rejecting {:?}: timer events are internal", event);
            return false;
        }
        self.dispatch(event, now_ms, renderer)
    }

    /// Start a session
    pub fn activate<R: Renderer>(&mut self, now_ms: u64, renderer: &mut R) -> bool {
        self.handle(Event::Activate, now_ms, renderer)
    }

    /// End the session
    pub fn deactivate<R: Renderer>(&mut self, now_ms: u64, renderer: &mut R) -> bool {
        self.handle(Event::Deactivate, now_ms, renderer)
    }

    /// User tap
    pub fn tap<R: Renderer>(&mut self, now_ms: u64, renderer: &mut R) -> bool {
        self.handle(Event::Tap, now_ms, renderer)
    }

    /// Accelerometer magnitude sample
    pub fn motion<R: Renderer>(&mut self, magnitude: f32, now_ms: u64, renderer: &mut R) -> bool {
        self.handle(Event::Motion { magnitude }, now_ms, renderer)
    }

    /// Fire every timer due at `now_ms`, earliest first
    ///
    /// Returns the timer events that were handled.
    pub fn advance<R: Renderer>(
        &mut self,
        now_ms: u64,
        renderer: &mut R,
    ) -> Vec<Event, MAX_DUE_EVENTS> {
        let mut fired = Vec::new();
        while let Some(event) = self.pop_due(now_ms) {
            self.dispatch(event, now_ms, renderer);
            if fired.push(event).is_err() {
                break;
            }
        }
        fired
    }

    /// Earliest pending timer deadline
    pub fn next_deadline(&self) -> Option<u64> {
        [
            self.brightness.wake_until(),
            self.inversion.deadline(),
            self.offset_timer.deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Number of armed timers
    pub fn pending_timers(&self) -> usize {
        [
            self.brightness.wake_until(),
            self.inversion.deadline(),
            self.offset_timer.deadline(),
        ]
        .into_iter()
        .flatten()
        .count()
    }

    /// Build the snapshot for the current state
    pub fn snapshot(&self) -> RenderSnapshot {
        let (background, foreground) = self.presented;
        RenderSnapshot {
            background,
            foreground,
            brightness: self.brightness.current_level(),
            offset: self.offset,
            asset: Asset::from(self.mode),
            mode: self.mode,
            phase: self.inversion.phase(),
        }
    }

    /// Whether a session is active
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.inversion.phase()
    }

    /// Current offset
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Brightness controller state
    pub fn brightness(&self) -> &BrightnessController {
        &self.brightness
    }

    /// Active configuration
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    fn dispatch<R: Renderer>(&mut self, event: Event, now_ms: u64, renderer: &mut R) -> bool {
        if !self.active && event != Event::Activate {
            #[cfg(feature = "defmt")]
            defmt::warn!("Dropping {:?}: display not active", event);
            return false;
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("Event {:?} at {=u64} ms", event, now_ms);

        match event {
            Event::Activate => self.on_activate(now_ms),
            Event::Deactivate => self.on_deactivate(),
            Event::Tap => self.on_tap(now_ms),
            Event::Motion { magnitude } => self.on_motion(magnitude, now_ms),
            Event::InversionTick => self.on_inversion_tick(),
            Event::OffsetTick => self.on_offset_tick(),
            Event::BrightnessRevert => self.on_brightness_revert(),
        }

        renderer.render(&self.snapshot());
        true
    }

    fn pop_due(&mut self, now_ms: u64) -> Option<Event> {
        let candidates = [
            (self.brightness.wake_until(), Event::BrightnessRevert),
            (self.inversion.deadline(), Event::InversionTick),
            (self.offset_timer.deadline(), Event::OffsetTick),
        ];
        let (_, event) = candidates
            .into_iter()
            .filter_map(|(deadline, event)| deadline.map(|d| (d, event)))
            .filter(|(deadline, _)| *deadline <= now_ms)
            .min_by_key(|(deadline, _)| *deadline)?;

        let fired = match event {
            Event::BrightnessRevert => self.brightness.take_due(now_ms).is_some(),
            Event::InversionTick => self.inversion.tick_if_due(now_ms),
            Event::OffsetTick => self.offset_timer.fire_if_due(now_ms),
            _ => false,
        };
        fired.then_some(event)
    }

    fn on_activate(&mut self, now_ms: u64) {
        #[cfg(feature = "defmt")]
        defmt::info!("Display session started");

        self.mode = Mode::A;
        self.offset = Offset::ZERO;
        self.brightness.reset();
        self.inversion.start(now_ms);
        let interval = u64::from(self.config.offset_interval_ms);
        self.offset_timer
            .start(now_ms.saturating_add(interval), interval);
        self.active = true;

        self.refresh_colors();
        self.wake(now_ms);
    }

    fn on_deactivate(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::info!("Display session ended");

        // Cancel before returning so no stale firing can reach a later session
        self.brightness.reset();
        self.inversion.reset();
        self.offset_timer.stop();
        self.mode = Mode::A;
        self.offset = Offset::ZERO;
        self.presented = (self.colors.base_color(Mode::A), self.config.neutral_light);
        self.active = false;
    }

    fn on_tap(&mut self, now_ms: u64) {
        self.mode = self.mode.toggled();
        self.wake(now_ms);
        self.refresh_colors();

        #[cfg(feature = "defmt")]
        defmt::debug!("Tap: mode now {:?}", self.mode);
    }

    fn on_motion(&mut self, magnitude: f32, now_ms: u64) {
        let delta = magnitude - self.config.gravity;
        // A NaN sample never counts as motion
        if delta.is_nan() || delta.abs() <= self.config.motion_threshold {
            return;
        }
        // Chatter while already awake must not push the revert out
        if self.brightness.is_full() {
            return;
        }
        if !self
            .brightness
            .debounce_elapsed(now_ms, u64::from(self.config.motion_debounce_ms))
        {
            return;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("Motion wake: delta={}", delta);

        self.wake(now_ms);
    }

    fn wake(&mut self, now_ms: u64) {
        let _token = self.brightness.wake(now_ms);

        #[cfg(feature = "defmt")]
        defmt::trace!("Revert armed, generation {=u32}", _token.generation());
    }

    fn on_inversion_tick(&mut self) {
        self.inversion.flip();
        self.refresh_colors();
    }

    fn on_offset_tick(&mut self) {
        self.offset = self.offsets.next_offset(&mut self.rng);
    }

    fn on_brightness_revert(&mut self) {
        self.brightness.revert();
    }

    fn refresh_colors(&mut self) {
        self.presented = self
            .colors
            .color_for(self.mode, self.inversion.phase(), &mut self.rng);
    }
}
