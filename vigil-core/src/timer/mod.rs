//! Cancellable timer slots
//!
//! Timers here are plain deadlines owned by the component that arms them.
//! The host asks for the earliest deadline, sleeps until then, and lets the
//! state machine fire whatever is due. A slot holds at most one deadline, so
//! re-arming always replaces the previous one.

pub mod slot;

pub use slot::{OneShotTimer, PeriodicTimer, TimerToken};
