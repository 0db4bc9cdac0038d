//! Toolkit-agnostic core logic for the always-on display controller
//!
//! This crate contains all display behavior that does not depend on a
//! specific windowing system, sensor driver or clock:
//!
//! - Display state machine (mode, phase, brightness, offset)
//! - Brightness wake/idle controller
//! - Inversion scheduler for burn-in protection
//! - Color variance and pixel offset policies
//! - Cancellable timer slots
//! - Configuration type definitions
//! - Renderer trait for the host
//!
//! Time is always passed in as monotonic milliseconds. The crate never
//! reads a clock and never sleeps; the host drives it.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod brightness;
pub mod config;
pub mod motion;
pub mod policy;
pub mod scheduler;
pub mod state;
pub mod timer;
pub mod traits;

pub use brightness::{BrightnessController, BrightnessLevel};
pub use config::{ConfigError, DisplayConfig, InversionStart, Palette};
pub use motion::MotionSample;
pub use policy::{ColorPolicy, Offset, OffsetPolicy, Rgb};
pub use scheduler::InversionScheduler;
pub use state::{Asset, DisplayStateMachine, Event, Mode, Phase, RenderSnapshot};
pub use traits::Renderer;
