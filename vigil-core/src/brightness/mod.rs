//! Brightness control
//!
//! Two levels plus a revert deadline. A wake raises the screen to full
//! brightness and arms a single revert; the revert drops it back to dim.

pub mod controller;

pub use controller::{BrightnessController, BrightnessLevel};
