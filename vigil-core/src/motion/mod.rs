//! Motion input
//!
//! Converts raw accelerometer samples into the magnitude the state machine
//! compares against gravity.

pub mod sample;

pub use sample::MotionSample;
