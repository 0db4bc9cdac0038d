//! Configuration types
//!
//! Every tunable constant of the controller lives in [`DisplayConfig`].
//! Validation runs once at construction time.

pub mod types;

pub use types::{ConfigError, DisplayConfig, InversionStart, Palette};
