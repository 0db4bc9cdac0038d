//! Burn-in scheduler
//!
//! Drives the fixed-cadence phase inversion of the display.

pub mod inversion;

pub use inversion::InversionScheduler;
