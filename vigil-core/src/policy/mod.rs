//! Burn-in mitigation policies
//!
//! Pure functions of their inputs plus an injected random source. Seed the
//! source in tests for deterministic output.

pub mod color;
pub mod offset;

pub use color::{ColorPolicy, Rgb};
pub use offset::{Offset, OffsetPolicy};
