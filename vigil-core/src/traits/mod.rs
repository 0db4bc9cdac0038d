//! Host integration traits
//!
//! These traits define the interface between the display logic and the
//! host windowing system.

pub mod renderer;

pub use renderer::Renderer;
