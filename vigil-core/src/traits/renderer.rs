//! Renderer trait for the host display

use crate::state::RenderSnapshot;

/// Outbound paint interface
///
/// Called synchronously at the end of every handled event. The host paints
/// the colors, applies the offset as a layout inset and sets the screen
/// brightness. It must never dim or blank the screen on its own.
pub trait Renderer {
    /// Paint one snapshot
    fn render(&mut self, snapshot: &RenderSnapshot);
}

/// Closure renderer, handy for tests and small hosts
impl<F: FnMut(&RenderSnapshot)> Renderer for F {
    fn render(&mut self, snapshot: &RenderSnapshot) {
        self(snapshot)
    }
}
