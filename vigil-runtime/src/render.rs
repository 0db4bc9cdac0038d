//! Renderer adapters

use log::trace;
use vigil_core::{RenderSnapshot, Renderer};

/// Skips snapshots identical to the last one painted
///
/// Motion samples arrive at sensor cadence and usually change nothing, so
/// the host would otherwise repaint the same frame many times a second.
pub struct DedupRenderer<R> {
    inner: R,
    last: Option<RenderSnapshot>,
}

impl<R: Renderer> DedupRenderer<R> {
    /// Wrap a renderer
    pub fn new(inner: R) -> Self {
        Self { inner, last: None }
    }

    /// Last snapshot forwarded to the inner renderer
    pub fn last(&self) -> Option<&RenderSnapshot> {
        self.last.as_ref()
    }

    /// Access the wrapped renderer
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Forget the last frame so the next snapshot is always painted
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Unwrap the inner renderer
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Renderer> Renderer for DedupRenderer<R> {
    fn render(&mut self, snapshot: &RenderSnapshot) {
        if self.last.as_ref() == Some(snapshot) {
            trace!("snapshot unchanged, skipping paint");
            return;
        }
        self.inner.render(snapshot);
        self.last = Some(*snapshot);
    }
}
