//! Frame callback scheduling.
//!
//! A frame request is work that must wait until the host has committed layout
//! (the browser's `requestAnimationFrame`). Only one request is outstanding at
//! a time: scheduling a new one supersedes the old, and cancelling drops it.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::logging::targets;

/// A unique identifier for a frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRequestId(u64);

impl FrameRequestId {
    /// Get the raw u64 value of this request ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Global counter for generating unique frame request IDs.
static NEXT_FRAME_REQUEST_ID: AtomicU64 = AtomicU64::new(1);

fn next_frame_request_id() -> FrameRequestId {
    FrameRequestId(NEXT_FRAME_REQUEST_ID.fetch_add(1, Ordering::Relaxed))
}

/// Holds at most one pending frame request carrying an action value.
#[derive(Debug)]
pub struct FrameScheduler<T> {
    pending: Option<(FrameRequestId, T)>,
}

impl<T> FrameScheduler<T> {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Schedule `action` for the next frame, superseding any pending request.
    pub fn request(&mut self, action: T) -> FrameRequestId {
        let id = next_frame_request_id();
        if let Some((old, _)) = self.pending.replace((id, action)) {
            tracing::trace!(target: targets::FRAME, superseded = old.as_u64(), "frame request superseded");
        }
        id
    }

    /// Cancel the pending request.
    ///
    /// Returns the ID of the request that was dropped, if any.
    pub fn cancel(&mut self) -> Option<FrameRequestId> {
        self.pending.take().map(|(id, _)| id)
    }

    /// Whether a request is waiting for the next frame.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// ID of the pending request.
    pub fn pending_id(&self) -> Option<FrameRequestId> {
        self.pending.as_ref().map(|(id, _)| *id)
    }

    /// Take the pending action for execution in the current frame.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take().map(|(_, action)| action)
    }
}

impl<T> Default for FrameScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_request_supersedes_old() {
        let mut frames = FrameScheduler::new();
        let first = frames.request("first");
        let second = frames.request("second");

        assert_ne!(first, second);
        assert_eq!(frames.pending_id(), Some(second));
        assert_eq!(frames.take(), Some("second"));
        assert_eq!(frames.take(), None);
    }

    #[test]
    fn cancel_drops_request() {
        let mut frames = FrameScheduler::new();
        let id = frames.request(());

        assert!(frames.has_pending());
        assert_eq!(frames.cancel(), Some(id));
        assert!(!frames.has_pending());
        assert_eq!(frames.take(), None);
    }
}
