//! Per-frame callback scheduling.
//!
//! Momentum runs as a chain of one-shot frame callbacks: each frame that
//! still has speed left requests the next one. The host decides what a frame
//! is (a display refresh, a terminal poll timeout, a test step).

use std::fmt;

/// Identifies one scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(u64);

impl fmt::Display for FrameHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame#{}", self.0)
    }
}

/// Schedules callbacks for the next frame.
pub trait FrameScheduler {
    /// Schedule a callback on the next frame on behalf of `target`.
    fn request_frame(&mut self, target: &str) -> FrameHandle;

    /// Cancel a scheduled callback.
    ///
    /// Must be a no-op for handles that already fired, were already canceled
    /// or were never issued.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// A scheduled callback waiting for its frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueFrame {
    pub handle: FrameHandle,
    pub target: String,
}

/// Queue-backed scheduler for hosts that run their own frame loop.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: Vec<DueFrame>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain every callback pending at the start of this frame.
    /// Callbacks requested while these fire land in the next frame.
    pub fn take_due(&mut self) -> Vec<DueFrame> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if nothing is scheduled.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.pending.iter().any(|due| due.handle == handle)
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self, target: &str) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push(DueFrame {
            handle,
            target: target.to_string(),
        });
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|due| due.handle != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_unique() {
        let mut queue = FrameQueue::new();
        let a = queue.request_frame("a");
        let b = queue.request_frame("a");
        assert_ne!(a, b);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut queue = FrameQueue::new();
        let handle = queue.request_frame("slider");
        queue.cancel_frame(handle);
        queue.cancel_frame(handle);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_requests_during_drain_go_to_next_frame() {
        let mut queue = FrameQueue::new();
        queue.request_frame("slider");

        let due = queue.take_due();
        assert_eq!(due.len(), 1);
        assert!(queue.is_empty());

        let next = queue.request_frame("slider");
        assert!(queue.is_pending(next));
        assert!(!queue.is_pending(due[0].handle));
    }
}
