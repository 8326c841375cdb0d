use std::cell::RefCell;
use std::rc::Rc;

/// Handle for one requested refresh callback.
pub type FrameRequest = u64;

/// Host refresh-scheduling contract: request a callback "before next
/// repaint" and cancel a previously requested one.
///
/// The chart keeps at most one live request: scheduling first cancels any
/// not-yet-fired pending request, so a burst of triggers within one refresh
/// interval collapses to exactly one draw.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameRequest;
    fn cancel_frame(&mut self, request: FrameRequest);
}

#[derive(Debug, Default)]
struct ManualFrameState {
    next: FrameRequest,
    pending: Vec<FrameRequest>,
    requested: usize,
    cancelled: usize,
}

/// Deterministic in-process scheduler for tests and headless hosts.
///
/// Cloning shares state, so a test can keep a handle while the chart owns the
/// boxed contract, then drain due requests to simulate the refresh tick.
#[derive(Debug, Clone, Default)]
pub struct ManualFrameScheduler {
    state: Rc<RefCell<ManualFrameState>>,
}

impl ManualFrameScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that were neither cancelled nor fired yet.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.state.borrow().pending.len()
    }

    #[must_use]
    pub fn requested_count(&self) -> usize {
        self.state.borrow().requested
    }

    #[must_use]
    pub fn cancelled_count(&self) -> usize {
        self.state.borrow().cancelled
    }

    /// Drains pending requests, simulating the host firing its refresh
    /// callbacks.
    pub fn take_due(&self) -> Vec<FrameRequest> {
        std::mem::take(&mut self.state.borrow_mut().pending)
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn request_frame(&mut self) -> FrameRequest {
        let mut state = self.state.borrow_mut();
        state.next += 1;
        let request = state.next;
        state.pending.push(request);
        state.requested += 1;
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        let mut state = self.state.borrow_mut();
        let before = state.pending.len();
        state.pending.retain(|&pending| pending != request);
        if state.pending.len() < before {
            state.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameScheduler, ManualFrameScheduler};

    #[test]
    fn cancel_removes_only_matching_request() {
        let mut scheduler = ManualFrameScheduler::new();
        let first = scheduler.request_frame();
        let second = scheduler.request_frame();
        scheduler.cancel_frame(first);
        assert_eq!(scheduler.take_due(), vec![second]);
        assert_eq!(scheduler.cancelled_count(), 1);
    }

    #[test]
    fn cancelling_unknown_request_is_harmless() {
        let mut scheduler = ManualFrameScheduler::new();
        scheduler.cancel_frame(99);
        assert_eq!(scheduler.cancelled_count(), 0);
    }
}
