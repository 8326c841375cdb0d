use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Host fixed-interval tick contract backing the resize-poll fallback.
///
/// The chart starts/stops the timer; the host calls back into
/// `Chart::poll_resize` on each tick. Injectable so tests drive polling
/// deterministically.
pub trait IntervalTimer {
    fn start(&mut self, period: Duration);
    fn stop(&mut self);
}

#[derive(Debug, Default)]
struct ManualTimerState {
    period: Option<Duration>,
    start_count: usize,
    stop_count: usize,
}

/// Test/headless timer that records start/stop calls; ticks are delivered by
/// calling `Chart::poll_resize` directly.
#[derive(Debug, Clone, Default)]
pub struct ManualTimer {
    state: Rc<RefCell<ManualTimerState>>,
}

impl ManualTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn period(&self) -> Option<Duration> {
        self.state.borrow().period
    }

    #[must_use]
    pub fn start_count(&self) -> usize {
        self.state.borrow().start_count
    }

    #[must_use]
    pub fn stop_count(&self) -> usize {
        self.state.borrow().stop_count
    }
}

impl IntervalTimer for ManualTimer {
    fn start(&mut self, period: Duration) {
        let mut state = self.state.borrow_mut();
        state.period = Some(period);
        state.start_count += 1;
    }

    fn stop(&mut self) {
        let mut state = self.state.borrow_mut();
        state.period = None;
        state.stop_count += 1;
    }
}

/// Tracks the last observed surface dimensions.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SizeProbe {
    last: Option<(u32, u32)>,
}

impl SizeProbe {
    /// Records the dimensions; true when they differ from the last
    /// observation (the first observation counts as a change).
    pub(crate) fn observe(&mut self, width: u32, height: u32) -> bool {
        let changed = self.last != Some((width, height));
        self.last = Some((width, height));
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::SizeProbe;

    #[test]
    fn probe_reports_changes_only() {
        let mut probe = SizeProbe::default();
        assert!(probe.observe(800, 600));
        assert!(!probe.observe(800, 600));
        assert!(probe.observe(800, 601));
    }
}
