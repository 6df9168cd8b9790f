/// Viewport adapter
///
/// Maps the window width to an image variant and coalesces bursts of
/// resize events so images are only re-selected once the window settles.
use std::time::Duration;

pub use crate::state::data::Variant;

/// Widths below this get the mobile image
pub const TABLET_MIN_WIDTH: f32 = 600.0;
/// Widths at or above this get the desktop image
pub const DESKTOP_MIN_WIDTH: f32 = 900.0;

pub fn select_variant(width: f32) -> Variant {
    if width < TABLET_MIN_WIDTH {
        Variant::Mobile
    } else if width < DESKTOP_MIN_WIDTH {
        Variant::Tablet
    } else {
        Variant::Desktop
    }
}

/// Identifies one scheduled debounce callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Trailing-edge debouncer independent of any event loop.
///
/// `schedule` stores the latest value and hands out a ticket; the caller
/// arranges for `fire(ticket)` to run once `window` has elapsed. Scheduling
/// again before that cancels the earlier ticket, so only the last value of
/// a burst is ever delivered.
#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    generation: u64,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: 0,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Replace any pending value and invalidate earlier tickets
    pub fn schedule(&mut self, value: T) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(value);
        Ticket(self.generation)
    }

    /// Deliver the pending value if `ticket` is still the latest one
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// Drop the pending value; outstanding tickets fire as no-ops
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints() {
        assert_eq!(select_variant(0.0), Variant::Mobile);
        assert_eq!(select_variant(599.0), Variant::Mobile);
        assert_eq!(select_variant(599.9), Variant::Mobile);
        assert_eq!(select_variant(600.0), Variant::Tablet);
        assert_eq!(select_variant(899.0), Variant::Tablet);
        assert_eq!(select_variant(900.0), Variant::Desktop);
        assert_eq!(select_variant(2560.0), Variant::Desktop);
    }

    #[test]
    fn test_burst_delivers_only_last_value() {
        let mut debouncer = Debouncer::new(Duration::from_millis(200));

        let first = debouncer.schedule(500.0);
        let second = debouncer.schedule(700.0);
        let last = debouncer.schedule(1200.0);

        assert_eq!(debouncer.fire(first), None);
        assert_eq!(debouncer.fire(second), None);
        assert_eq!(debouncer.fire(last), Some(1200.0));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_ticket_fires_once() {
        let mut debouncer = Debouncer::new(Duration::from_millis(200));
        let ticket = debouncer.schedule(800.0);

        assert_eq!(debouncer.fire(ticket), Some(800.0));
        assert_eq!(debouncer.fire(ticket), None);
    }

    #[test]
    fn test_separate_bursts_each_fire() {
        let mut debouncer = Debouncer::new(Duration::from_millis(200));

        let ticket = debouncer.schedule(640.0);
        assert_eq!(debouncer.fire(ticket), Some(640.0));

        let ticket = debouncer.schedule(1000.0);
        assert_eq!(debouncer.fire(ticket), Some(1000.0));
    }

    #[test]
    fn test_cancel_discards_pending() {
        let mut debouncer = Debouncer::new(Duration::from_millis(200));
        let ticket = debouncer.schedule(320.0);

        debouncer.cancel();

        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.fire(ticket), None);
        assert_eq!(debouncer.window(), Duration::from_millis(200));
    }
}
