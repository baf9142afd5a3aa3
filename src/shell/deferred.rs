use tokio::time::{Duration, Instant};

/// Delay between a `clear` submission and the scrollback replacement.
/// Long enough for the echoed `> clear` line to be rendered once.
pub const CLEAR_DELAY: Duration = Duration::from_millis(100);

/// A cancellable schedule for the deferred clear effect.
///
/// The session stays interactive while a clear is pending; re-scheduling
/// overwrites the armed deadline, so only the most recently scheduled
/// clear ever fires.
#[derive(Debug, Default)]
pub struct DeferredClear {
    deadline: Option<Instant>,
}

impl DeferredClear {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) the schedule, `CLEAR_DELAY` from `now`.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + CLEAR_DELAY);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Report whether the armed deadline has passed, disarming it if so.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_after_the_delay() {
        let t0 = Instant::now();
        let mut clear = DeferredClear::new();
        assert!(!clear.fire_due(t0));

        clear.schedule(t0);
        assert!(clear.is_pending());
        assert!(!clear.fire_due(t0));
        assert!(!clear.fire_due(t0 + Duration::from_millis(50)));
        assert!(clear.fire_due(t0 + CLEAR_DELAY));
        assert!(!clear.is_pending());
    }

    #[test]
    fn firing_disarms_the_schedule() {
        let t0 = Instant::now();
        let mut clear = DeferredClear::new();
        clear.schedule(t0);
        assert!(clear.fire_due(t0 + CLEAR_DELAY));
        assert!(!clear.fire_due(t0 + CLEAR_DELAY * 2));
    }

    #[test]
    fn rescheduling_moves_the_deadline_forward() {
        let t0 = Instant::now();
        let mut clear = DeferredClear::new();
        clear.schedule(t0);
        clear.schedule(t0 + Duration::from_millis(80));

        // The first deadline no longer exists.
        assert!(!clear.fire_due(t0 + CLEAR_DELAY));
        assert!(clear.fire_due(t0 + Duration::from_millis(80) + CLEAR_DELAY));
    }

    #[test]
    fn cancel_disarms() {
        let t0 = Instant::now();
        let mut clear = DeferredClear::new();
        clear.schedule(t0);
        clear.cancel();
        assert!(!clear.is_pending());
        assert!(!clear.fire_due(t0 + CLEAR_DELAY * 10));
    }
}
