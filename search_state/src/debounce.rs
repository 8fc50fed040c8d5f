//! Single-slot debouncer driven by caller-supplied time.
//!
//! Time is a `Duration` since any fixed epoch the caller likes: the browser
//! passes `performance.now()`, tests pass a virtual clock.

use std::time::Duration;

#[derive(Debug)]
struct Pending<T> {
    due: Duration,
    value: T,
}

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replaces any pending value and restarts the quiet period.
    /// Returns the time at which the value becomes due.
    pub fn submit(&mut self, value: T, now: Duration) -> Duration {
        let due = now + self.delay;
        if self.pending.is_some() {
            tracing::trace!("debounce: superseding pending value");
        }
        self.pending = Some(Pending { due, value });
        due
    }

    /// Takes the pending value once its quiet period has elapsed.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        match &self.pending {
            Some(pending) if pending.due <= now => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn due_at(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.due)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn value_is_held_until_quiet_period_ends() {
        let mut debouncer = Debouncer::new(ms(300));
        assert_eq!(debouncer.submit("a", ms(0)), ms(300));
        assert_eq!(debouncer.poll(ms(299)), None);
        assert_eq!(debouncer.poll(ms(300)), Some("a"));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn rapid_submissions_coalesce_to_last_value() {
        let mut debouncer = Debouncer::new(ms(300));
        debouncer.submit("a", ms(0));
        debouncer.submit("ab", ms(100));
        debouncer.submit("abc", ms(200));
        // the first submission's deadline passes without anything firing
        assert_eq!(debouncer.poll(ms(300)), None);
        assert_eq!(debouncer.poll(ms(400)), None);
        assert_eq!(debouncer.poll(ms(500)), Some("abc"));
        assert_eq!(debouncer.poll(ms(900)), None);
    }

    #[test]
    fn cancel_discards_pending_value() {
        let mut debouncer = Debouncer::new(ms(50));
        debouncer.submit(1, ms(0));
        assert_eq!(debouncer.cancel(), Some(1));
        assert_eq!(debouncer.poll(ms(1_000)), None);
        assert_eq!(debouncer.due_at(), None);
    }
}
