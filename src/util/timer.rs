//! Single-owner repeating timer that paces the momentum loop.

/// A repeating deadline driven by the host's frame loop.
///
/// Nothing runs in the background: the owner polls with the current time
/// and the timer reports each period that has elapsed, one at a time, so
/// a late frame catches up on every missed tick in order. Dropping the
/// timer cancels it, which makes a single `Option<RepeatingTimer>` field
/// an owner that can never hold two live schedules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatingTimer {
    period_ms: u64,
    next_due_ms: u64,
}

impl RepeatingTimer {
    /// Schedule the first tick one period after `now_ms`.
    ///
    /// A zero period is treated as one millisecond.
    #[must_use]
    pub fn start(now_ms: u64, period_ms: u64) -> Self {
        let period_ms = period_ms.max(1);
        Self {
            period_ms,
            next_due_ms: now_ms.saturating_add(period_ms),
        }
    }

    /// Consume one due tick, if any. Call in a loop to drain a backlog.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if now_ms < self.next_due_ms {
            return false;
        }
        self.next_due_ms = self.next_due_ms.saturating_add(self.period_ms);
        true
    }

    /// Time of the next tick.
    #[must_use]
    pub fn next_due_ms(&self) -> u64 {
        self.next_due_ms
    }

    /// Interval between ticks.
    #[must_use]
    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_waits_one_period() {
        let mut timer = RepeatingTimer::start(1000, 50);
        assert!(!timer.poll(1049));
        assert!(timer.poll(1050));
        assert!(!timer.poll(1050));
        assert_eq!(timer.next_due_ms(), 1100);
    }

    #[test]
    fn late_poll_drains_backlog_in_order() {
        let mut timer = RepeatingTimer::start(0, 50);
        let mut fired = 0;
        while timer.poll(175) {
            fired += 1;
        }
        assert_eq!(fired, 3);
        assert_eq!(timer.next_due_ms(), 200);
    }

    #[test]
    fn zero_period_is_clamped() {
        let timer = RepeatingTimer::start(10, 0);
        assert_eq!(timer.period_ms(), 1);
        assert_eq!(timer.next_due_ms(), 11);
    }
}
