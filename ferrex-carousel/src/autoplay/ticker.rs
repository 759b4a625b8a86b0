use std::time::{Duration, Instant};

/// Host-clocked interval timer.
///
/// `start` with the interval already running is a no-op; a different
/// interval restarts the dwell. `stop` can be called any number of times.
#[derive(Debug, Clone, Default)]
pub struct IntervalTicker {
    interval: Option<Duration>,
    next_due: Option<Instant>,
}

impl IntervalTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn interval_ms(&self) -> Option<u64> {
        self.interval.map(|d| d.as_millis() as u64)
    }

    /// Returns whether the ticker (re)started. A zero interval stops it.
    pub fn start(&mut self, interval_ms: u64, now: Instant) -> bool {
        if interval_ms == 0 {
            self.stop();
            return false;
        }
        let interval = Duration::from_millis(interval_ms);
        if self.is_running() && self.interval == Some(interval) {
            return false;
        }
        log::trace!("autoplay ticker every {interval_ms}ms");
        self.interval = Some(interval);
        self.next_due = Some(now + interval);
        true
    }

    pub fn stop(&mut self) {
        self.interval = None;
        self.next_due = None;
    }

    /// Push the next tick a full interval past `now`.
    pub fn restart(&mut self, now: Instant) {
        if let (Some(interval), Some(_)) = (self.interval, self.next_due) {
            self.next_due = Some(now + interval);
        }
    }

    /// At most one tick per call. A host that stalled for several intervals
    /// gets a single tick and a fresh dwell.
    pub fn poll(&mut self, now: Instant) -> bool {
        let (Some(interval), Some(due)) = (self.interval, self.next_due) else {
            return false;
        };
        if now < due {
            return false;
        }
        let next = due + interval;
        self.next_due = Some(if next <= now { now + interval } else { next });
        true
    }
}
