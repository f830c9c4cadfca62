//! Refetch debouncing
//!
//! Dashboard pages refetch their record lists on focus and on navigation,
//! and without a guard a burst of events hammers the backend. The guard is
//! an explicit object with an injected clock so it can be tested without
//! sleeping.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

/// Time source, injectable for tests
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Rate limiter for refetch calls: at most one accepted call per
/// `min_interval`
#[derive(Debug)]
pub struct RefetchDebouncer {
    min_interval: Duration,
    last_fired: Option<DateTime<Utc>>,
}

impl RefetchDebouncer {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_fired: None,
        }
    }

    /// Whether a refetch should go out now. The first call always fires;
    /// subsequent calls fire once `min_interval` has elapsed since the
    /// last accepted one.
    pub fn should_fire<C: Clock>(&mut self, clock: &C) -> bool {
        let now = clock.now();
        match self.last_fired {
            Some(last) if now - last < self.min_interval => {
                debug!(?last, "refetch suppressed");
                false
            }
            _ => {
                self.last_fired = Some(now);
                true
            }
        }
    }
}
