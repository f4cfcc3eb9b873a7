//! Per-requester sliding-window rate limiter.
//!
//! One trailing window of request timestamps per requester, pruned lazily on
//! every read. The whole map sits behind a single coarse mutex: store
//! operations are cheap next to classifier work, and the lock guarantees that
//! accounting order matches invocation order for any one requester.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use osgate_core::model::{Privilege, RequesterId};

/// Outcome of one accounting attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed,
    /// Caller must wait this long before the oldest slot frees up.
    Throttled { wait: Duration },
}

pub struct RateLimiter {
    max_requests: u32,
    period: Duration,
    windows: Mutex<HashMap<RequesterId, Vec<Instant>>>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, period: Duration) -> Self {
        Self {
            max_requests: max_requests.max(1),
            period,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Check the window and, when allowed, record `now` — atomically.
    ///
    /// Admins are exempt and never populate a window. When the window is full
    /// the call records nothing and reports how long until the oldest
    /// timestamp ages out.
    pub fn check_and_record(
        &self,
        id: RequesterId,
        privilege: Privilege,
        now: Instant,
    ) -> RateDecision {
        if privilege.is_admin() {
            return RateDecision::Allowed;
        }

        // Poisoned mutex means logic bug; deny instead of panicking.
        let Ok(mut windows) = self.windows.lock() else {
            return RateDecision::Throttled { wait: self.period };
        };

        let window = windows.entry(id).or_default();
        Self::prune(window, self.period, now);

        if window.len() >= self.max_requests as usize {
            // Append order makes the first element the oldest survivor.
            let wait = match window.first() {
                Some(oldest) => self.period.saturating_sub(now.saturating_duration_since(*oldest)),
                None => Duration::ZERO,
            };
            return RateDecision::Throttled { wait };
        }

        window.push(now);
        RateDecision::Allowed
    }

    /// Remaining quota without consuming a slot. `None` is the admin sentinel
    /// (unlimited).
    pub fn remaining(&self, id: RequesterId, privilege: Privilege, now: Instant) -> Option<u32> {
        if privilege.is_admin() {
            return None;
        }
        let Ok(mut windows) = self.windows.lock() else {
            return Some(0);
        };
        let window = windows.entry(id).or_default();
        Self::prune(window, self.period, now);
        Some(self.max_requests.saturating_sub(window.len() as u32))
    }

    /// Drop a requester's window entirely (admin operation).
    pub fn reset(&self, id: RequesterId) {
        if let Ok(mut windows) = self.windows.lock() {
            windows.remove(&id);
        }
    }

    fn prune(window: &mut Vec<Instant>, period: Duration, now: Instant) {
        window.retain(|t| now.saturating_duration_since(*t) < period);
    }
}
