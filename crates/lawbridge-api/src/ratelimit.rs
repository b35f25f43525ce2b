//! Keyed fixed-window rate limiting.
//!
//! One counter per client key, reset a full window after the first request
//! of the window. Records expire lazily: a stale record is replaced the
//! next time its key shows up, never swept proactively.
//!
//! This holds within a single process only. Multi-instance deployments
//! would need a shared counter store behind the same [`RateLimiter`] trait.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use lawbridge_core::RateLimiter;

/// Default request budget per window.
pub const DEFAULT_MAX_REQUESTS: u32 = 20;

/// Default window length in seconds.
pub const DEFAULT_WINDOW_SECS: u64 = 60;

/// Fixed-window policy. Configuration, not hard-coded constants.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitPolicy {
    pub max_requests: u32,
    pub window: Duration,
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_MAX_REQUESTS,
            window: Duration::from_secs(DEFAULT_WINDOW_SECS),
        }
    }
}

impl RateLimitPolicy {
    /// Create from environment variables (`RATE_LIMIT_MAX`,
    /// `RATE_LIMIT_WINDOW_SECS`).
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_requests: std::env::var("RATE_LIMIT_MAX")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_requests),
            window: std::env::var("RATE_LIMIT_WINDOW_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.window),
        }
    }
}

struct WindowRecord {
    count: u32,
    window_reset: Instant,
}

/// In-memory keyed fixed-window limiter.
pub struct FixedWindowLimiter {
    policy: RateLimitPolicy,
    records: Mutex<HashMap<String, WindowRecord>>,
}

impl FixedWindowLimiter {
    pub fn new(policy: RateLimitPolicy) -> Self {
        Self {
            policy,
            records: Mutex::new(HashMap::new()),
        }
    }

    pub fn policy(&self) -> RateLimitPolicy {
        self.policy
    }

    /// Admission decision at an explicit instant. The mutex makes the
    /// read-compare-increment atomic per key, so concurrent requests from
    /// one client cannot undercount.
    fn admit_at(&self, key: &str, now: Instant) -> bool {
        let mut records = self.records.lock().unwrap();

        match records.get_mut(key) {
            Some(record) if now <= record.window_reset => {
                if record.count >= self.policy.max_requests {
                    return false;
                }
                record.count += 1;
                true
            }
            _ => {
                // New key, or the previous window lapsed.
                records.insert(
                    key.to_string(),
                    WindowRecord {
                        count: 1,
                        window_reset: now + self.policy.window,
                    },
                );
                true
            }
        }
    }
}

impl RateLimiter for FixedWindowLimiter {
    fn admit(&self, key: &str) -> bool {
        self.admit_at(key, Instant::now())
    }
}
