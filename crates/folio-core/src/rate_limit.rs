use crate::config::RateLimitConfig;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Verdict returned by [`FixedWindowLimiter::check`]
///
/// The limiter never fails; callers translate `Limited` into an HTTP 429
/// carrying the suggested retry delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed,
    Limited { retry_after: Duration },
}

impl RateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateDecision::Allowed)
    }
}

/// Per-client request count within the current window
#[derive(Debug)]
struct WindowEntry {
    count: u32,
    window_start: Instant,
}

/// Per-client fixed-window request limiter
///
/// Tracks request counts per client address and resets each client's counter
/// once its window elapses. Windows are half-open: a request arriving at
/// exactly `window_start + window` starts a fresh window.
///
/// Entries for clients that stopped sending requests are removed by
/// [`sweep_expired`](Self::sweep_expired), which the server runs on a timer
/// independent of request traffic.
pub struct FixedWindowLimiter {
    config: RateLimitConfig,
    entries: Mutex<HashMap<IpAddr, WindowEntry>>,
}

impl FixedWindowLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Check whether a request from `addr` is within its window budget
    pub fn check(&self, addr: IpAddr) -> RateDecision {
        self.check_at(addr, Instant::now())
    }

    /// Check against an explicit clock reading
    pub fn check_at(&self, addr: IpAddr, now: Instant) -> RateDecision {
        let window = self.config.window();
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        match entries.get_mut(&addr) {
            Some(entry) if now.duration_since(entry.window_start) < window => {
                entry.count += 1;
                if entry.count <= self.config.max_requests {
                    RateDecision::Allowed
                } else {
                    RateDecision::Limited {
                        retry_after: window,
                    }
                }
            }
            _ => {
                // First request from this client, or its window has elapsed
                entries.insert(
                    addr,
                    WindowEntry {
                        count: 1,
                        window_start: now,
                    },
                );
                RateDecision::Allowed
            }
        }
    }

    /// Remove entries whose window has elapsed, bounding memory growth from
    /// abandoned clients. Returns the number of entries removed.
    pub fn sweep_expired(&self) -> usize {
        self.sweep_expired_at(Instant::now())
    }

    /// Sweep against an explicit clock reading
    pub fn sweep_expired_at(&self, now: Instant) -> usize {
        let window = self.config.window();
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let before = entries.len();
        entries.retain(|_, entry| now.duration_since(entry.window_start) < window);
        before - entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn test_config() -> RateLimitConfig {
        RateLimitConfig {
            window_secs: 30,
            max_requests: 3,
            sweep_interval_secs: 60,
        }
    }

    fn addr(last_octet: u8) -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(10, 0, 0, last_octet))
    }

    #[test]
    fn test_first_request_allowed() {
        let limiter = FixedWindowLimiter::new(test_config());
        assert_eq!(limiter.check(addr(1)), RateDecision::Allowed);
    }

    #[test]
    fn test_limit_exceeded_within_window() {
        let limiter = FixedWindowLimiter::new(test_config());
        let base = Instant::now();

        for i in 0..3 {
            let now = base + Duration::from_secs(i);
            assert!(limiter.check_at(addr(1), now).is_allowed());
        }

        let verdict = limiter.check_at(addr(1), base + Duration::from_secs(3));
        assert_eq!(
            verdict,
            RateDecision::Limited {
                retry_after: Duration::from_secs(30)
            }
        );
    }

    #[test]
    fn test_clients_are_tracked_independently() {
        let limiter = FixedWindowLimiter::new(test_config());
        let base = Instant::now();

        for _ in 0..4 {
            limiter.check_at(addr(1), base);
        }

        // A different client is unaffected by the first one's budget
        assert!(limiter.check_at(addr(2), base).is_allowed());
    }

    #[test]
    fn test_window_reset_after_expiry() {
        let limiter = FixedWindowLimiter::new(test_config());
        let base = Instant::now();

        for _ in 0..4 {
            limiter.check_at(addr(1), base);
        }
        assert!(!limiter.check_at(addr(1), base).is_allowed());

        // One second past the window the counter starts over
        let later = base + Duration::from_secs(31);
        assert!(limiter.check_at(addr(1), later).is_allowed());
    }

    #[test]
    fn boundary_request_starts_new_window() {
        // The old window is half-open: a request at exactly
        // window_start + window begins a fresh window.
        let limiter = FixedWindowLimiter::new(test_config());
        let base = Instant::now();

        for _ in 0..3 {
            limiter.check_at(addr(1), base);
        }

        let at_boundary = base + Duration::from_secs(30);
        assert!(limiter.check_at(addr(1), at_boundary).is_allowed());

        // The fresh window has its own budget
        assert!(limiter.check_at(addr(1), at_boundary).is_allowed());
        assert!(limiter.check_at(addr(1), at_boundary).is_allowed());
        assert!(!limiter.check_at(addr(1), at_boundary).is_allowed());
    }

    #[test]
    fn test_sweep_removes_only_expired_entries() {
        let limiter = FixedWindowLimiter::new(test_config());
        let base = Instant::now();

        limiter.check_at(addr(1), base);
        limiter.check_at(addr(2), base + Duration::from_secs(25));

        // At base+31 only the first entry has expired
        let removed = limiter.sweep_expired_at(base + Duration::from_secs(31));
        assert_eq!(removed, 1);

        // The surviving entry still counts requests against its old window
        limiter.check_at(addr(2), base + Duration::from_secs(26));
        limiter.check_at(addr(2), base + Duration::from_secs(27));
        assert!(
            !limiter
                .check_at(addr(2), base + Duration::from_secs(28))
                .is_allowed()
        );
    }

    #[test]
    fn test_sweep_on_empty_limiter() {
        let limiter = FixedWindowLimiter::new(test_config());
        assert_eq!(limiter.sweep_expired(), 0);
    }

    #[test]
    fn test_contact_burst_timeline() {
        // Requests at t=0,1,2 allowed, t=3 rejected with retry_after=30,
        // t=31 allowed again in a new window.
        let limiter = FixedWindowLimiter::new(test_config());
        let base = Instant::now();

        for t in [0, 1, 2] {
            assert!(
                limiter
                    .check_at(addr(1), base + Duration::from_secs(t))
                    .is_allowed()
            );
        }

        match limiter.check_at(addr(1), base + Duration::from_secs(3)) {
            RateDecision::Limited { retry_after } => {
                assert_eq!(retry_after, Duration::from_secs(30));
            }
            RateDecision::Allowed => panic!("fourth request within the window must be limited"),
        }

        assert!(
            limiter
                .check_at(addr(1), base + Duration::from_secs(31))
                .is_allowed()
        );
    }
}
