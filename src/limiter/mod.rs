/// Fixed-window request rate limiting, keyed by client IP
use crate::config::RateLimitConfig;
use std::collections::HashMap;
use std::net::IpAddr;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

/// Outcome of a rate limit check.
#[derive(Debug, Clone, Copy)]
pub enum RateLimitDecision {
    Allowed {
        limit: u32,
        remaining: u32,
    },
    Limited {
        limit: u32,
        /// Time until the caller's window resets
        retry_after: Duration,
    },
}

impl RateLimitDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateLimitDecision::Allowed { .. })
    }
}

#[derive(Debug)]
struct WindowCounter {
    window_start: Instant,
    count: u32,
}

/// Per-IP counters over a fixed trailing window. All increments happen under
/// the write guard, so concurrent requests from one client can never observe
/// the same pre-increment count. Expired windows reset lazily on access and
/// are evicted by [`RateLimiter::sweep`].
pub struct RateLimiter {
    config: RateLimitConfig,
    counters: RwLock<HashMap<IpAddr, WindowCounter>>,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            counters: RwLock::new(HashMap::new()),
        }
    }

    /// Count a request from `ip` against its current window.
    pub async fn check(&self, ip: IpAddr) -> RateLimitDecision {
        self.check_at(ip, Instant::now()).await
    }

    /// Clock-injected variant of [`RateLimiter::check`].
    pub async fn check_at(&self, ip: IpAddr, now: Instant) -> RateLimitDecision {
        let window = self.config.window();
        let limit = self.config.max_requests;

        let mut counters = self.counters.write().await;
        let entry = counters.entry(ip).or_insert(WindowCounter {
            window_start: now,
            count: 0,
        });

        if now.duration_since(entry.window_start) >= window {
            entry.window_start = now;
            entry.count = 0;
        }

        entry.count += 1;

        if entry.count > limit {
            let elapsed = now.duration_since(entry.window_start);
            let retry_after = window.saturating_sub(elapsed);
            debug!(%ip, count = entry.count, limit, "rate limit exceeded");
            RateLimitDecision::Limited { limit, retry_after }
        } else {
            RateLimitDecision::Allowed {
                limit,
                remaining: limit - entry.count,
            }
        }
    }

    /// Drop counters whose window has fully elapsed so the map stays bounded.
    pub async fn sweep(&self) {
        self.sweep_at(Instant::now()).await
    }

    async fn sweep_at(&self, now: Instant) {
        let window = self.config.window();
        let mut counters = self.counters.write().await;
        counters.retain(|_, c| now.duration_since(c.window_start) < window);
    }

    pub fn window(&self) -> Duration {
        self.config.window()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn limiter(max_requests: u32, window_secs: u64) -> RateLimiter {
        RateLimiter::new(RateLimitConfig {
            window_secs,
            max_requests,
        })
    }

    fn ip(last: u8) -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(10, 0, 0, last))
    }

    #[tokio::test]
    async fn allows_up_to_quota_then_rejects() {
        let limiter = limiter(5, 900);
        let now = Instant::now();

        for i in 0..5 {
            let decision = limiter.check_at(ip(1), now).await;
            assert!(decision.is_allowed(), "request {} should pass", i + 1);
        }

        match limiter.check_at(ip(1), now).await {
            RateLimitDecision::Limited { limit, .. } => assert_eq!(limit, 5),
            RateLimitDecision::Allowed { .. } => panic!("sixth request should be limited"),
        }
    }

    #[tokio::test]
    async fn remaining_counts_down() {
        let limiter = limiter(3, 900);
        let now = Instant::now();

        match limiter.check_at(ip(2), now).await {
            RateLimitDecision::Allowed { remaining, .. } => assert_eq!(remaining, 2),
            _ => panic!("should be allowed"),
        }
        match limiter.check_at(ip(2), now).await {
            RateLimitDecision::Allowed { remaining, .. } => assert_eq!(remaining, 1),
            _ => panic!("should be allowed"),
        }
    }

    #[tokio::test]
    async fn separate_windows_never_reject() {
        let limiter = limiter(3, 60);
        let now = Instant::now();

        for _ in 0..3 {
            assert!(limiter.check_at(ip(3), now).await.is_allowed());
        }

        // Same quota again in the next, non-overlapping window.
        let later = now + Duration::from_secs(60);
        for _ in 0..3 {
            assert!(limiter.check_at(ip(3), later).await.is_allowed());
        }
    }

    #[tokio::test]
    async fn clients_are_independent() {
        let limiter = limiter(1, 900);
        let now = Instant::now();

        assert!(limiter.check_at(ip(4), now).await.is_allowed());
        assert!(!limiter.check_at(ip(4), now).await.is_allowed());
        assert!(limiter.check_at(ip(5), now).await.is_allowed());
    }

    #[tokio::test]
    async fn sweep_evicts_expired_windows() {
        let limiter = limiter(10, 60);
        let now = Instant::now();

        limiter.check_at(ip(6), now).await;
        limiter.sweep_at(now + Duration::from_secs(61)).await;

        let counters = limiter.counters.read().await;
        assert!(counters.is_empty());
    }
}
