use rdns_router_application::UpstreamResolver;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Pairs an upstream handle with a monotonically-updated "last error"
/// timestamp (§3, §4.1, C2). The write is a single atomic store; reads
/// tolerate staleness because they only feed a probability weight, never
/// correctness (§5).
pub struct UpstreamStatus {
    pub upstream: Arc<dyn UpstreamResolver>,
    /// Milliseconds since the Unix epoch. `0` means "never failed" (§3:
    /// initialized to the epoch).
    last_error_millis: AtomicU64,
}

impl UpstreamStatus {
    pub fn new(upstream: Arc<dyn UpstreamResolver>) -> Self {
        Self {
            upstream,
            last_error_millis: AtomicU64::new(0),
        }
    }

    /// Seeds the status as already-failed, "now" (§11: probe-failure
    /// handling — down-weight instead of silently dropping an upstream).
    pub fn new_marked_failed(upstream: Arc<dyn UpstreamResolver>) -> Self {
        let status = Self::new(upstream);
        status.record_failure();
        status
    }

    pub fn record_failure(&self) {
        self.last_error_millis.store(now_millis(), Ordering::Relaxed);
    }

    #[cfg(test)]
    pub fn record_failure_seconds_ago(&self, seconds_ago: u64) {
        let ts = now_millis().saturating_sub(seconds_ago * 1000);
        self.last_error_millis.store(ts.max(1), Ordering::Relaxed);
    }

    /// `None` means "never failed" — treated by the picker as fully healthy.
    pub fn seconds_since_last_error(&self) -> Option<f64> {
        let t = self.last_error_millis.load(Ordering::Relaxed);
        if t == 0 {
            None
        } else {
            Some(now_millis().saturating_sub(t) as f64 / 1000.0)
        }
    }

    pub fn is_same_upstream(&self, other: &UpstreamStatus) -> bool {
        Arc::ptr_eq(&self.upstream, &other.upstream)
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
