use super::status::UpstreamStatus;
use std::sync::Arc;

/// Nominal maximum weight and the window (in seconds) a recent failure is
/// considered "recent" for (§4.3).
const ERROR_WINDOW_SECONDS: f64 = 60.0;
const RECENCY_CUTOFF_SECONDS: f64 = 3600.0;

/// `w = max(1, age_in_minutes)` clamped to `[1, 60]`; a resolver that
/// never failed (or hasn't failed in the last hour) gets full weight.
/// Weight is always a positive integer, so zero-weight upstreams can't
/// occur by construction (§9).
pub fn weight(status: &UpstreamStatus) -> u32 {
    match status.seconds_since_last_error() {
        None => ERROR_WINDOW_SECONDS as u32,
        Some(age_secs) if age_secs < RECENCY_CUTOFF_SECONDS => {
            let age_minutes = age_secs / 60.0;
            age_minutes.max(1.0) as u32
        }
        Some(_) => ERROR_WINDOW_SECONDS as u32,
    }
}

/// Draws two distinct upstreams by weighted random selection (§4.3, C4).
/// Only defined for `list.len() >= 2` — the racer bypasses this entirely
/// for a single candidate.
pub fn pick_two(list: &[Arc<UpstreamStatus>]) -> (Arc<UpstreamStatus>, Arc<UpstreamStatus>) {
    debug_assert!(list.len() >= 2, "pick_two requires at least two candidates");
    let first = weighted_pick(list, None);
    let second = weighted_pick(list, Some(&first));
    (first, second)
}

/// Cumulative-weight bisection: builds prefix sums, draws a uniform integer
/// in `[0, total)`, and finds the first bucket whose prefix sum exceeds the
/// draw. Exact in integer arithmetic, no floating-point rounding in the
/// selection itself (§4.3, §9).
fn weighted_pick(
    list: &[Arc<UpstreamStatus>],
    exclude: Option<&Arc<UpstreamStatus>>,
) -> Arc<UpstreamStatus> {
    let mut cumulative: Vec<(u64, &Arc<UpstreamStatus>)> = Vec::with_capacity(list.len());
    let mut total: u64 = 0;

    for status in list {
        if let Some(excluded) = exclude {
            if Arc::ptr_eq(excluded, status) {
                continue;
            }
        }
        total += u64::from(weight(status));
        cumulative.push((total, status));
    }

    debug_assert!(total > 0, "weighted_pick requires at least one candidate");
    let draw = fastrand::u64(0..total);
    let idx = cumulative.partition_point(|&(cum, _)| cum <= draw);
    Arc::clone(cumulative[idx].1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockUpstream;
    use std::collections::HashMap;

    fn status(name: &str) -> Arc<UpstreamStatus> {
        Arc::new(UpstreamStatus::new(Arc::new(MockUpstream::always_ok(name))))
    }

    #[test]
    fn pick_two_yields_distinct_identities() {
        let list = vec![status("a"), status("b"), status("c")];
        for _ in 0..200 {
            let (a, b) = pick_two(&list);
            assert!(!a.is_same_upstream(&b));
        }
    }

    #[test]
    fn fully_healthy_list_samples_uniformly() {
        let list = vec![status("a"), status("b")];
        let mut counts: HashMap<*const (), u32> = HashMap::new();
        for _ in 0..20_000 {
            let (first, _) = pick_two(&list);
            *counts.entry(Arc::as_ptr(&first.upstream) as *const ()).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 2);
        for &count in counts.values() {
            let fraction = count as f64 / 20_000.0;
            assert!((0.4..0.6).contains(&fraction), "fraction was {fraction}");
        }
    }

    #[test]
    fn recently_failed_upstream_is_down_weighted() {
        let healthy = status("healthy");
        let failing = status("failing");
        failing.record_failure_seconds_ago(0);

        let list = vec![Arc::clone(&healthy), Arc::clone(&failing)];
        let mut healthy_first = 0u32;
        let trials = 20_000;
        for _ in 0..trials {
            let (first, _) = pick_two(&list);
            if first.is_same_upstream(&healthy) {
                healthy_first += 1;
            }
        }
        // healthy weight 60, failing weight 1 => expected 60/61.
        let fraction = healthy_first as f64 / trials as f64;
        assert!((0.9..1.0).contains(&fraction), "fraction was {fraction}");
    }
}
