use async_trait::async_trait;
use rdns_router_application::ControlStatePort;
use rdns_router_domain::{ControlStatusSnapshot, DisableGroups, RouterError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::info;

struct Inner {
    enabled: bool,
    disabled_groups: Vec<Arc<str>>,
    disable_end: Option<Instant>,
    timer: Option<CancellationToken>,
}

/// Enable/disable state machine gating per-group upstream overrides (§4.5,
/// C6). Cheaply `Clone`able — clones share the same lock, which is what lets
/// the auto-re-enable timer call back into `enable()` from its own task.
#[derive(Clone)]
pub struct ControlState {
    inner: Arc<RwLock<Inner>>,
    /// Sorted, excludes `"default"` (§4.5 step 2).
    all_groups: Vec<Arc<str>>,
}

impl ControlState {
    pub fn new(mut all_groups: Vec<Arc<str>>) -> Self {
        all_groups.sort();
        Self {
            inner: Arc::new(RwLock::new(Inner {
                enabled: true,
                disabled_groups: Vec::new(),
                disable_end: None,
                timer: None,
            })),
            all_groups,
        }
    }
}

#[async_trait]
impl ControlStatePort for ControlState {
    async fn enable(&self) {
        let mut inner = self.inner.write().await;
        if let Some(token) = inner.timer.take() {
            token.cancel();
        }
        inner.enabled = true;
        inner.disabled_groups.clear();
        inner.disable_end = None;
    }

    async fn disable(&self, duration: Duration, groups: DisableGroups) -> Result<(), RouterError> {
        let mut inner = self.inner.write().await;

        // Validate before cancelling the previous timer, so an unknown group
        // leaves the existing disable state untouched (§4.5 step 4, §9).
        let resolved_groups = match groups {
            DisableGroups::All => self.all_groups.clone(),
            DisableGroups::Only(requested) => {
                for g in &requested {
                    if !self.all_groups.iter().any(|allowed| allowed == g) {
                        return Err(RouterError::UnknownGroup(g.to_string()));
                    }
                }
                requested
            }
        };

        if let Some(token) = inner.timer.take() {
            token.cancel();
        }

        inner.disabled_groups = resolved_groups;
        inner.enabled = false;

        if duration.is_zero() {
            inner.disable_end = None;
            info!(groups = ?inner.disabled_groups, "disable blocking with specific dns for group(s)");
        } else {
            inner.disable_end = Some(Instant::now() + duration);

            let token = CancellationToken::new();
            inner.timer = Some(token.clone());
            let state = self.clone();
            tokio::spawn(async move {
                tokio::select! {
                    _ = token.cancelled() => {}
                    _ = tokio::time::sleep(duration) => {
                        state.enable().await;
                        info!("blocking with specific dns enabled again");
                    }
                }
            });

            info!(?duration, groups = ?inner.disabled_groups, "disable blocking with specific dns for duration");
        }

        Ok(())
    }

    async fn status(&self) -> ControlStatusSnapshot {
        let inner = self.inner.read().await;
        let auto_enable_in_sec = if !inner.enabled {
            match inner.disable_end {
                Some(end) if end > Instant::now() => (end - Instant::now()).as_secs_f64().ceil() as u64,
                _ => 0,
            }
        } else {
            0
        };

        ControlStatusSnapshot {
            enabled: inner.enabled,
            disabled_groups: inner.disabled_groups.clone(),
            auto_enable_in_sec,
        }
    }
}
