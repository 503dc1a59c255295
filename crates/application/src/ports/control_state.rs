use async_trait::async_trait;
use rdns_router_domain::{ControlStatusSnapshot, DisableGroups, RouterError};
use std::time::Duration;

/// The enable/disable state machine (§4.5, C6). One implementation backs
/// both control surfaces (`blocking` and the client-DNS-resolver override,
/// §9 "control surfaces duplicated") — callers hold one `Arc<dyn
/// ControlStatePort>` per surface rather than the port knowing which
/// surface it is.
#[async_trait]
pub trait ControlStatePort: Send + Sync {
    async fn enable(&self);

    /// `duration == Duration::ZERO` means an indefinite disable (§3).
    async fn disable(&self, duration: Duration, groups: DisableGroups) -> Result<(), RouterError>;

    async fn status(&self) -> ControlStatusSnapshot;
}
