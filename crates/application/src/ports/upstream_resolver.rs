use async_trait::async_trait;
use rdns_router_domain::{Request, Response, RouterError};
use std::sync::Arc;

/// The consumed "Upstream Resolver interface" (§6, C1). Transport concerns
/// (UDP/TCP/DoT/DoH, the wire codec) live behind this trait and are out of
/// scope for this crate (§1); the infrastructure crate supplies concrete
/// implementations and tests supply mocks.
#[async_trait]
pub trait UpstreamResolver: Send + Sync {
    async fn resolve(&self, request: &Request) -> Result<Response, RouterError>;

    /// Stringer for logs (§2, C1).
    fn display(&self) -> Arc<str>;
}
