use std::sync::Arc;

/// Coarse classification of an upstream's reply (§3). The full DNS
/// response-code space is the wire codec's concern (out of scope, §1);
/// this only carries what the router and health probe need to decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Resolved,
    NxDomain,
    ServerFailure,
    Other,
}

#[derive(Debug, Clone)]
pub struct Response {
    pub kind: ResponseKind,
    pub message: Arc<[u8]>,
}

impl Response {
    pub fn new(kind: ResponseKind, message: Arc<[u8]>) -> Self {
        Self { kind, message }
    }

    /// Required by the canary probe (§4.6 step 2): `resolutionType == RESOLVED`.
    pub fn is_resolved(&self) -> bool {
        self.kind == ResponseKind::Resolved
    }
}
