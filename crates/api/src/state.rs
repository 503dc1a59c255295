use rdns_router_application::{DisableControlUseCase, EnableControlUseCase, StatusControlUseCase};
use std::sync::Arc;

/// One control surface's three use cases. The same shape backs both
/// `/blocking/*` and `/dns-resolver/*` — only the `ControlState` instance
/// behind it differs (§9).
#[derive(Clone)]
pub struct ControlSurface {
    pub enable: Arc<EnableControlUseCase>,
    pub disable: Arc<DisableControlUseCase>,
    pub status: Arc<StatusControlUseCase>,
}

#[derive(Clone)]
pub struct AppState {
    pub blocking: ControlSurface,
    pub dns_resolver: ControlSurface,
}
