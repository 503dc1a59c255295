//! HTTP control plane: a thin axum adapter over the application layer's
//! control-state use cases. Wire serialization and routing live here so the
//! router core stays transport-agnostic (§1, §6).

pub mod duration;
pub mod error;
pub mod handlers;
pub mod state;

pub use state::{AppState, ControlSurface};

use axum::Router;

/// Builds the full control-plane router: `/blocking/*`, `/dns-resolver/*`,
/// and `/lists/refresh`, all sharing the same generic control-state handlers
/// (§6, §9).
pub fn build_router(state: AppState) -> Router {
    let blocking = handlers::control::routes("/blocking").with_state(state.blocking);
    let dns_resolver = handlers::control::routes("/dns-resolver").with_state(state.dns_resolver);
    let lists = handlers::lists::routes();

    Router::new().merge(blocking).merge(dns_resolver).merge(lists)
}
