use axum::response::Json;
use axum::routing::post;
use axum::Router;
use serde_json::{json, Value};
use tracing::debug;

/// Fire-and-forget trigger to an external list-refresh collaborator (§6,
/// §11); there is no such collaborator in this core, so this just
/// acknowledges the request.
pub fn routes() -> Router {
    Router::new().route("/lists/refresh", post(refresh))
}

async fn refresh() -> Json<Value> {
    debug!("lists refresh requested");
    Json(json!({}))
}
