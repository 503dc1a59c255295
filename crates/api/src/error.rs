use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use rdns_router_domain::RouterError;
use serde_json::json;

/// Maps core error kinds onto HTTP status codes (§7). `UnknownGroup` and
/// `MalformedDuration` are caller mistakes (400); anything else reaching the
/// control plane is ours.
pub struct ApiError(RouterError);

impl From<RouterError> for ApiError {
    fn from(err: RouterError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            RouterError::UnknownGroup(_) | RouterError::MalformedDuration(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
