use crate::duration::parse_disable_duration;
use crate::error::ApiError;
use crate::state::ControlSurface;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use axum::Router;
use rdns_router_domain::{ControlStatusSnapshot, DisableGroups};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct DisableQuery {
    duration: Option<String>,
    groups: Option<String>,
}

/// The three control-surface endpoints under `prefix` (§6). Used once for
/// `/blocking` and once for `/dns-resolver` — identical shape, different
/// `ControlSurface` instance behind it (§9).
pub fn routes(prefix: &str) -> Router<ControlSurface> {
    Router::new()
        .route(&format!("{prefix}/enable"), get(enable))
        .route(&format!("{prefix}/disable"), get(disable))
        .route(&format!("{prefix}/status"), get(status))
}

async fn enable(State(surface): State<ControlSurface>) -> impl IntoResponse {
    surface.enable.execute().await;
    Json(json!({}))
}

async fn disable(
    State(surface): State<ControlSurface>,
    Query(query): Query<DisableQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let duration = match &query.duration {
        Some(raw) => parse_disable_duration(raw)?,
        None => Duration::ZERO,
    };
    let groups = match &query.groups {
        Some(raw) if !raw.trim().is_empty() => {
            DisableGroups::Only(raw.split(',').map(|g| g.trim().into()).collect())
        }
        _ => DisableGroups::All,
    };

    surface.disable.execute(duration, groups).await?;
    Ok(Json(json!({})))
}

async fn status(State(surface): State<ControlSurface>) -> Json<ControlStatusSnapshot> {
    Json(surface.status.execute().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use rdns_router_application::{
        DisableControlUseCase, EnableControlUseCase, StatusControlUseCase,
    };
    use rdns_router_domain::RouterError;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct FakeControl;

    #[async_trait::async_trait]
    impl rdns_router_application::ControlStatePort for FakeControl {
        async fn enable(&self) {}
        async fn disable(&self, _: Duration, groups: DisableGroups) -> Result<(), RouterError> {
            match groups {
                DisableGroups::Only(g) if g.iter().any(|name| name.as_ref() == "nope") => {
                    Err(RouterError::UnknownGroup("nope".to_string()))
                }
                _ => Ok(()),
            }
        }
        async fn status(&self) -> ControlStatusSnapshot {
            ControlStatusSnapshot {
                enabled: true,
                disabled_groups: Vec::new(),
                auto_enable_in_sec: 0,
            }
        }
    }

    fn surface() -> ControlSurface {
        let control: Arc<dyn rdns_router_application::ControlStatePort> = Arc::new(FakeControl);
        ControlSurface {
            enable: Arc::new(EnableControlUseCase::new(control.clone())),
            disable: Arc::new(DisableControlUseCase::new(control.clone())),
            status: Arc::new(StatusControlUseCase::new(control)),
        }
    }

    #[tokio::test]
    async fn status_returns_200_with_json_body() {
        let app = routes("/blocking").with_state(surface());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/blocking/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: ControlStatusSnapshot = serde_json::from_slice(&body).unwrap();
        assert!(json.enabled);
    }

    #[tokio::test]
    async fn disable_with_unknown_group_returns_400() {
        let app = routes("/blocking").with_state(surface());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/blocking/disable?groups=nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn disable_with_malformed_duration_returns_400() {
        let app = routes("/blocking").with_state(surface());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/blocking/disable?duration=notaduration")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
    }
}
