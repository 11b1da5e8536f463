use crate::infra::AppState;
use axum::extract::{Request, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

use loan_screen::config::AuthConfig;
use loan_screen::screening::{
    loan_router, CrimeDataSource, LoanRepository, LoanScreeningService,
};

pub(crate) const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-api-key");

/// Mount the loan endpoints behind the shared-secret check, then the open
/// operational endpoints.
pub(crate) fn with_loan_routes<R, S>(
    service: Arc<LoanScreeningService<R, S>>,
    auth: Arc<AuthConfig>,
) -> axum::Router
where
    R: LoanRepository + 'static,
    S: CrimeDataSource + 'static,
{
    loan_router(service)
        .layer(middleware::from_fn_with_state(auth, require_api_key))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

/// Shared-secret gate. With no key configured every request passes, which is
/// the local-development mode.
pub(crate) async fn require_api_key(
    State(auth): State<Arc<AuthConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = auth.api_key.as_deref() else {
        return next.run(request).await;
    };

    let provided = request
        .headers()
        .get(&API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    if provided == Some(expected) {
        next.run(request).await
    } else {
        let payload = json!({ "error": "missing or invalid api key" });
        (StatusCode::UNAUTHORIZED, Json(payload)).into_response()
    }
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
