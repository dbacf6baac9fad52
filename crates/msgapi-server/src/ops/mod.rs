//! Operational HTTP endpoints.
//!
//! - `/`        : service info (not counted in metrics)
//! - `/health`  : liveness
//! - `/metrics` : usage counters as JSON

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    Json,
};
use chrono::Utc;

use msgapi_core::MsgApiError;

use crate::api::dto::{HealthResponse, MetricsResponse, ServiceInfo};
use crate::api::ApiError;
use crate::app_state::AppState;

pub async fn root(State(state): State<AppState>) -> Json<ServiceInfo> {
    let app = &state.cfg().app;
    let info = ServiceInfo {
        name: app.name.clone(),
        version: app.version.clone(),
        description: app.description.clone(),
        health: "/health",
        metrics: "/metrics",
        messages: "/messages",
    };
    Json(info)
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    state.record_request("GET", StatusCode::OK.as_u16());
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
        version: state.cfg().app.version.clone(),
    })
}

/// Counters are read before this request itself is recorded. Rates come
/// from the same snapshot as the counters they describe.
pub async fn metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
    let snapshot = state.metrics().snapshot();
    let body = MetricsResponse {
        total_messages: state.store().count(),
        success_rate: snapshot.success_rate(),
        creation_success_rate: snapshot.creation_success_rate(),
        metrics: snapshot,
    };
    state.record_request("GET", StatusCode::OK.as_u16());
    Json(body)
}

/// Known paths called with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError(MsgApiError::Http {
        status: StatusCode::METHOD_NOT_ALLOWED.as_u16(),
        message: format!("Method {method} not allowed for {}", uri.path()),
    })
}

/// Unknown routes answer with the uniform error body.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError(MsgApiError::Http {
        status: StatusCode::NOT_FOUND.as_u16(),
        message: format!("No route for {}", uri.path()),
    })
}
