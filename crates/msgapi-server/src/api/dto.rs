//! Request and response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use msgapi_core::MetricsSnapshot;

#[derive(Debug, Deserialize)]
pub struct CreateMessageRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteAllResponse {
    pub status: u16,
    pub message: String,
    pub deleted_count: usize,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub total_messages: usize,
    #[serde(flatten)]
    pub metrics: MetricsSnapshot,
    pub success_rate: f64,
    pub creation_success_rate: f64,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub health: &'static str,
    pub metrics: &'static str,
    pub messages: &'static str,
}

/// Uniform error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub code: &'static str,
    pub message: String,
    pub details: Option<Value>,
}
