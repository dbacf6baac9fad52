//! HTTP mapping for `MsgApiError`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use msgapi_core::MsgApiError;

use super::dto::ErrorBody;

/// Handler error; renders as the uniform JSON error body.
#[derive(Debug)]
pub struct ApiError(pub MsgApiError);

impl From<MsgApiError> for ApiError {
    fn from(e: MsgApiError) -> Self {
        Self(e)
    }
}

/// Framework-level body rejection (malformed JSON, wrong content type, ...).
pub fn rejection_error(r: &JsonRejection) -> MsgApiError {
    MsgApiError::Http {
        status: r.status().as_u16(),
        message: r.body_text(),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorBody {
            status: status.as_u16(),
            code: self.0.client_code().as_str(),
            message: self.0.to_string(),
            details: None,
        };
        (status, Json(body)).into_response()
    }
}
