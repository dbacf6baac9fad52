//! `/messages` handlers.
//!
//! Every handler records exactly one request in the metrics collector with
//! the status it answers with. `POST /messages` also records one creation
//! attempt once the body has been parsed. A body the extractor rejects is
//! answered without touching the counters.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use msgapi_core::error::{MsgApiError, Result};
use msgapi_core::{is_duplicate, validate_message, Message};

use super::dto::{CreateMessageRequest, DeleteAllResponse};
use super::error::{rejection_error, ApiError};
use crate::app_state::AppState;

/// Characters of a duplicate text echoed into the log.
const LOG_PREVIEW_CHARS: usize = 30;

/// Record the outcome of `method` and turn it into a response.
fn finish<T>(
    state: &AppState,
    method: &str,
    ok: StatusCode,
    result: Result<T>,
) -> std::result::Result<(StatusCode, T), ApiError> {
    match result {
        Ok(v) => {
            state.record_request(method, ok.as_u16());
            Ok((ok, v))
        }
        Err(e) => {
            state.record_request(method, e.status_code());
            Err(ApiError(e))
        }
    }
}

pub async fn create_message(
    State(state): State<AppState>,
    body: std::result::Result<Json<CreateMessageRequest>, JsonRejection>,
) -> std::result::Result<(StatusCode, Json<Message>), ApiError> {
    let Json(req) = body.map_err(|r| {
        tracing::warn!(rejection = %r.body_text(), "request body rejected");
        ApiError(rejection_error(&r))
    })?;
    let result = create(&state, &req.text);
    finish(&state, "POST", StatusCode::CREATED, result.map(Json))
}

fn create(state: &AppState, text: &str) -> Result<Message> {
    if let Err(failure) = validate_message(text) {
        state.metrics().record_creation_attempt(false);
        tracing::warn!(reason = failure.reason(), "validation failed");
        return Err(failure.into());
    }

    // Best effort: the snapshot and the insert are separate critical sections.
    let existing = state.store().get_all_texts();
    if is_duplicate(text, &existing) {
        state.metrics().record_creation_attempt(false);
        tracing::warn!(text = %preview(text), "duplicate message detected");
        return Err(MsgApiError::DuplicateMessage);
    }

    let msg = state.store().create(text);
    state.metrics().record_creation_attempt(true);
    tracing::info!(id = %msg.id, "message created");
    Ok(msg)
}

pub async fn list_messages(
    State(state): State<AppState>,
) -> std::result::Result<(StatusCode, Json<Vec<Message>>), ApiError> {
    let messages = state.store().get_all();
    tracing::info!(count = messages.len(), "messages listed");
    finish(&state, "GET", StatusCode::OK, Ok(Json(messages)))
}

pub async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> std::result::Result<(StatusCode, Json<Message>), ApiError> {
    let result = state.store().get_by_id(&id).ok_or_else(|| {
        tracing::warn!(%id, "message not found");
        MsgApiError::MessageNotFound(id)
    });
    finish(&state, "GET", StatusCode::OK, result.map(Json))
}

pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> std::result::Result<StatusCode, ApiError> {
    let result = if state.store().delete(&id) {
        tracing::info!(%id, "message deleted");
        Ok(())
    } else {
        tracing::warn!(%id, "attempted to delete non-existent message");
        Err(MsgApiError::MessageNotFound(id))
    };
    finish(&state, "DELETE", StatusCode::NO_CONTENT, result).map(|(status, ())| status)
}

pub async fn delete_all_messages(
    State(state): State<AppState>,
) -> std::result::Result<(StatusCode, Json<DeleteAllResponse>), ApiError> {
    let count = state.store().delete_all();
    tracing::info!(count, "all messages deleted");
    let body = DeleteAllResponse {
        status: StatusCode::OK.as_u16(),
        message: format!("All {count} message(s) have been deleted"),
        deleted_count: count,
    };
    finish(&state, "DELETE", StatusCode::OK, Ok(Json(body)))
}

fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(LOG_PREVIEW_CHARS).collect();
    if text.chars().count() > LOG_PREVIEW_CHARS {
        out.push_str("...");
    }
    out
}
