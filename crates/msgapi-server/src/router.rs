//! Axum router wiring.
//!
//! Unknown paths and unsupported methods both answer with the uniform error
//! body and are not counted in metrics.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{api::messages, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ops::root).fallback(ops::method_not_allowed))
        .route("/health", get(ops::health).fallback(ops::method_not_allowed))
        .route("/metrics", get(ops::metrics).fallback(ops::method_not_allowed))
        .route(
            "/messages",
            post(messages::create_message)
                .get(messages::list_messages)
                .delete(messages::delete_all_messages)
                .fallback(ops::method_not_allowed),
        )
        .route(
            "/messages/:id",
            get(messages::get_message)
                .delete(messages::delete_message)
                .fallback(ops::method_not_allowed),
        )
        .fallback(ops::not_found)
        .with_state(state)
}
