use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/log/add", post(handlers::log_add))
        .route("/log/remove", post(handlers::log_remove))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/sessions", get(handlers::get_sessions))
        .route("/api/ripples", get(handlers::get_ripples))
        .route("/api/session", post(handlers::log_session))
        .route("/api/undo", post(handlers::undo))
        .route("/api/reset/request", post(handlers::reset_request))
        .route("/api/reset/confirm", post(handlers::reset_confirm))
        .route("/api/reset/cancel", post(handlers::reset_cancel))
        .with_state(state)
}
