use crate::errors::AppError;
use crate::format::format_duration;
use crate::models::{
    LogRequest, LogResponse, RipplesResponse, SessionsResponse, SummaryResponse,
};
use crate::state::AppState;
use crate::storage::persist_state;
use crate::tracker::Tracker;
use crate::ui::render_index;
use axum::{
    Json,
    extract::State,
    response::{Html, Redirect},
};

// Delta used by the no-script form buttons on the index page.
const FALLBACK_SESSION_MINUTES: i64 = 10;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let tracker = state.tracker.lock().await;
    Html(render_index(tracker.total_minutes()))
}

pub async fn get_summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>, AppError> {
    let tracker = state.tracker.lock().await;
    Ok(Json(to_summary(&tracker)))
}

pub async fn get_sessions(
    State(state): State<AppState>,
) -> Result<Json<SessionsResponse>, AppError> {
    let tracker = state.tracker.lock().await;
    Ok(Json(SessionsResponse {
        sessions: tracker.sessions().to_vec(),
    }))
}

pub async fn get_ripples(State(state): State<AppState>) -> Result<Json<RipplesResponse>, AppError> {
    let tracker = state.tracker.lock().await;
    Ok(Json(RipplesResponse {
        ripples: tracker.ripples().to_vec(),
    }))
}

pub async fn log_session(
    State(state): State<AppState>,
    Json(payload): Json<LogRequest>,
) -> Result<Json<LogResponse>, AppError> {
    let response = apply_delta(&state, payload.minutes).await?;
    Ok(Json(response))
}

pub async fn log_add(State(state): State<AppState>) -> Result<Redirect, AppError> {
    apply_delta(&state, FALLBACK_SESSION_MINUTES).await?;
    Ok(Redirect::to("/"))
}

pub async fn log_remove(State(state): State<AppState>) -> Result<Redirect, AppError> {
    apply_delta(&state, -FALLBACK_SESSION_MINUTES).await?;
    Ok(Redirect::to("/"))
}

pub async fn undo(State(state): State<AppState>) -> Result<Json<SummaryResponse>, AppError> {
    let mut tracker = state.tracker.lock().await;
    if tracker.undo() {
        persist_state(&state.data_path, &tracker.to_stored()).await?;
    }
    Ok(Json(to_summary(&tracker)))
}

pub async fn reset_request(
    State(state): State<AppState>,
) -> Result<Json<SummaryResponse>, AppError> {
    let mut tracker = state.tracker.lock().await;
    tracker.request_reset();
    Ok(Json(to_summary(&tracker)))
}

pub async fn reset_confirm(
    State(state): State<AppState>,
) -> Result<Json<SummaryResponse>, AppError> {
    let mut tracker = state.tracker.lock().await;
    tracker.confirm_reset();
    persist_state(&state.data_path, &tracker.to_stored()).await?;
    Ok(Json(to_summary(&tracker)))
}

pub async fn reset_cancel(
    State(state): State<AppState>,
) -> Result<Json<SummaryResponse>, AppError> {
    let mut tracker = state.tracker.lock().await;
    tracker.cancel_reset();
    Ok(Json(to_summary(&tracker)))
}

async fn apply_delta(state: &AppState, minutes: i64) -> Result<LogResponse, AppError> {
    let mut tracker = state.tracker.lock().await;
    let outcome = tracker.apply_delta(minutes);
    persist_state(&state.data_path, &tracker.to_stored()).await?;

    state.schedule_undo_expiry(outcome.undo_token);
    if let Some(ripple) = &outcome.ripple {
        state.schedule_ripple_expiry(ripple.id);
    }

    Ok(LogResponse {
        applied_delta: outcome.applied,
        ripple: outcome.ripple,
        summary: to_summary(&tracker),
    })
}

fn to_summary(tracker: &Tracker) -> SummaryResponse {
    let formatted = format_duration(tracker.total_minutes());
    SummaryResponse {
        total_minutes: tracker.total_minutes(),
        major: formatted.major,
        label: formatted.label,
        undo_available: tracker.undo_context().is_some(),
        last_delta: tracker
            .undo_context()
            .map(|context| context.delta)
            .unwrap_or(0),
        reset_pending: tracker.reset_pending(),
    }
}
