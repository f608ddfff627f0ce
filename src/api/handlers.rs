//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};

use crate::{
    catalog::{self, Dashboard, GroupListing, Month, SubjectOverview},
    error::{CatalogError, TimerError},
    state::{AppState, Notification, SessionSnapshot},
};
use super::responses::{
    ActionResponse, ErrorResponse, GroupQuery, HealthResponse, MonthQuery, StatusResponse,
    SubjectRequest, TimerResponse,
};

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn timer_error(action: &str, e: TimerError) -> ApiError {
    let status = match e {
        TimerError::SubjectRequired => {
            warn!("Timer {} rejected: {}", action, e);
            StatusCode::UNPROCESSABLE_ENTITY
        }
        TimerError::LockPoisoned(_) => {
            error!("Timer {} failed: {}", action, e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ErrorResponse::new(e.to_string())))
}

fn catalog_error(e: CatalogError) -> ApiError {
    let status = match e {
        CatalogError::GroupNotFound(_) => StatusCode::NOT_FOUND,
        CatalogError::GroupFull(_)
        | CatalogError::AlreadyMember(_)
        | CatalogError::NotAMember(_) => StatusCode::CONFLICT,
        CatalogError::UnknownMonth(_) => StatusCode::BAD_REQUEST,
    };
    warn!("Catalog request rejected: {}", e);
    (status, Json(ErrorResponse::new(e.to_string())))
}

/// Handle GET /timer - Current session snapshot
pub async fn timer_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    state
        .snapshot()
        .map(Json)
        .map_err(|e| timer_error("read", e))
}

/// Handle PUT /timer/subject - Select or clear the subject
pub async fn select_subject_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SubjectRequest>,
) -> Result<Json<TimerResponse>, ApiError> {
    let timer = state
        .select_subject(&request.subject)
        .map_err(|e| timer_error("subject", e))?;

    let message = match &timer.subject {
        Some(subject) => format!("Subject set to {}", subject),
        None => "Subject cleared".to_string(),
    };
    Ok(Json(TimerResponse::ok(message, timer)))
}

/// Handle POST /timer/start - Start or resume the countdown
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TimerResponse>, ApiError> {
    let timer = state.start().map_err(|e| timer_error("start", e))?;
    info!("Start endpoint called - {}s remaining", timer.remaining_seconds);
    Ok(Json(TimerResponse::ok("Session running".to_string(), timer)))
}

/// Handle POST /timer/pause - Pause the countdown
pub async fn pause_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TimerResponse>, ApiError> {
    let timer = state.pause().map_err(|e| timer_error("pause", e))?;
    Ok(Json(TimerResponse::ok("Session paused".to_string(), timer)))
}

/// Handle POST /timer/reset - Reset to a full clock
pub async fn reset_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TimerResponse>, ApiError> {
    let timer = state.reset().map_err(|e| timer_error("reset", e))?;
    Ok(Json(TimerResponse::ok("Session reset".to_string(), timer)))
}

/// Handle POST /timer/stop - End the session early
pub async fn stop_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TimerResponse>, ApiError> {
    let (outcome, timer) = state.stop().map_err(|e| timer_error("stop", e))?;

    let message = if outcome.was_recorded() {
        format!("{} minutes recorded", outcome.recorded_seconds / 60)
    } else {
        "Session ended without recording".to_string()
    };
    Ok(Json(
        TimerResponse::ok(message, timer).with_recorded(outcome.recorded_seconds),
    ))
}

/// Handle GET /timer/subjects - Subjects offered by the picker
pub async fn timer_subjects_handler() -> Json<Vec<String>> {
    Json(catalog::timer_subjects())
}

/// Handle GET /notifications - Recently emitted notifications
pub async fn notifications_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Notification>> {
    Json(state.recent_notifications())
}

/// Handle GET /dashboard - Dashboard figures
pub async fn dashboard_handler() -> Json<Dashboard> {
    Json(catalog::dashboard())
}

/// Handle GET /subjects - Subject manager overview
pub async fn subjects_handler(
    Query(query): Query<MonthQuery>,
) -> Result<Json<SubjectOverview>, ApiError> {
    let month = match query.month.as_deref() {
        Some(value) => Month::parse(value).map_err(catalog_error)?,
        None => Month::default(),
    };
    Ok(Json(catalog::subject_overview(month)))
}

/// Handle GET /groups - Study groups, filtered by `q`
pub async fn groups_handler(Query(query): Query<GroupQuery>) -> Json<GroupListing> {
    Json(catalog::list_groups(&query.q))
}

/// Handle POST /groups/:id/join - Request to join a group
pub async fn join_group_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<ActionResponse>, ApiError> {
    let notification = catalog::join_group(id).map_err(catalog_error)?;
    info!("Join requested for group {}", id);
    state.notify(notification.clone());
    Ok(Json(ActionResponse::ok(notification)))
}

/// Handle POST /groups/:id/leave - Leave a group
pub async fn leave_group_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<ActionResponse>, ApiError> {
    let notification = catalog::leave_group(id).map_err(catalog_error)?;
    info!("Left group {}", id);
    state.notify(notification.clone());
    Ok(Json(ActionResponse::ok(notification)))
}

/// Handle GET /status - Return current session and server status
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, ApiError> {
    let timer = state.snapshot().map_err(|e| timer_error("status", e))?;
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        timer,
        ticking: state.is_ticking(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
