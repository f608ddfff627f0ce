//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/timer", get(timer_handler))
        .route("/timer/subject", put(select_subject_handler))
        .route("/timer/start", post(start_handler))
        .route("/timer/pause", post(pause_handler))
        .route("/timer/reset", post(reset_handler))
        .route("/timer/stop", post(stop_handler))
        .route("/timer/subjects", get(timer_subjects_handler))
        .route("/notifications", get(notifications_handler))
        .route("/dashboard", get(dashboard_handler))
        .route("/subjects", get(subjects_handler))
        .route("/groups", get(groups_handler))
        .route("/groups/:id/join", post(join_group_handler))
        .route("/groups/:id/leave", post(leave_group_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
