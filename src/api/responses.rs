//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{Notification, SessionSnapshot};

/// API response structure for timer action endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: SessionSnapshot,
    /// Seconds added to today's total by a stop
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_seconds: Option<u64>,
}

impl TimerResponse {
    /// Create a new timer response
    pub fn new(status: &str, message: String, timer: SessionSnapshot) -> Self {
        Self {
            status: status.to_string(),
            message,
            timestamp: Utc::now(),
            timer,
            recorded_seconds: None,
        }
    }

    /// Create a successful response
    pub fn ok(message: String, timer: SessionSnapshot) -> Self {
        Self::new("ok", message, timer)
    }

    pub fn with_recorded(mut self, seconds: u64) -> Self {
        self.recorded_seconds = Some(seconds);
        self
    }
}

/// Request body for subject selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectRequest {
    pub subject: String,
}

/// Query string for the groups listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupQuery {
    #[serde(default)]
    pub q: String,
}

/// Query string for the subject manager
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonthQuery {
    pub month: Option<String>,
}

/// Response for notification-only actions (group join/leave)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub status: String,
    pub notification: Notification,
}

impl ActionResponse {
    pub fn ok(notification: Notification) -> Self {
        Self {
            status: "ok".to_string(),
            notification,
        }
    }
}

/// Error body for failed requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(message: String) -> Self {
        Self {
            status: "error".to_string(),
            message,
            timestamp: Utc::now(),
        }
    }
}

/// Status response with session and server information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: SessionSnapshot,
    pub ticking: bool,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
