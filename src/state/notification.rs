//! Transient user-facing notifications

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::session::{CompletedSession, StopOutcome};

/// What triggered a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    SessionCompleted,
    StudyRecorded,
    SubjectRequired,
    GroupJoinRequested,
    GroupLeft,
}

/// How the view should style the message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Celebrate,
    Destructive,
}

/// One-shot message for the view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    fn new(kind: NotificationKind, severity: Severity, title: &str, description: String) -> Self {
        Self {
            kind,
            severity,
            title: title.to_string(),
            description,
            timestamp: Utc::now(),
        }
    }

    pub fn session_completed(done: &CompletedSession) -> Self {
        let description = match &done.subject {
            Some(subject) => format!("A {} study session finished successfully", subject),
            None => "A study session finished successfully".to_string(),
        };
        Self::new(
            NotificationKind::SessionCompleted,
            Severity::Celebrate,
            "Congratulations! 🎉",
            description,
        )
    }

    pub fn study_recorded(stop: &StopOutcome) -> Self {
        let minutes = stop.recorded_seconds / 60;
        let description = match &stop.subject {
            Some(subject) => format!("{} minutes recorded for {}", minutes, subject),
            None => format!("{} minutes recorded", minutes),
        };
        Self::new(
            NotificationKind::StudyRecorded,
            Severity::Info,
            "Study time recorded",
            description,
        )
    }

    pub fn subject_required() -> Self {
        Self::new(
            NotificationKind::SubjectRequired,
            Severity::Destructive,
            "Choose a subject",
            "Select a subject to study first".to_string(),
        )
    }

    pub fn group_join_requested(group_name: &str) -> Self {
        Self::new(
            NotificationKind::GroupJoinRequested,
            Severity::Info,
            "Join request sent",
            format!("You will be added to {} once an admin approves", group_name),
        )
    }

    pub fn group_left(group_name: &str) -> Self {
        Self::new(
            NotificationKind::GroupLeft,
            Severity::Destructive,
            "You left the group",
            format!("You can request to join {} again at any time", group_name),
        )
    }
}
