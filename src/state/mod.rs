//! State management module
//!
//! This module contains the session state machine, the notifications it
//! emits and the shared application state that owns both.

pub mod app_state;
pub mod notification;
pub mod session;

// Re-export main types
pub use app_state::AppState;
pub use notification::{Notification, NotificationKind, Severity};
pub use session::{Session, SessionSnapshot, SessionStatus, StopOutcome, TickOutcome};
