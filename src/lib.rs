//! Study Timer - a study-session countdown service
//!
//! This library provides a Pomodoro-style session timer with start, pause,
//! reset and stop transitions, plus the static dashboard, subject and study
//! group data served next to it.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use error::{CatalogError, TimerError};
pub use state::{AppState, Session, SessionSnapshot, SessionStatus};
pub use utils::signals::shutdown_signal;
