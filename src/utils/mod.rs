//! Utility functions module
//!
//! This module contains utility functions used throughout the application.

pub mod signals;
pub mod time_fmt;

// Re-export main functions
pub use signals::shutdown_signal;
pub use time_fmt::{format_clock, format_minutes, format_uptime};
