//! Background tasks module
//!
//! This module contains the tick source that drives the session countdown.

pub mod session_ticker;

// Re-export main types
pub use session_ticker::{arm, TickHandle};
