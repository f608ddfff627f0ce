//! Session tick source
//!
//! One tokio task per armed run of the countdown. The task only holds a weak
//! reference to the application state and is aborted as soon as its
//! `TickHandle` is dropped.

use std::{
    sync::{Arc, Weak},
    time::Duration,
};
use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant},
};
use tracing::debug;

use crate::state::AppState;

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Owning handle for an armed tick source
#[derive(Debug)]
pub struct TickHandle {
    generation: u64,
    task: JoinHandle<()>,
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        debug!("Disarming tick source (generation {})", self.generation);
        self.task.abort();
    }
}

/// Spawn a tick source that calls back into `state` once per second.
///
/// Must be called from within a tokio runtime.
pub fn arm(state: &Arc<AppState>, generation: u64) -> TickHandle {
    debug!("Arming tick source (generation {})", generation);
    let task = tokio::spawn(session_ticker_task(Arc::downgrade(state), generation));
    TickHandle { generation, task }
}

/// Background task that feeds one tick per second to the session
async fn session_ticker_task(state: Weak<AppState>, generation: u64) {
    // first tick lands one full period after arming
    let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);

    loop {
        interval.tick().await;

        let Some(state) = state.upgrade() else {
            debug!("Application state dropped, tick source {} exiting", generation);
            break;
        };

        if !state.on_tick(generation) {
            debug!("Tick source {} no longer current, exiting", generation);
            break;
        }
    }
}
