//! Main application state management

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::{broadcast, watch};
use tracing::{debug, error, info, warn};

use super::{
    notification::Notification,
    session::{Session, SessionSnapshot, StopOutcome, TickOutcome},
};
use crate::{
    error::TimerError,
    tasks::session_ticker::{self, TickHandle},
    utils::time_fmt::format_uptime,
};

/// Number of notifications kept for late readers
const RECENT_NOTIFICATIONS: usize = 20;

/// Session plus the tick source currently driving it.
///
/// Both live under one lock so a transition and the matching disarm happen
/// in the same critical section.
#[derive(Debug)]
struct TimerCore {
    session: Session,
    ticker: Option<TickHandle>,
    generation: u64,
}

impl TimerCore {
    fn disarm(&mut self) {
        if let Some(handle) = self.ticker.take() {
            drop(handle);
        }
    }

    fn disarm_unless_running(&mut self) {
        if !self.session.is_running() {
            self.disarm();
        }
    }
}

/// Main application state: the mounted timer view and its collaborators
#[derive(Debug)]
pub struct AppState {
    core: Mutex<TimerCore>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Mutex<Option<String>>,
    pub last_action_time: Mutex<Option<DateTime<Utc>>>,
    /// Channel for one-shot notifications (completion, validation, ...)
    pub notification_tx: broadcast::Sender<Notification>,
    recent_notifications: Mutex<VecDeque<Notification>>,
    /// Channel for session snapshots after every change
    pub snapshot_tx: watch::Sender<SessionSnapshot>,
}

impl AppState {
    /// Create a new AppState with an idle session
    pub fn new(
        port: u16,
        host: String,
        session_length_seconds: u64,
        record_threshold_seconds: u64,
    ) -> Self {
        let session = Session::with_settings(session_length_seconds, record_threshold_seconds);
        let (notification_tx, _) = broadcast::channel(100);
        let (snapshot_tx, _) = watch::channel(session.snapshot());

        Self {
            core: Mutex::new(TimerCore {
                session,
                ticker: None,
                generation: 0,
            }),
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
            notification_tx,
            recent_notifications: Mutex::new(VecDeque::with_capacity(RECENT_NOTIFICATIONS)),
            snapshot_tx,
        }
    }

    fn lock_core(&self) -> Result<MutexGuard<'_, TimerCore>, TimerError> {
        self.core
            .lock()
            .map_err(|e| TimerError::LockPoisoned(e.to_string()))
    }

    /// Apply a transition that can only leave `Running`, then publish it
    fn transition<R, F>(&self, action: &str, apply: F) -> Result<(R, SessionSnapshot), TimerError>
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut core = self.lock_core()?;
        let result = apply(&mut core.session);
        core.disarm_unless_running();
        let snapshot = core.session.snapshot();
        drop(core);

        self.record_action(action);
        self.publish(snapshot.clone());
        Ok((result, snapshot))
    }

    /// Select the subject for the next run. Blank names clear it.
    pub fn select_subject(&self, name: &str) -> Result<SessionSnapshot, TimerError> {
        let (_, snapshot) = self.transition("subject", |session| session.select_subject(name))?;
        info!("Subject selected: {:?}", snapshot.subject);
        Ok(snapshot)
    }

    /// Start or resume the countdown and arm the tick source
    pub fn start(self: &Arc<Self>) -> Result<SessionSnapshot, TimerError> {
        let mut core = self.lock_core()?;

        if let Err(e) = core.session.start() {
            drop(core);
            warn!("Refusing to start session: {}", e);
            self.notify(Notification::subject_required());
            return Err(e);
        }

        if core.ticker.is_none() {
            core.generation += 1;
            let generation = core.generation;
            core.ticker = Some(session_ticker::arm(self, generation));
            info!(
                "Session running for {:?} with {}s remaining",
                core.session.subject(),
                core.session.remaining_seconds()
            );
        } else {
            debug!("Session already running, keeping current tick source");
        }

        let snapshot = core.session.snapshot();
        drop(core);

        self.record_action("start");
        self.publish(snapshot.clone());
        Ok(snapshot)
    }

    /// Pause the countdown. No-op unless running.
    pub fn pause(&self) -> Result<SessionSnapshot, TimerError> {
        let (_, snapshot) = self.transition("pause", |session| session.pause())?;
        info!("Session paused with {}s remaining", snapshot.remaining_seconds);
        Ok(snapshot)
    }

    /// Reset to a full idle clock, discarding elapsed time
    pub fn reset(&self) -> Result<SessionSnapshot, TimerError> {
        let (_, snapshot) = self.transition("reset", |session| session.reset())?;
        info!("Session reset");
        Ok(snapshot)
    }

    /// Stop early, banking elapsed time when it reaches the threshold
    pub fn stop(&self) -> Result<(StopOutcome, SessionSnapshot), TimerError> {
        let (outcome, snapshot) = self.transition("stop", |session| session.stop())?;

        if outcome.was_recorded() {
            info!(
                "Session stopped, recorded {}s for {:?}",
                outcome.recorded_seconds, outcome.subject
            );
            self.notify(Notification::study_recorded(&outcome));
        } else {
            info!(
                "Session stopped after {}s, below record threshold",
                outcome.elapsed_seconds
            );
        }

        Ok((outcome, snapshot))
    }

    /// Called by the tick source once per second.
    ///
    /// Returns `false` when the calling tick source should exit.
    pub(crate) fn on_tick(&self, generation: u64) -> bool {
        let mut core = match self.lock_core() {
            Ok(core) => core,
            Err(e) => {
                error!("Dropping tick: {}", e);
                return false;
            }
        };

        if core.generation != generation || core.ticker.is_none() {
            debug!("Ignoring stale tick from generation {}", generation);
            return false;
        }

        let outcome = core.session.tick();
        core.disarm_unless_running();
        let keep_ticking = core.ticker.is_some();
        let snapshot = core.session.snapshot();
        drop(core);

        match outcome {
            TickOutcome::Ignored => {}
            TickOutcome::Counted { remaining_seconds } => {
                debug!("Tick: {}s remaining", remaining_seconds);
            }
            TickOutcome::Completed(done) => {
                info!(
                    "Session completed for {:?}, {} completed today",
                    done.subject, done.sessions_completed_today
                );
                self.record_action("completed");
                self.notify(Notification::session_completed(&done));
            }
        }

        self.publish(snapshot);
        keep_ticking
    }

    /// Disarm the tick source, e.g. when the server shuts down
    pub fn shutdown(&self) {
        match self.lock_core() {
            Ok(mut core) => {
                core.disarm();
                info!("Tick source released");
            }
            Err(e) => error!("Failed to release tick source: {}", e),
        }
    }

    /// Whether a tick source is currently armed
    pub fn is_ticking(&self) -> bool {
        self.lock_core()
            .map(|core| core.ticker.is_some())
            .unwrap_or(false)
    }

    /// Get the current session snapshot
    pub fn snapshot(&self) -> Result<SessionSnapshot, TimerError> {
        self.lock_core().map(|core| core.session.snapshot())
    }

    /// Subscribe to one-shot notifications
    pub fn subscribe_notifications(&self) -> broadcast::Receiver<Notification> {
        self.notification_tx.subscribe()
    }

    /// Watch session snapshots
    pub fn watch_snapshots(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Emit a notification to subscribers and keep it for late readers
    pub fn notify(&self, notification: Notification) {
        match self.recent_notifications.lock() {
            Ok(mut recent) => {
                if recent.len() == RECENT_NOTIFICATIONS {
                    recent.pop_front();
                }
                recent.push_back(notification.clone());
            }
            Err(e) => warn!("Failed to store notification: {}", e),
        }

        if self.notification_tx.send(notification).is_err() {
            debug!("No notification subscribers");
        }
    }

    /// Recently emitted notifications, oldest first
    pub fn recent_notifications(&self) -> Vec<Notification> {
        self.recent_notifications
            .lock()
            .map(|recent| recent.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn publish(&self, snapshot: SessionSnapshot) {
        self.snapshot_tx.send_replace(snapshot);
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        format_uptime(self.start_time.elapsed())
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
