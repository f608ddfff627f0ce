//! Study session state machine
//!
//! `Session` holds the countdown for the mounted timer view and knows nothing
//! about how ticks are produced. The owner drives it with `tick()` once per
//! second while `status()` is `Running` and disarms its tick source whenever
//! the status leaves `Running`.

use serde::{Deserialize, Serialize};

use crate::{error::TimerError, utils::time_fmt::format_clock};

/// Default session length (25 minutes)
pub const DEFAULT_SESSION_LENGTH_SECS: u64 = 25 * 60;

/// Stops shorter than this are discarded instead of recorded
pub const DEFAULT_RECORD_THRESHOLD_SECS: u64 = 60;

/// Countdown status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Idle,
    Running,
    Paused,
}

/// Result of a single tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The session was not running; nothing changed
    Ignored,
    /// One second was counted down
    Counted { remaining_seconds: u64 },
    /// The countdown reached zero
    Completed(CompletedSession),
}

/// A session that ran down to zero
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedSession {
    pub subject: Option<String>,
    pub duration_seconds: u64,
    pub sessions_completed_today: u32,
}

/// Result of a manual stop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopOutcome {
    pub subject: Option<String>,
    pub elapsed_seconds: u64,
    /// Seconds added to today's total (0 when below the threshold)
    pub recorded_seconds: u64,
}

impl StopOutcome {
    pub fn was_recorded(&self) -> bool {
        self.recorded_seconds > 0
    }
}

/// Countdown session bound to a subject
#[derive(Debug, Clone)]
pub struct Session {
    subject: Option<String>,
    status: SessionStatus,
    session_length: u64,
    record_threshold: u64,
    remaining_seconds: u64,
    sessions_completed_today: u32,
    total_study_seconds_today: u64,
}

impl Session {
    /// Create an idle session with the default 25 minute length
    pub fn new() -> Self {
        Self::with_settings(DEFAULT_SESSION_LENGTH_SECS, DEFAULT_RECORD_THRESHOLD_SECS)
    }

    /// Create an idle session with a custom length and record threshold.
    ///
    /// A zero length is bumped to one second so progress stays defined.
    pub fn with_settings(session_length: u64, record_threshold: u64) -> Self {
        let session_length = session_length.max(1);
        Self {
            subject: None,
            status: SessionStatus::Idle,
            session_length,
            record_threshold,
            remaining_seconds: session_length,
            sessions_completed_today: 0,
            total_study_seconds_today: 0,
        }
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    pub fn session_length(&self) -> u64 {
        self.session_length
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn sessions_completed_today(&self) -> u32 {
        self.sessions_completed_today
    }

    pub fn total_study_seconds_today(&self) -> u64 {
        self.total_study_seconds_today
    }

    /// Seconds counted down since the last start from a full clock
    pub fn elapsed_seconds(&self) -> u64 {
        self.session_length - self.remaining_seconds
    }

    /// Fraction of the session already elapsed, in `[0, 1]`
    pub fn progress(&self) -> f64 {
        self.elapsed_seconds() as f64 / self.session_length as f64
    }

    /// Select the subject to study. Blank names clear the selection.
    pub fn select_subject(&mut self, name: &str) {
        let name = name.trim();
        self.subject = if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        };
    }

    /// Start from `Idle` or resume from `Paused`.
    ///
    /// Starting from `Idle` requires a subject. Calling this while already
    /// running changes nothing.
    pub fn start(&mut self) -> Result<SessionStatus, TimerError> {
        match self.status {
            SessionStatus::Idle if self.subject.is_none() => Err(TimerError::SubjectRequired),
            SessionStatus::Idle | SessionStatus::Paused => {
                self.status = SessionStatus::Running;
                Ok(self.status)
            }
            SessionStatus::Running => Ok(self.status),
        }
    }

    /// Freeze the countdown. No-op unless running.
    pub fn pause(&mut self) -> SessionStatus {
        if self.status == SessionStatus::Running {
            self.status = SessionStatus::Paused;
        }
        self.status
    }

    /// Return to `Idle` with a full clock, discarding elapsed time
    pub fn reset(&mut self) {
        self.status = SessionStatus::Idle;
        self.remaining_seconds = self.session_length;
    }

    /// End the session early, banking the elapsed time if it reaches the
    /// record threshold. Never counts as a completed session.
    pub fn stop(&mut self) -> StopOutcome {
        let elapsed_seconds = self.elapsed_seconds();
        let recorded_seconds = if elapsed_seconds > 0 && elapsed_seconds >= self.record_threshold {
            self.total_study_seconds_today += elapsed_seconds;
            elapsed_seconds
        } else {
            0
        };

        self.reset();

        StopOutcome {
            subject: self.subject.clone(),
            elapsed_seconds,
            recorded_seconds,
        }
    }

    /// Count down one second
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != SessionStatus::Running {
            return TickOutcome::Ignored;
        }

        if self.remaining_seconds <= 1 {
            self.sessions_completed_today += 1;
            self.total_study_seconds_today += self.session_length;
            self.reset();
            return TickOutcome::Completed(CompletedSession {
                subject: self.subject.clone(),
                duration_seconds: self.session_length,
                sessions_completed_today: self.sessions_completed_today,
            });
        }

        self.remaining_seconds -= 1;
        TickOutcome::Counted {
            remaining_seconds: self.remaining_seconds,
        }
    }

    /// Copy of the observable fields for the view
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            subject: self.subject.clone(),
            status: self.status,
            remaining_seconds: self.remaining_seconds,
            clock: format_clock(self.remaining_seconds),
            session_length_seconds: self.session_length,
            progress: self.progress(),
            sessions_completed_today: self.sessions_completed_today,
            total_study_seconds_today: self.total_study_seconds_today,
            total_study_minutes_today: self.total_study_seconds_today / 60,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Read model handed to the view after every change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub subject: Option<String>,
    pub status: SessionStatus,
    pub remaining_seconds: u64,
    /// `MM:SS`, or `HH:MM:SS` once an hour or more remains
    pub clock: String,
    pub session_length_seconds: u64,
    pub progress: f64,
    pub sessions_completed_today: u32,
    pub total_study_seconds_today: u64,
    pub total_study_minutes_today: u64,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Session::new().snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(subject: &str) -> Session {
        let mut session = Session::new();
        session.select_subject(subject);
        session.start().expect("subject selected");
        session
    }

    fn tick_n(session: &mut Session, n: u64) {
        for _ in 0..n {
            session.tick();
        }
    }

    #[test]
    fn new_session_is_idle_with_full_clock() {
        let session = Session::new();
        assert_eq!(session.status(), SessionStatus::Idle);
        assert_eq!(session.remaining_seconds(), 1500);
        assert_eq!(session.sessions_completed_today(), 0);
        assert_eq!(session.total_study_seconds_today(), 0);
        assert_eq!(session.progress(), 0.0);
    }

    #[test]
    fn pause_and_reset_while_idle_are_noops() {
        let mut session = Session::new();
        for _ in 0..3 {
            assert_eq!(session.pause(), SessionStatus::Idle);
            session.reset();
        }
        assert_eq!(session.status(), SessionStatus::Idle);
        assert_eq!(session.remaining_seconds(), 1500);
    }

    #[test]
    fn start_without_subject_is_rejected() {
        let mut session = Session::new();
        assert_eq!(session.start(), Err(TimerError::SubjectRequired));
        assert_eq!(session.status(), SessionStatus::Idle);

        session.select_subject("   ");
        assert_eq!(session.start(), Err(TimerError::SubjectRequired));
        assert_eq!(session.subject(), None);
    }

    #[test]
    fn ticks_are_ignored_unless_running() {
        let mut session = Session::new();
        assert_eq!(session.tick(), TickOutcome::Ignored);

        let mut session = running("Math");
        session.tick();
        session.pause();
        assert_eq!(session.tick(), TickOutcome::Ignored);
        assert_eq!(session.remaining_seconds(), 1499);
    }

    #[test]
    fn each_tick_counts_down_one_second() {
        let mut session = running("Math");
        assert_eq!(
            session.tick(),
            TickOutcome::Counted { remaining_seconds: 1499 }
        );
        tick_n(&mut session, 9);
        assert_eq!(session.remaining_seconds(), 1490);
        assert_eq!(session.status(), SessionStatus::Running);
    }

    #[test]
    fn natural_completion_counts_full_session() {
        let mut session = running("Math");
        tick_n(&mut session, 1499);
        assert_eq!(session.remaining_seconds(), 1);

        match session.tick() {
            TickOutcome::Completed(done) => {
                assert_eq!(done.subject.as_deref(), Some("Math"));
                assert_eq!(done.duration_seconds, 1500);
                assert_eq!(done.sessions_completed_today, 1);
            }
            other => panic!("expected completion, got {:?}", other),
        }

        assert_eq!(session.status(), SessionStatus::Idle);
        assert_eq!(session.sessions_completed_today(), 1);
        assert_eq!(session.total_study_seconds_today(), 1500);
        assert_eq!(session.remaining_seconds(), 1500);
    }

    #[test]
    fn stop_after_ninety_seconds_records_time_only() {
        let mut session = running("Physics");
        tick_n(&mut session, 90);

        let outcome = session.stop();
        assert_eq!(outcome.elapsed_seconds, 90);
        assert_eq!(outcome.recorded_seconds, 90);
        assert!(outcome.was_recorded());
        assert_eq!(session.total_study_seconds_today(), 90);
        assert_eq!(session.sessions_completed_today(), 0);
        assert_eq!(session.status(), SessionStatus::Idle);
        assert_eq!(session.remaining_seconds(), 1500);
    }

    #[test]
    fn stop_below_threshold_discards_time() {
        let mut session = running("Physics");
        tick_n(&mut session, 30);

        let outcome = session.stop();
        assert_eq!(outcome.elapsed_seconds, 30);
        assert!(!outcome.was_recorded());
        assert_eq!(session.total_study_seconds_today(), 0);
        assert_eq!(session.status(), SessionStatus::Idle);
    }

    #[test]
    fn stop_at_exact_threshold_records() {
        let mut session = running("Physics");
        tick_n(&mut session, 60);
        assert_eq!(session.stop().recorded_seconds, 60);
    }

    #[test]
    fn stop_while_paused_records_elapsed() {
        let mut session = running("History");
        tick_n(&mut session, 120);
        session.pause();
        assert_eq!(session.stop().recorded_seconds, 120);
        assert_eq!(session.total_study_seconds_today(), 120);
    }

    #[test]
    fn reset_discards_elapsed_time() {
        let mut session = running("Chemistry");
        tick_n(&mut session, 300);
        session.reset();
        assert_eq!(session.status(), SessionStatus::Idle);
        assert_eq!(session.remaining_seconds(), 1500);
        assert_eq!(session.total_study_seconds_today(), 0);
    }

    #[test]
    fn resume_keeps_remaining_time() {
        let mut session = running("Math");
        tick_n(&mut session, 10);
        session.pause();
        // paused ticks are dropped
        tick_n(&mut session, 500);
        assert_eq!(session.start(), Ok(SessionStatus::Running));
        tick_n(&mut session, 5);
        assert_eq!(session.remaining_seconds(), 1485);
    }

    #[test]
    fn paused_session_resumes_even_after_subject_cleared() {
        let mut session = running("Math");
        session.pause();
        session.select_subject("");
        assert_eq!(session.start(), Ok(SessionStatus::Running));
    }

    #[test]
    fn custom_threshold_and_length() {
        let mut session = Session::with_settings(120, 0);
        session.select_subject("Geography");
        session.start().unwrap();
        session.tick();
        assert_eq!(session.stop().recorded_seconds, 1);

        session.start().unwrap();
        tick_n(&mut session, 120);
        assert_eq!(session.sessions_completed_today(), 1);
        assert_eq!(session.total_study_seconds_today(), 121);
    }

    #[test]
    fn progress_tracks_elapsed_fraction() {
        let mut session = Session::with_settings(100, 60);
        session.select_subject("Math");
        session.start().unwrap();
        tick_n(&mut session, 25);
        assert!((session.progress() - 0.25).abs() < f64::EPSILON);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.clock, "01:15");
        assert_eq!(snapshot.status, SessionStatus::Running);
        assert_eq!(snapshot.session_length_seconds, 100);
    }

    #[test]
    fn snapshot_reports_whole_minutes() {
        let mut session = running("English");
        tick_n(&mut session, 150);
        session.stop();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.total_study_seconds_today, 150);
        assert_eq!(snapshot.total_study_minutes_today, 2);
        assert_eq!(snapshot.clock, "25:00");
    }
}
