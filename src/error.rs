//! Error types shared by the timer and the catalog

use thiserror::Error;

/// Errors raised by timer operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimerError {
    #[error("select a subject first")]
    SubjectRequired,
    #[error("failed to lock session state: {0}")]
    LockPoisoned(String),
}

/// Errors raised by catalog lookups and group actions
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("study group {0} not found")]
    GroupNotFound(u32),
    #[error("study group {0} is full")]
    GroupFull(u32),
    #[error("already a member of study group {0}")]
    AlreadyMember(u32),
    #[error("not a member of study group {0}")]
    NotAMember(u32),
    #[error("unknown month filter: {0}")]
    UnknownMonth(String),
}
