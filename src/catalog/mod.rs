//! Static catalog module
//!
//! Fixed collections behind the dashboard, subject manager and study groups
//! screens, plus the few values derived from them.

pub mod dashboard;
pub mod groups;
pub mod subjects;

// Re-export main functions
pub use dashboard::{dashboard, Dashboard};
pub use groups::{join_group, leave_group, list_groups, GroupListing, StudyGroup};
pub use subjects::{subject_overview, timer_subjects, Month, SubjectOverview};

/// `part / whole` as a whole percentage, rounded. Zero when `whole` is zero.
pub fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    (f64::from(part) * 100.0 / f64::from(whole)).round() as u32
}
