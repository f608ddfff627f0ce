//! Subject manager data and timer subject choices

use serde::{Deserialize, Serialize};

use super::percent;
use crate::{error::CatalogError, utils::time_fmt::format_minutes};

/// Subjects offered by the timer's subject picker
pub const TIMER_SUBJECTS: [&str; 8] = [
    "Math",
    "Physics",
    "Chemistry",
    "English",
    "Persian Literature",
    "History",
    "Geography",
    "Social Studies",
];

/// Month filter for the subject manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Month {
    #[default]
    Current,
    Last,
    TwoMonthsAgo,
    ThreeMonthsAgo,
}

impl Month {
    pub const ALL: [Month; 4] = [
        Month::Current,
        Month::Last,
        Month::TwoMonthsAgo,
        Month::ThreeMonthsAgo,
    ];

    pub fn parse(value: &str) -> Result<Self, CatalogError> {
        match value {
            "current" => Ok(Month::Current),
            "last" => Ok(Month::Last),
            "2months" => Ok(Month::TwoMonthsAgo),
            "3months" => Ok(Month::ThreeMonthsAgo),
            other => Err(CatalogError::UnknownMonth(other.to_string())),
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            Month::Current => "current",
            Month::Last => "last",
            Month::TwoMonthsAgo => "2months",
            Month::ThreeMonthsAgo => "3months",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Month::Current => "This month",
            Month::Last => "Last month",
            Month::TwoMonthsAgo => "2 months ago",
            Month::ThreeMonthsAgo => "3 months ago",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyHours {
    pub hours: u32,
    /// Bar height relative to the busiest day
    pub bar_percent: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectCard {
    pub id: u32,
    pub name: String,
    pub total_hours: u32,
    pub goal_hours: u32,
    pub sessions_count: u32,
    pub avg_session_minutes: u32,
    pub avg_session_label: String,
    pub last_studied: String,
    pub last_seven_days: Vec<DailyHours>,
    pub monthly_progress: u32,
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectSummary {
    pub total_hours: u32,
    pub average_progress: u32,
    pub total_sessions: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectOverview {
    pub month: Month,
    pub months: Vec<MonthOption>,
    pub summary: SubjectSummary,
    pub subjects: Vec<SubjectCard>,
}

struct SubjectRecord {
    id: u32,
    name: &'static str,
    total_hours: u32,
    goal_hours: u32,
    sessions_count: u32,
    avg_session_minutes: u32,
    last_studied: &'static str,
    weekly_hours: [u32; 7],
    monthly_progress: u32,
    topics: [&'static str; 4],
}

const SUBJECTS: [SubjectRecord; 4] = [
    SubjectRecord {
        id: 1,
        name: "Math",
        total_hours: 45,
        goal_hours: 60,
        sessions_count: 23,
        avg_session_minutes: 117,
        last_studied: "2 hours ago",
        weekly_hours: [8, 6, 9, 7, 8, 5, 6],
        monthly_progress: 75,
        topics: ["Limits and continuity", "Derivatives", "Functions", "Geometry"],
    },
    SubjectRecord {
        id: 2,
        name: "Physics",
        total_hours: 32,
        goal_hours: 45,
        sessions_count: 18,
        avg_session_minutes: 106,
        last_studied: "1 day ago",
        weekly_hours: [5, 4, 6, 5, 7, 3, 2],
        monthly_progress: 71,
        topics: ["Mechanics", "Electricity", "Oscillation", "Waves"],
    },
    SubjectRecord {
        id: 3,
        name: "Chemistry",
        total_hours: 28,
        goal_hours: 40,
        sessions_count: 15,
        avg_session_minutes: 112,
        last_studied: "3 days ago",
        weekly_hours: [4, 3, 5, 4, 6, 2, 4],
        monthly_progress: 70,
        topics: ["Organic chemistry", "Acids and bases", "Thermodynamics", "Kinetics"],
    },
    SubjectRecord {
        id: 4,
        name: "English",
        total_hours: 22,
        goal_hours: 30,
        sessions_count: 20,
        avg_session_minutes: 66,
        last_studied: "5 hours ago",
        weekly_hours: [3, 4, 2, 3, 4, 3, 3],
        monthly_progress: 73,
        topics: ["Grammar", "Vocabulary", "Reading", "Listening"],
    },
];

impl SubjectRecord {
    fn card(&self) -> SubjectCard {
        let max_hours = self.weekly_hours.iter().copied().max().unwrap_or(0);
        SubjectCard {
            id: self.id,
            name: self.name.to_string(),
            total_hours: self.total_hours,
            goal_hours: self.goal_hours,
            sessions_count: self.sessions_count,
            avg_session_minutes: self.avg_session_minutes,
            avg_session_label: format_minutes(self.avg_session_minutes),
            last_studied: self.last_studied.to_string(),
            last_seven_days: self
                .weekly_hours
                .iter()
                .map(|&hours| DailyHours {
                    hours,
                    bar_percent: percent(hours, max_hours),
                })
                .collect(),
            monthly_progress: self.monthly_progress,
            topics: self.topics.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Subject names offered by the timer
pub fn timer_subjects() -> Vec<String> {
    TIMER_SUBJECTS.iter().map(|s| s.to_string()).collect()
}

/// Build the subject manager view model.
///
/// The mock data is the same for every month.
pub fn subject_overview(month: Month) -> SubjectOverview {
    let subjects: Vec<SubjectCard> = SUBJECTS.iter().map(SubjectRecord::card).collect();

    let total_progress: u32 = subjects.iter().map(|s| s.monthly_progress).sum();
    let summary = SubjectSummary {
        total_hours: subjects.iter().map(|s| s.total_hours).sum(),
        average_progress: percent(total_progress, 100 * subjects.len() as u32),
        total_sessions: subjects.iter().map(|s| s.sessions_count).sum(),
    };

    SubjectOverview {
        month,
        months: Month::ALL
            .iter()
            .map(|m| MonthOption {
                value: m.value().to_string(),
                label: m.label().to_string(),
            })
            .collect(),
        summary,
        subjects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_totals() {
        let overview = subject_overview(Month::Current);
        assert_eq!(overview.summary.total_hours, 127);
        assert_eq!(overview.summary.total_sessions, 76);
        // (75 + 71 + 70 + 73) / 4 = 72.25
        assert_eq!(overview.summary.average_progress, 72);
    }

    #[test]
    fn month_parsing() {
        assert_eq!(Month::parse("2months"), Ok(Month::TwoMonthsAgo));
        assert_eq!(
            Month::parse("next"),
            Err(CatalogError::UnknownMonth("next".to_string()))
        );
        for month in Month::ALL {
            assert_eq!(Month::parse(month.value()), Ok(month));
        }
    }

    #[test]
    fn weekly_bars_relative_to_busiest_day() {
        let overview = subject_overview(Month::Last);
        let math = &overview.subjects[0];
        assert_eq!(math.last_seven_days[2].bar_percent, 100);
        assert_eq!(math.last_seven_days[5].bar_percent, 56);
        assert_eq!(math.avg_session_label, "1h 57m");
        assert_eq!(overview.subjects[3].avg_session_label, "1h 6m");
    }

    #[test]
    fn timer_subject_choices() {
        let subjects = timer_subjects();
        assert_eq!(subjects.len(), 8);
        assert_eq!(subjects[0], "Math");
    }
}
