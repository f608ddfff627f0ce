//! Dashboard figures

use serde::{Deserialize, Serialize};

use super::percent;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewCard {
    pub title: String,
    pub value: String,
    pub note: Option<String>,
    /// Progress bar value when the card shows one
    pub progress_percent: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyMinutes {
    pub day: String,
    pub minutes: u32,
    /// Bar width relative to the busiest day
    pub bar_percent: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectGoal {
    pub subject: String,
    pub hours: u32,
    pub goal: u32,
    pub percent: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthSummary {
    pub label: String,
    pub badge: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub overview: Vec<OverviewCard>,
    pub weekly: Vec<DailyMinutes>,
    pub subject_progress: Vec<SubjectGoal>,
    pub achievements: Vec<Achievement>,
    pub month_summary: Vec<MonthSummary>,
}

const WEEKLY_MINUTES: [(&str, u32); 7] = [
    ("Saturday", 120),
    ("Sunday", 95),
    ("Monday", 180),
    ("Tuesday", 75),
    ("Wednesday", 200),
    ("Thursday", 150),
    ("Friday", 90),
];

const SUBJECT_GOALS: [(&str, u32, u32); 4] = [
    ("Math", 24, 30),
    ("Physics", 18, 25),
    ("Chemistry", 15, 20),
    ("English", 12, 15),
];

const WEEKLY_GOAL_HOURS: (u32, u32) = (18, 25);

fn card(
    title: &str,
    value: String,
    note: Option<&str>,
    progress_percent: Option<u32>,
) -> OverviewCard {
    OverviewCard {
        title: title.to_string(),
        value,
        note: note.map(str::to_string),
        progress_percent,
    }
}

/// Build the dashboard view model
pub fn dashboard() -> Dashboard {
    let (done, goal) = WEEKLY_GOAL_HOURS;
    let overview = vec![
        card("Studied today", "3.2 hours".to_string(), Some("+20% from yesterday"), None),
        card(
            "Weekly goal",
            format!("{}/{} hours", done, goal),
            None,
            Some(percent(done, goal)),
        ),
        card("Rank this week", "#12".to_string(), Some("of 245 people"), None),
        card("Streak", "7 days".to_string(), Some("New record!"), None),
    ];

    let max_minutes = WEEKLY_MINUTES.iter().map(|(_, m)| *m).max().unwrap_or(0);
    let weekly = WEEKLY_MINUTES
        .iter()
        .map(|(day, minutes)| DailyMinutes {
            day: day.to_string(),
            minutes: *minutes,
            bar_percent: percent(*minutes, max_minutes),
        })
        .collect();

    let subject_progress = SUBJECT_GOALS
        .iter()
        .map(|(subject, hours, goal)| SubjectGoal {
            subject: subject.to_string(),
            hours: *hours,
            goal: *goal,
            percent: percent(*hours, *goal),
        })
        .collect();

    let achievements = [
        ("Hard-working week", "7 days of study in a row"),
        ("Golden focus", "5 hours of study without a break"),
        ("Rank climb", "Highest rank this month"),
    ]
    .iter()
    .map(|(title, description)| Achievement {
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect();

    let month_summary = [
        ("Total hours", "+15% growth"),
        ("Completed sessions", "Record!"),
        ("Average per day", "Steady"),
        ("Goals reached", "Excellent"),
    ]
    .iter()
    .map(|(label, badge)| MonthSummary {
        label: label.to_string(),
        badge: badge.to_string(),
    })
    .collect();

    Dashboard {
        overview,
        weekly,
        subject_progress,
        achievements,
        month_summary,
    }
}
