//! Study groups browser

use serde::{Deserialize, Serialize};

use crate::{error::CatalogError, state::Notification};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopMember {
    pub name: String,
    pub hours: u32,
    pub is_current_user: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyGroup {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub members: u32,
    pub max_members: u32,
    pub level: Level,
    pub subject: String,
    pub avg_study_hours: f64,
    pub is_joined: bool,
    pub rank: Option<u32>,
    pub weekly_goal: u32,
    pub current_weekly: Option<u32>,
    pub top_members: Vec<TopMember>,
}

impl StudyGroup {
    pub fn is_full(&self) -> bool {
        self.members >= self.max_members
    }

    fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.subject.to_lowercase().contains(&term)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupListing {
    /// Groups the user belongs to, regardless of the search term
    pub my_groups: Vec<StudyGroup>,
    /// Unjoined groups matching the search term
    pub available: Vec<StudyGroup>,
}

fn member(name: &str, hours: u32, is_current_user: bool) -> TopMember {
    TopMember {
        name: name.to_string(),
        hours,
        is_current_user,
    }
}

/// All study groups
pub fn study_groups() -> Vec<StudyGroup> {
    vec![
        StudyGroup {
            id: 1,
            name: "Math entrance exam 1403".to_string(),
            description: "Entrance exam preparation focused on the key math topics".to_string(),
            members: 34,
            max_members: 50,
            level: Level::Advanced,
            subject: "Math".to_string(),
            avg_study_hours: 4.2,
            is_joined: true,
            rank: Some(2),
            weekly_goal: 25,
            current_weekly: Some(18),
            top_members: vec![
                member("Ali Ahmadi", 23, false),
                member("Sara Mohammadi", 21, false),
                member("You", 18, true),
            ],
        },
        StudyGroup {
            id: 2,
            name: "High school physics".to_string(),
            description: "Solving physics problems and strengthening the basics".to_string(),
            members: 28,
            max_members: 40,
            level: Level::Intermediate,
            subject: "Physics".to_string(),
            avg_study_hours: 3.1,
            is_joined: false,
            rank: None,
            weekly_goal: 20,
            current_weekly: None,
            top_members: Vec::new(),
        },
        StudyGroup {
            id: 3,
            name: "English conversation".to_string(),
            description: "Building conversation skills and vocabulary".to_string(),
            members: 19,
            max_members: 25,
            level: Level::Beginner,
            subject: "English".to_string(),
            avg_study_hours: 2.8,
            is_joined: false,
            rank: None,
            weekly_goal: 15,
            current_weekly: None,
            top_members: Vec::new(),
        },
        StudyGroup {
            id: 4,
            name: "Applied organic chemistry".to_string(),
            description: "In-depth organic chemistry for medical school candidates".to_string(),
            members: 42,
            max_members: 60,
            level: Level::Advanced,
            subject: "Chemistry".to_string(),
            avg_study_hours: 5.1,
            is_joined: true,
            rank: Some(5),
            weekly_goal: 30,
            current_weekly: Some(22),
            top_members: Vec::new(),
        },
    ]
}

/// Split groups into the user's groups and searchable available ones
pub fn list_groups(search: &str) -> GroupListing {
    let (my_groups, others): (Vec<_>, Vec<_>) =
        study_groups().into_iter().partition(|g| g.is_joined);
    let search = search.trim();

    GroupListing {
        my_groups,
        available: others.into_iter().filter(|g| g.matches(search)).collect(),
    }
}

fn find_group(id: u32) -> Result<StudyGroup, CatalogError> {
    study_groups()
        .into_iter()
        .find(|g| g.id == id)
        .ok_or(CatalogError::GroupNotFound(id))
}

/// Request to join a group. Membership itself does not change.
pub fn join_group(id: u32) -> Result<Notification, CatalogError> {
    join_rules(&find_group(id)?)
}

fn join_rules(group: &StudyGroup) -> Result<Notification, CatalogError> {
    if group.is_joined {
        return Err(CatalogError::AlreadyMember(group.id));
    }
    if group.is_full() {
        return Err(CatalogError::GroupFull(group.id));
    }
    Ok(Notification::group_join_requested(&group.name))
}

/// Leave a group. Membership itself does not change.
pub fn leave_group(id: u32) -> Result<Notification, CatalogError> {
    let group = find_group(id)?;
    if !group.is_joined {
        return Err(CatalogError::NotAMember(id));
    }
    Ok(Notification::group_left(&group.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{NotificationKind, Severity};

    #[test]
    fn empty_search_lists_everything() {
        let listing = list_groups("");
        assert_eq!(listing.my_groups.len(), 2);
        assert_eq!(listing.available.len(), 2);
    }

    #[test]
    fn search_filters_available_groups_only() {
        let listing = list_groups("physics");
        assert_eq!(listing.my_groups.len(), 2);
        let ids: Vec<u32> = listing.available.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![2]);

        let listing = list_groups("English");
        assert_eq!(listing.available[0].id, 3);

        assert!(list_groups("biology").available.is_empty());
    }

    #[test]
    fn join_and_leave_rules() {
        let notification = join_group(2).unwrap();
        assert_eq!(notification.kind, NotificationKind::GroupJoinRequested);

        assert_eq!(join_group(1).unwrap_err(), CatalogError::AlreadyMember(1));
        assert_eq!(leave_group(3).unwrap_err(), CatalogError::NotAMember(3));
        assert_eq!(join_group(99).unwrap_err(), CatalogError::GroupNotFound(99));

        let notification = leave_group(4).unwrap();
        assert_eq!(notification.kind, NotificationKind::GroupLeft);
        assert_eq!(notification.severity, Severity::Destructive);
    }

    #[test]
    fn full_group_rejects_join() {
        let mut group = study_groups().remove(2);
        assert!(!group.is_full());
        assert!(join_rules(&group).is_ok());

        group.members = group.max_members;
        assert!(group.is_full());
        assert_eq!(join_rules(&group).unwrap_err(), CatalogError::GroupFull(3));
    }
}
