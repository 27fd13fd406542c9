use parking_lot::RwLock;

use crate::database::seed::{self, ActivityMap};
use crate::models::Activity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    #[error("Activity not found")]
    NotFound,
    #[error("{email} is already signed up")]
    AlreadySignedUp { email: String },
    #[error("{email} is not registered for this activity")]
    NotRegistered { email: String },
}

impl DirectoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DirectoryError::NotFound => ErrorKind::NotFound,
            DirectoryError::AlreadySignedUp { .. } | DirectoryError::NotRegistered { .. } => {
                ErrorKind::Conflict
            }
        }
    }
}

/// Result of a successful enroll or withdraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterChange {
    pub activity: String,
    pub email: String,
}

/// In-memory activity name -> activity mapping.
///
/// The set of names is fixed at construction; only rosters change. Every
/// roster mutation holds the write lock across the membership check and the
/// update, so concurrent signups for the same email cannot both succeed.
pub struct ActivityDirectory {
    activities: RwLock<ActivityMap>,
}

impl ActivityDirectory {
    pub fn new(activities: ActivityMap) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    /// Directory populated with the built-in school roster.
    pub fn seeded() -> Self {
        Self::new(seed::default_activities())
    }

    /// Snapshot of every activity, in directory order.
    pub fn list(&self) -> ActivityMap {
        self.activities.read().clone()
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<Activity> {
        self.activities.read().get(name).cloned()
    }

    // max_participants is advertised only; a full activity still accepts signups.
    pub fn enroll(&self, name: &str, email: &str) -> Result<RosterChange, DirectoryError> {
        let mut activities = self.activities.write();
        let activity = activities.get_mut(name).ok_or(DirectoryError::NotFound)?;
        if activity.is_signed_up(email) {
            return Err(DirectoryError::AlreadySignedUp {
                email: email.to_string(),
            });
        }
        activity.participants.push(email.to_string());
        Ok(RosterChange {
            activity: name.to_string(),
            email: email.to_string(),
        })
    }

    pub fn withdraw(&self, name: &str, email: &str) -> Result<RosterChange, DirectoryError> {
        let mut activities = self.activities.write();
        let activity = activities.get_mut(name).ok_or(DirectoryError::NotFound)?;
        let idx = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| DirectoryError::NotRegistered {
                email: email.to_string(),
            })?;
        activity.participants.remove(idx);
        Ok(RosterChange {
            activity: name.to_string(),
            email: email.to_string(),
        })
    }
}

impl Default for ActivityDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn roster(dir: &ActivityDirectory, name: &str) -> Vec<String> {
        dir.get(name).unwrap().participants
    }

    #[test]
    fn enroll_appends_to_end_of_roster() {
        let dir = ActivityDirectory::seeded();
        let change = dir.enroll("Chess Club", "new@x.edu").unwrap();
        assert_eq!(change.activity, "Chess Club");
        assert_eq!(change.email, "new@x.edu");
        assert_eq!(
            roster(&dir, "Chess Club"),
            vec!["michael@mergington.edu", "daniel@mergington.edu", "new@x.edu"]
        );
    }

    #[test]
    fn enroll_twice_is_a_conflict_and_leaves_roster_alone() {
        let dir = ActivityDirectory::seeded();
        let before = roster(&dir, "Chess Club");
        let err = dir.enroll("Chess Club", "michael@mergington.edu").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(err.to_string(), "michael@mergington.edu is already signed up");
        assert_eq!(roster(&dir, "Chess Club"), before);
    }

    #[test]
    fn unknown_activity_is_not_found() {
        let dir = ActivityDirectory::seeded();
        let err = dir.enroll("Nonexistent", "a@x.edu").unwrap_err();
        assert_eq!(err, DirectoryError::NotFound);
        assert_eq!(err.to_string(), "Activity not found");
        assert_eq!(
            dir.withdraw("Nonexistent", "a@x.edu").unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn names_are_matched_exactly() {
        let dir = ActivityDirectory::seeded();
        assert_eq!(dir.enroll("chess club", "a@x.edu").unwrap_err(), DirectoryError::NotFound);
        assert_eq!(dir.enroll("Chess Club ", "a@x.edu").unwrap_err(), DirectoryError::NotFound);
    }

    #[test]
    fn withdraw_removes_only_the_matching_email() {
        let dir = ActivityDirectory::seeded();
        dir.withdraw("Debate Team", "mason@mergington.edu").unwrap();
        assert_eq!(
            roster(&dir, "Debate Team"),
            vec!["ava@mergington.edu", "chloe@mergington.edu"]
        );
    }

    #[test]
    fn withdraw_of_absent_email_is_not_registered() {
        let dir = ActivityDirectory::seeded();
        let err = dir.withdraw("Chess Club", "ghost@x.edu").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert!(err.to_string().contains("not registered"));
    }

    #[test]
    fn enroll_then_withdraw_restores_exact_roster() {
        let dir = ActivityDirectory::seeded();
        let before = roster(&dir, "Debate Team");
        dir.enroll("Debate Team", "zoe@mergington.edu").unwrap();
        dir.withdraw("Debate Team", "zoe@mergington.edu").unwrap();
        assert_eq!(roster(&dir, "Debate Team"), before);
    }

    #[test]
    fn capacity_is_not_enforced() {
        let mut activities = ActivityMap::new();
        activities.insert(
            "Tiny".to_string(),
            Activity::new("one seat", "Never", 1, &["a@x.edu"]),
        );
        let dir = ActivityDirectory::new(activities);
        dir.enroll("Tiny", "b@x.edu").unwrap();
        assert_eq!(roster(&dir, "Tiny").len(), 2);
    }

    #[test]
    fn list_preserves_seed_order_and_reflects_mutations() {
        let dir = ActivityDirectory::seeded();
        dir.enroll("Art Studio", "s1@mergington.edu").unwrap();
        let listed = dir.list();
        let names: Vec<&str> = listed.keys().map(String::as_str).collect();
        assert_eq!(names[0], "Chess Club");
        assert_eq!(names.len(), 9);
        assert!(listed["Art Studio"]
            .participants
            .contains(&"s1@mergington.edu".to_string()));
    }

    #[test]
    fn fresh_directory_starts_from_seed() {
        let dir = ActivityDirectory::seeded();
        dir.enroll("Chess Club", "new@x.edu").unwrap();
        assert_eq!(ActivityDirectory::seeded().list(), seed::default_activities());
    }

    #[test]
    fn concurrent_enrolls_of_same_email_admit_exactly_one() {
        let dir = Arc::new(ActivityDirectory::seeded());
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let dir = Arc::clone(&dir);
                std::thread::spawn(move || dir.enroll("Gym Class", "racer@x.edu").is_ok())
            })
            .collect();
        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(successes, 1);
        let gym = roster(&dir, "Gym Class");
        assert_eq!(gym.iter().filter(|e| *e == "racer@x.edu").count(), 1);
    }
}
