use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::models::Activity;

pub type ActivityMap = IndexMap<String, Activity>;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse seed file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("seed file contains an activity with an empty name")]
    EmptyName,
    #[error("{activity} must allow at least one participant")]
    ZeroCapacity { activity: String },
    #[error("{email} is listed more than once for {activity}")]
    DuplicateParticipant { activity: String, email: String },
}

/// The roster every process starts with.
pub fn default_activities() -> ActivityMap {
    let entries = [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Competitive basketball team for intramural and regional tournaments",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                15,
                &["alex@mergington.edu"],
            ),
        ),
        (
            "Tennis Club",
            Activity::new(
                "Learn tennis skills and compete in friendly matches",
                "Saturdays, 10:00 AM - 12:00 PM",
                12,
                &["james@mergington.edu", "isabella@mergington.edu"],
            ),
        ),
        (
            "Drama Club",
            Activity::new(
                "Perform in plays and musicals throughout the school year",
                "Thursdays, 4:00 PM - 5:30 PM",
                25,
                &["grace@mergington.edu", "lucas@mergington.edu"],
            ),
        ),
        (
            "Art Studio",
            Activity::new(
                "Explore painting, drawing, and sculpture techniques",
                "Tuesdays and Saturdays, 3:00 PM - 4:30 PM",
                18,
                &["noah@mergington.edu"],
            ),
        ),
        (
            "Debate Team",
            Activity::new(
                "Develop public speaking and critical thinking skills",
                "Wednesdays and Fridays, 3:30 PM - 4:30 PM",
                16,
                &[
                    "ava@mergington.edu",
                    "mason@mergington.edu",
                    "chloe@mergington.edu",
                ],
            ),
        ),
        (
            "Science Club",
            Activity::new(
                "Conduct experiments and explore STEM topics",
                "Mondays, 4:00 PM - 5:00 PM",
                24,
                &["ethan@mergington.edu"],
            ),
        ),
    ];

    entries
        .into_iter()
        .map(|(name, activity)| (name.to_string(), activity))
        .collect()
}

/// Reads a JSON object of activity name -> activity. Key order in the file
/// becomes the listing order.
pub fn load_from_file(path: &Path) -> Result<ActivityMap, SeedError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let activities: ActivityMap =
        serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    validate(&activities)?;
    Ok(activities)
}

pub fn validate(activities: &ActivityMap) -> Result<(), SeedError> {
    for (name, activity) in activities {
        if name.is_empty() {
            return Err(SeedError::EmptyName);
        }
        if activity.max_participants == 0 {
            return Err(SeedError::ZeroCapacity {
                activity: name.clone(),
            });
        }
        for (idx, email) in activity.participants.iter().enumerate() {
            if activity.participants[..idx].contains(email) {
                return Err(SeedError::DuplicateParticipant {
                    activity: name.clone(),
                    email: email.clone(),
                });
            }
        }
    }
    Ok(())
}
