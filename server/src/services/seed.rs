//! Catalog seeding: the built-in Mergington High School activities, or a
//! JSON file supplied through `ACTIVITIES_FILE`.

use std::path::{Path, PathBuf};

use roster::{Activity, Catalog};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// (name, description, schedule, max participants, initial participants)
type SeedRow = (&'static str, &'static str, &'static str, u32, &'static [&'static str]);

const DEFAULT_ACTIVITIES: &[SeedRow] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Competitive basketball team and practice sessions",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        15,
        &["alex@mergington.edu"],
    ),
    (
        "Tennis Club",
        "Learn tennis skills and play in friendly matches",
        "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
        10,
        &["jordan@mergington.edu"],
    ),
    (
        "Drama Club",
        "Perform in school plays and develop acting skills",
        "Wednesdays, 3:30 PM - 5:30 PM",
        25,
        &["sarah@mergington.edu"],
    ),
    (
        "Art Studio",
        "Explore painting, drawing, and sculpture",
        "Thursdays, 3:30 PM - 5:00 PM",
        18,
        &["mia@mergington.edu"],
    ),
    (
        "Math Olympiad",
        "Solve challenging problems and compete in math competitions",
        "Tuesdays, 3:30 PM - 4:30 PM",
        15,
        &["noah@mergington.edu"],
    ),
    (
        "Debate Team",
        "Develop argumentation and public speaking skills",
        "Fridays, 4:00 PM - 5:30 PM",
        16,
        &["ava@mergington.edu"],
    ),
];

/// The built-in catalog.
#[must_use]
pub fn default_catalog() -> Catalog {
    DEFAULT_ACTIVITIES
        .iter()
        .map(|(name, description, schedule, max_participants, participants)| {
            let activity = Activity {
                description: (*description).to_owned(),
                schedule: (*schedule).to_owned(),
                max_participants: *max_participants,
                participants: participants.iter().map(|p| (*p).to_owned()).collect(),
            };
            ((*name).to_owned(), activity)
        })
        .collect()
}

/// Load a catalog from a JSON object of `name -> activity`.
///
/// # Errors
///
/// Returns [`SeedError::Read`] if the file cannot be read and
/// [`SeedError::Parse`] if it is not a valid catalog.
pub fn load_catalog(path: &Path) -> Result<Catalog, SeedError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Read { path: path.to_owned(), source })?;
    parse_catalog(&raw).map_err(|source| SeedError::Parse { path: path.to_owned(), source })
}

pub(crate) fn parse_catalog(raw: &str) -> Result<Catalog, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Pick the seed for startup: the configured file, or the built-in catalog.
///
/// # Errors
///
/// Propagates [`load_catalog`] failures.
pub fn initial_catalog(activities_file: Option<&Path>) -> Result<Catalog, SeedError> {
    match activities_file {
        Some(path) => load_catalog(path),
        None => Ok(default_catalog()),
    }
}

#[cfg(test)]
#[path = "seed_test.rs"]
mod tests;
