//! Shared activity roster model.
//!
//! This crate owns the JSON shapes exchanged between `server` and `cli`:
//! the activity catalog and the success/error response bodies. Catalog
//! mutations live here too so both the HTTP service and tests apply the
//! same sign-up rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Error returned by catalog mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    /// No activity with this name exists in the catalog.
    #[error("Activity not found")]
    ActivityNotFound(String),
    /// The email is already on the participant list.
    #[error("Student {email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },
    /// The email is not on the participant list.
    #[error("Student {email} is not signed up for {activity}")]
    NotSignedUp { activity: String, email: String },
    /// Every spot is taken.
    #[error("Activity is full: {0}")]
    ActivityFull(String),
}

/// A single activity and its current participants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Never negative, even if a seed file overfills it.
    #[must_use]
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.spots_left() == 0
    }

    #[must_use]
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// Activity name -> activity, iterated in name order.
pub type Catalog = BTreeMap<String, Activity>;

/// Body of a successful sign-up or removal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Body of a rejected request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl From<&RosterError> for ErrorBody {
    fn from(err: &RosterError) -> Self {
        Self { detail: err.to_string() }
    }
}

// =============================================================================
// MUTATIONS
// =============================================================================

/// Add `email` to the named activity.
///
/// # Errors
///
/// Checked in order: [`RosterError::ActivityNotFound`],
/// [`RosterError::AlreadySignedUp`], [`RosterError::ActivityFull`].
pub fn signup(catalog: &mut Catalog, activity: &str, email: &str) -> Result<(), RosterError> {
    let entry = catalog
        .get_mut(activity)
        .ok_or_else(|| RosterError::ActivityNotFound(activity.to_owned()))?;

    if entry.has_participant(email) {
        return Err(RosterError::AlreadySignedUp { activity: activity.to_owned(), email: email.to_owned() });
    }
    if entry.is_full() {
        return Err(RosterError::ActivityFull(activity.to_owned()));
    }

    entry.participants.push(email.to_owned());
    Ok(())
}

/// Remove `email` from the named activity, keeping the order of the rest.
///
/// # Errors
///
/// Returns [`RosterError::ActivityNotFound`] or [`RosterError::NotSignedUp`].
pub fn remove(catalog: &mut Catalog, activity: &str, email: &str) -> Result<(), RosterError> {
    let entry = catalog
        .get_mut(activity)
        .ok_or_else(|| RosterError::ActivityNotFound(activity.to_owned()))?;

    let Some(index) = entry.participants.iter().position(|p| p == email) else {
        return Err(RosterError::NotSignedUp { activity: activity.to_owned(), email: email.to_owned() });
    };
    entry.participants.remove(index);
    Ok(())
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
