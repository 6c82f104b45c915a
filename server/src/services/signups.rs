//! Sign-up service: list, join and leave activities.
//!
//! DESIGN
//! ======
//! Every call works on the in-memory catalog in `AppState`. Listing clones a
//! snapshot under the read lock; mutations hold the write lock for the whole
//! check-and-mutate so two racing sign-ups for the last spot resolve to one
//! success and one `ActivityFull`.

use roster::{Catalog, MessageBody, RosterError};
use tracing::{info, warn};

use crate::state::AppState;

/// Snapshot of the whole catalog.
pub async fn list_activities(state: &AppState) -> Catalog {
    state.catalog.read().await.clone()
}

/// Sign `email` up for `activity`.
///
/// # Errors
///
/// Returns the [`RosterError`] produced by the catalog rules.
pub async fn signup(state: &AppState, activity: &str, email: &str) -> Result<MessageBody, RosterError> {
    let mut catalog = state.catalog.write().await;
    match roster::signup(&mut catalog, activity, email) {
        Ok(()) => {
            info!(%activity, %email, "participant signed up");
            Ok(MessageBody::new(format!("Signed up {email} for {activity}")))
        }
        Err(e) => {
            warn!(%activity, %email, error = %e, "signup rejected");
            Err(e)
        }
    }
}

/// Remove `email` from `activity`.
///
/// # Errors
///
/// Returns the [`RosterError`] produced by the catalog rules.
pub async fn remove(state: &AppState, activity: &str, email: &str) -> Result<MessageBody, RosterError> {
    let mut catalog = state.catalog.write().await;
    match roster::remove(&mut catalog, activity, email) {
        Ok(()) => {
            info!(%activity, %email, "participant removed");
            Ok(MessageBody::new(format!("Removed {email} from {activity}")))
        }
        Err(e) => {
            warn!(%activity, %email, error = %e, "removal rejected");
            Err(e)
        }
    }
}

#[cfg(test)]
#[path = "signups_test.rs"]
mod tests;
