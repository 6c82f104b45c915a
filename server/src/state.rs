//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the activity catalog behind a single `RwLock`. Sign-up and
//! removal hold the write lock across check-and-mutate, so capacity and
//! duplicate checks cannot interleave with another writer.

use std::sync::Arc;

use roster::Catalog;
use tokio::sync::RwLock;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the catalog is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RwLock<Catalog>>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog: Arc::new(RwLock::new(catalog)) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
