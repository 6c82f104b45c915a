//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the activity API and serves the browser controller
//! (`index.html`, `app.js`, `styles.css`) as static files under `/static`.
//! The site root redirects to the controller page.

pub mod activities;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{delete, get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub const INDEX_PATH: &str = "/static/index.html";

/// Activity API routes.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/activities", get(activities::list_activities))
        .route("/activities/{activity}/signup", post(activities::signup))
        .route("/activities/{activity}/remove", delete(activities::remove))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full application: API, static controller assets, and the root redirect.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api_routes(state)
        .route("/", get(redirect_root_to_index))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn redirect_root_to_index() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
