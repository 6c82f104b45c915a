//! Activity routes: list, sign up, remove.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use roster::{Catalog, ErrorBody, MessageBody, RosterError};
use serde::Deserialize;

use crate::services::signups;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

type ApiResult = Result<Json<MessageBody>, (StatusCode, Json<ErrorBody>)>;

/// `GET /activities` — the whole catalog.
pub async fn list_activities(State(state): State<AppState>) -> Json<Catalog> {
    Json(signups::list_activities(&state).await)
}

/// `POST /activities/:activity/signup?email=` — join an activity.
pub async fn signup(
    State(state): State<AppState>,
    Path(activity): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> ApiResult {
    let Query(query) = query.map_err(query_rejection_response)?;
    signups::signup(&state, &activity, &query.email)
        .await
        .map(Json)
        .map_err(roster_error_response)
}

/// `DELETE /activities/:activity/remove?email=` — leave an activity.
pub async fn remove(
    State(state): State<AppState>,
    Path(activity): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> ApiResult {
    let Query(query) = query.map_err(query_rejection_response)?;
    signups::remove(&state, &activity, &query.email)
        .await
        .map(Json)
        .map_err(roster_error_response)
}

pub(crate) fn roster_error_to_status(err: &RosterError) -> StatusCode {
    match err {
        RosterError::ActivityNotFound(_) => StatusCode::NOT_FOUND,
        RosterError::AlreadySignedUp { .. } | RosterError::NotSignedUp { .. } | RosterError::ActivityFull(_) => {
            StatusCode::BAD_REQUEST
        }
    }
}

fn roster_error_response(err: RosterError) -> (StatusCode, Json<ErrorBody>) {
    (roster_error_to_status(&err), Json(ErrorBody::from(&err)))
}

/// Missing or malformed `email` comes back as 422 with a JSON `detail`, the
/// same shape as every other rejection.
fn query_rejection_response(rejection: QueryRejection) -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorBody { detail: rejection.body_text() }))
}

#[cfg(test)]
#[path = "activities_test.rs"]
mod tests;
