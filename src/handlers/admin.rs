//! Admin area handlers
//!
//! Everything under `/admin` is reached only through the access-control
//! middleware, which rewrites unauthenticated requests to [`login_view`].

use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::models::Checkin;
use crate::server::AppState;
use crate::utils::errors::Result;

#[derive(Debug, Serialize)]
pub struct LoginView {
    pub login_required: bool,
    /// Set when the request carried credentials that did not match
    pub invalid: bool,
}

/// `/admin/login`, any method. Rewritten admin requests keep their own
/// method, so a rejected `DELETE` or `POST` lands here too.
pub async fn login_view(RawQuery(query): RawQuery) -> (StatusCode, Json<LoginView>) {
    let invalid = query
        .as_deref()
        .map(|q| q.split('&').any(|part| part == "invalid" || part.starts_with("invalid=")))
        .unwrap_or(false);

    (
        StatusCode::UNAUTHORIZED,
        Json(LoginView {
            login_required: true,
            invalid,
        }),
    )
}

/// `GET /admin/events/:event_id/checkins`
pub async fn list_event_checkins(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<Vec<Checkin>>> {
    Ok(Json(state.checkins.event_checkins(&event_id).await?))
}

/// `DELETE /admin/events/:event_id/checkins/:member_id`
pub async fn delete_checkin(
    State(state): State<AppState>,
    Path((event_id, member_id)): Path<(String, String)>,
) -> Result<Json<Checkin>> {
    Ok(Json(state.checkins.remove_checkin(&member_id, &event_id).await?))
}
