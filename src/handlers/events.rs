//! Event check-in handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use crate::models::{CheckinSubmission, CheckinWindowStatus};
use crate::server::AppState;
use crate::services::CheckinOutcome;
use crate::utils::errors::Result;

/// `GET /events/:id/check-in`
pub async fn get_checkin_window(
    State(state): State<AppState>,
    Path(page_id): Path<String>,
) -> Result<Json<CheckinWindowStatus>> {
    let status = state.checkins.window_status(&page_id, Utc::now()).await?;
    Ok(Json(status))
}

/// `POST /events/:id/check-in`
pub async fn submit_checkin(
    State(state): State<AppState>,
    Path(page_id): Path<String>,
    Json(submission): Json<CheckinSubmission>,
) -> Result<Response> {
    // The window is checked against the time of this request, never cached.
    let outcome = state
        .checkins
        .submit(&page_id, &submission, Utc::now())
        .await?;

    let response = match outcome {
        CheckinOutcome::Recorded(checkin) => (StatusCode::CREATED, Json(checkin)).into_response(),
        CheckinOutcome::AlreadyCheckedIn => (
            StatusCode::CONFLICT,
            Json(serde_json::json!({
                "error": "Already checked in",
                "member_id": submission.member_id.trim(),
            })),
        )
            .into_response(),
    };

    Ok(response)
}
