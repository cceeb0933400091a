//! Member history handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::models::{Checkin, MembershipStatus};
use crate::server::AppState;
use crate::utils::errors::Result;

/// `GET /members/:id/checkins`
pub async fn list_member_checkins(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> Result<Json<Vec<Checkin>>> {
    Ok(Json(state.checkins.member_checkins(&member_id).await?))
}

/// `GET /members/:id/status`
pub async fn get_membership_status(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> Result<Json<MembershipStatus>> {
    Ok(Json(state.checkins.membership_status(&member_id).await?))
}
