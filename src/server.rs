//! Application setup and router configuration

use std::sync::Arc;

use axum::{
    middleware,
    routing::{any, delete, get},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::Settings;
use crate::database::DatabaseService;
use crate::handlers;
use crate::middleware::{access_control_middleware, AccessControl};
use crate::services::CheckinService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub database: DatabaseService,
    pub checkins: CheckinService,
    pub access: Arc<AccessControl>,
}

impl AppState {
    pub fn new(database: DatabaseService, settings: &Settings) -> Self {
        Self {
            checkins: CheckinService::new(database.clone()),
            access: Arc::new(AccessControl::new(settings.admin.clone())),
            database,
        }
    }
}

fn routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .route(
            "/events/:id/check-in",
            get(handlers::get_checkin_window).post(handlers::submit_checkin),
        )
        .route("/members/:id/checkins", get(handlers::list_member_checkins))
        .route("/members/:id/status", get(handlers::get_membership_status))
        .route("/admin/login", any(handlers::login_view))
        .route(
            "/admin/events/:event_id/checkins",
            get(handlers::list_event_checkins),
        )
        .route(
            "/admin/events/:event_id/checkins/:member_id",
            delete(handlers::delete_checkin),
        )
        .with_state(state)
}

/// Build the application router.
///
/// Access control wraps the whole route table rather than individual routes,
/// so a rewritten URI is routed afresh.
pub fn build_app(state: AppState) -> Router {
    let access = state.access.clone();

    Router::new().fallback_service(routes(state)).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn_with_state(access, access_control_middleware)),
    )
}
