//! Test context for unified test setup
//!
//! Builds the full router over in-memory storage so HTTP flows, including
//! the access-control middleware, can be exercised without a database.

use std::sync::{Arc, Once};

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use checkin_portal::config::Settings;
use checkin_portal::database::{DatabaseService, InMemoryCheckinStore, InMemoryEventSource};
use checkin_portal::models::Event;
use checkin_portal::server::{build_app, AppState};

use super::test_data::test_settings;

static INIT: Once = Once::new();

/// Initialize test logging once per test binary
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt::try_init();
    });
}

/// Response captured from the router
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }
}

/// Unified test context over in-memory storage
pub struct TestContext {
    pub settings: Settings,
    pub checkins: Arc<InMemoryCheckinStore>,
    pub events: Arc<InMemoryEventSource>,
    pub app: Router,
}

impl TestContext {
    /// Create a new test context with default test settings
    pub fn new() -> Self {
        Self::new_with_settings(test_settings())
    }

    pub fn new_with_settings(settings: Settings) -> Self {
        init_test_env();

        let checkins = Arc::new(InMemoryCheckinStore::new());
        let events = Arc::new(InMemoryEventSource::new());
        let database = DatabaseService::from_stores(checkins.clone(), events.clone());
        let app = build_app(AppState::new(database, &settings));

        Self {
            settings,
            checkins,
            events,
            app,
        }
    }

    pub async fn add_event(&self, event: Event) {
        self.events.insert(event).await;
    }

    /// Send a request through the full router
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None, None).await
    }

    pub async fn get_with_cookie(&self, uri: &str, cookie: &str) -> TestResponse {
        self.send(Method::GET, uri, Some(cookie), None).await
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> TestResponse {
        self.send(Method::POST, uri, None, Some(body)).await
    }
}
