//! Test data helpers for creating test objects

use chrono::{DateTime, Duration, Utc};

use checkin_portal::config::{AdminCredentials, Settings, StorageBackend};
use checkin_portal::models::Event;

pub const TEST_ADMIN_USERNAME: &str = "alice";
pub const TEST_ADMIN_PASSWORD: &str = "secret";

/// Settings for an in-memory portal with `alice`/`secret` admin credentials
pub fn test_settings() -> Settings {
    let mut settings = Settings::default();
    settings.storage.backend = StorageBackend::Memory;
    settings.admin = AdminCredentials::new(TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD);
    settings
}

/// Event whose check-in form is open between `form_open` and `form_close`
pub fn create_test_event(
    id: &str,
    page_id: &str,
    form_open: DateTime<Utc>,
    form_close: DateTime<Utc>,
) -> Event {
    Event {
        id: id.to_string(),
        page_id: page_id.to_string(),
        name: "Spring Social".to_string(),
        organization: Some("ACM".to_string()),
        location: Some("Student Union".to_string()),
        event_start: form_open,
        event_end: form_close,
        form_open,
        form_close,
    }
}

/// Event that is accepting check-ins right now
pub fn create_open_event(id: &str, page_id: &str) -> Event {
    let now = Utc::now();
    create_test_event(id, page_id, now - Duration::hours(1), now + Duration::hours(1))
}

/// Event whose check-in form has already closed
pub fn create_closed_event(id: &str, page_id: &str) -> Event {
    let now = Utc::now();
    create_test_event(id, page_id, now - Duration::days(2), now - Duration::days(1))
}

/// `Cookie` header value carrying admin credentials
pub fn admin_cookie_header(username: &str, password: &str) -> String {
    format!("admin_uname={}; admin_pass={}", username, password)
}

/// Unique id for tests sharing a database
pub fn unique_id(prefix: &str) -> String {
    format!("{}_{}", prefix, uuid::Uuid::new_v4().simple())
}
