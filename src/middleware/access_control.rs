//! Access control interceptor
//!
//! Runs ahead of routing. Admin-area requests without matching credential
//! cookies are rewritten to the login view, and the short check-in aliases
//! are redirected to the canonical event check-in page.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::COOKIE, HeaderMap, Uri},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::config::AdminCredentials;
use crate::utils::logging;

pub const ADMIN_USERNAME_COOKIE: &str = "admin_uname";
pub const ADMIN_PASSWORD_COOKIE: &str = "admin_pass";

pub const LOGIN_PATH: &str = "/admin/login";
pub const INVALID_LOGIN_PATH: &str = "/admin/login?invalid";

/// Event id used when a check-in alias carries no id
pub const MISSING_EVENT_ID: &str = "notaevent";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    AdminArea,
    CheckinAlias,
}

struct RoutePattern {
    prefix: &'static str,
    rule: Rule,
}

impl RoutePattern {
    /// `/admin` matches `/admin` and `/admin/...` but not `/administrator`
    fn matches(&self, path: &str) -> bool {
        match path.strip_prefix(self.prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

/// Evaluated in order; the first matching pattern decides.
const ROUTE_TABLE: [RoutePattern; 3] = [
    RoutePattern {
        prefix: "/admin",
        rule: Rule::AdminArea,
    },
    RoutePattern {
        prefix: "/checkin",
        rule: Rule::CheckinAlias,
    },
    RoutePattern {
        prefix: "/check-in",
        rule: Rule::CheckinAlias,
    },
];

/// What to do with an inbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Serve the request as-is
    Passthrough,
    /// Serve a different path internally; the client sees its original URL
    Rewrite(&'static str),
    /// Send the client elsewhere
    Redirect(String),
}

impl AccessDecision {
    pub fn label(&self) -> &'static str {
        match self {
            AccessDecision::Passthrough => "passthrough",
            AccessDecision::Rewrite(_) => "rewrite",
            AccessDecision::Redirect(_) => "redirect",
        }
    }
}

/// Admin credential cookies carried by a request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminCookies {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl AdminCookies {
    pub fn new(username: Option<&str>, password: Option<&str>) -> Self {
        Self {
            username: username.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    /// Read both cookies from every `Cookie` header. The first occurrence of
    /// a name wins; values are percent-decoded.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut cookies = Self::default();

        let pairs = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='));

        for (name, value) in pairs {
            let slot = match name.trim() {
                ADMIN_USERNAME_COOKIE => &mut cookies.username,
                ADMIN_PASSWORD_COOKIE => &mut cookies.password,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(decode_cookie_value(value));
            }
        }

        cookies
    }

    fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

fn decode_cookie_value(value: &str) -> String {
    let value = value.trim().trim_matches('"');
    urlencoding::decode(value)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| value.to_string())
}

/// Path-level access control over a fixed admin credential pair
#[derive(Debug, Clone)]
pub struct AccessControl {
    credentials: AdminCredentials,
}

impl AccessControl {
    pub fn new(credentials: AdminCredentials) -> Self {
        Self { credentials }
    }

    /// Decide what happens to a request for `path` carrying `cookies`
    pub fn decide(&self, path: &str, cookies: &AdminCookies) -> AccessDecision {
        let rule = ROUTE_TABLE
            .iter()
            .find(|pattern| pattern.matches(path))
            .map(|pattern| pattern.rule);

        match rule {
            None => AccessDecision::Passthrough,
            Some(Rule::AdminArea) => self.check_admin(path, cookies),
            Some(Rule::CheckinAlias) => AccessDecision::Redirect(canonical_checkin_path(path)),
        }
    }

    // Plain equality against configuration; no hashing or sessions.
    fn check_admin(&self, path: &str, cookies: &AdminCookies) -> AccessDecision {
        let username_ok = cookies.username.as_deref() == Some(self.credentials.username.as_str());
        let password_ok = cookies.password.as_deref() == Some(self.credentials.password.as_str());

        if username_ok && password_ok {
            AccessDecision::Passthrough
        } else if cookies.is_empty() {
            AccessDecision::Rewrite(LOGIN_PATH)
        } else {
            logging::log_rejected_credentials(path, cookies.username.as_deref());
            AccessDecision::Rewrite(INVALID_LOGIN_PATH)
        }
    }
}

/// `/checkin/{id}/...` and `/check-in/{id}/...` to `/events/{id}/check-in`
fn canonical_checkin_path(path: &str) -> String {
    let event_id = path
        .split('/')
        .nth(2)
        .filter(|segment| !segment.is_empty())
        .unwrap_or(MISSING_EVENT_ID);

    format!("/events/{}/check-in", event_id)
}

/// Axum middleware applying [`AccessControl`] before routing
pub async fn access_control_middleware(
    State(access): State<Arc<AccessControl>>,
    mut request: Request,
    next: Next,
) -> Response {
    let cookies = AdminCookies::from_headers(request.headers());
    let decision = access.decide(request.uri().path(), &cookies);
    logging::log_access_decision(request.uri().path(), decision.label());

    match decision {
        AccessDecision::Passthrough => next.run(request).await,
        AccessDecision::Rewrite(target) => {
            *request.uri_mut() = Uri::from_static(target);
            next.run(request).await
        }
        AccessDecision::Redirect(location) => Redirect::temporary(&location).into_response(),
    }
}
