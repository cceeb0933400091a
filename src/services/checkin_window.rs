//! Check-in window gate

use chrono::{DateTime, Utc};

use crate::models::Event;

/// Whether check-ins for `event` are accepted at `now`.
///
/// Both bounds are inclusive. An event whose form closes before it opens is
/// never open.
pub fn is_open(event: &Event, now: DateTime<Utc>) -> bool {
    event.form_open <= now && now <= event.form_close
}
