// User-facing profile types
//
// A Registration is a snapshot of the event's name and category taken at
// registration time. Later catalog edits never rewrite prior snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Snapshot appended to a user's profile when they register for an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Registration {
    pub event_name: String,
    pub category: String,
    pub registered_at: DateTime<Utc>,
}

/// Public view of a user account. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Profile {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub registered_events: Vec<Registration>,
}
