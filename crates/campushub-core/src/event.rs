// Event domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Category used by the seeded catalog.
///
/// The store keeps the category as an open string, so events outside these
/// four are representable; the enum exists for the fixed catalog and tests.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub enum EventCategory {
    Technical,
    Cultural,
    Sports,
    Others,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Technical => write!(f, "Technical"),
            EventCategory::Cultural => write!(f, "Cultural"),
            EventCategory::Sports => write!(f, "Sports"),
            EventCategory::Others => write!(f, "Others"),
        }
    }
}

/// A catalog event. Created by seeding, read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Event {
    /// Store-assigned identifier, serialized in plain string form
    pub id: Uuid,
    pub name: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codename: Option<String>,
}
