// Profile service: event registration and profile lookup

use std::sync::Arc;

use campushub_core::{Profile, Registration, Result, ServiceError};
use campushub_storage::Database;
use chrono::Utc;
use uuid::Uuid;

pub struct ProfileService {
    db: Arc<Database>,
}

impl ProfileService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Register `username` for the event with id `event_id`.
    ///
    /// The appended entry snapshots the event's name and category at call
    /// time; later catalog edits never rewrite it. Registering twice for the
    /// same event appends twice.
    pub async fn register_event(&self, username: &str, event_id: &str) -> Result<()> {
        let user = self
            .db
            .get_user_by_username(username)
            .await?
            .ok_or(ServiceError::UserNotFound)?;

        // Malformed ids are a distinct outcome, not folded into not-found
        let id = Uuid::parse_str(event_id)
            .map_err(|_| ServiceError::malformed(format!("not a valid event id: {event_id}")))?;

        let event = self
            .db
            .get_event(id)
            .await?
            .ok_or(ServiceError::EventNotFound)?;

        let registration = Registration {
            event_name: event.name,
            category: event.category,
            registered_at: Utc::now(),
        };

        let appended = self
            .db
            .append_registration(&user.username, &registration)
            .await?;
        if !appended {
            // The user row vanished between lookup and append
            return Err(ServiceError::UserNotFound);
        }

        Ok(())
    }

    pub async fn get_profile(&self, username: &str) -> Result<Profile> {
        let user = self
            .db
            .get_user_by_username(username)
            .await?
            .ok_or(ServiceError::UserNotFound)?;

        // Earlier seed variants disagreed on the field's presence; anything
        // unparseable reads as no registrations
        let registered_events: Vec<Registration> =
            serde_json::from_value(user.registered_events).unwrap_or_default();

        Ok(Profile {
            username: user.username,
            email: user.email,
            registered_events,
        })
    }
}
