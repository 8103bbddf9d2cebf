// Event catalog service: listing, startup seed, admin reset

use std::sync::Arc;

use campushub_core::{default_catalog, Event, Result};
use campushub_storage::{CreateEvent, Database, EventRow};

pub struct EventService {
    db: Arc<Database>,
}

impl EventService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Event>> {
        let rows = self.db.list_events().await?;
        Ok(rows.into_iter().map(row_to_event).collect())
    }

    /// Idempotent startup seed: inserts the default catalog only when the
    /// events collection is empty. Returns whether anything was inserted.
    pub async fn seed_defaults(&self) -> Result<bool> {
        if self.db.count_events().await? > 0 {
            return Ok(false);
        }

        self.db.insert_events(&catalog_rows()).await?;
        Ok(true)
    }

    /// Destructive reset: drops every event and reinserts the default
    /// catalog. Reached only through the admin endpoint, never implicitly.
    pub async fn reset(&self) -> Result<u64> {
        self.db.delete_all_events().await?;
        let inserted = self.db.insert_events(&catalog_rows()).await?;
        Ok(inserted)
    }
}

fn catalog_rows() -> Vec<CreateEvent> {
    default_catalog()
        .iter()
        .map(|entry| CreateEvent {
            name: entry.name.to_string(),
            category: entry.category.to_string(),
            codename: None,
        })
        .collect()
}

fn row_to_event(row: EventRow) -> Event {
    Event {
        id: row.id,
        name: row.name,
        category: row.category,
        codename: row.codename,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_rows_cover_the_default_set() {
        let rows = catalog_rows();
        assert_eq!(rows.len(), 12);
        for category in ["Technical", "Cultural", "Sports", "Others"] {
            let count = rows.iter().filter(|r| r.category == category).count();
            assert_eq!(count, 3);
        }
        assert!(rows.iter().all(|r| r.codename.is_none()));
    }
}
