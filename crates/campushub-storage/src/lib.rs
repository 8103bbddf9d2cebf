// Postgres storage layer with sqlx
//
// Provides the Database handle the services are constructed with. The handle
// is explicitly injected at startup; there is no process-wide connection
// singleton.

pub mod models;
pub mod password;
pub mod repositories;

pub use models::*;
pub use repositories::{is_unique_violation, Database};
