// Repository layer for database operations

use anyhow::Result;
use campushub_core::Registration;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::*;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create database connection from URL
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run embedded migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::debug!("Database migrations applied");
        Ok(())
    }

    // ============================================
    // Users
    // ============================================

    pub async fn create_user(&self, input: CreateUser) -> Result<UserRow> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, username, email, password_hash, registered_events)
            VALUES ($1, $2, $3, $4, '[]'::jsonb)
            RETURNING id, username, email, password_hash, registered_events, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&input.username)
        .bind(&input.email)
        .bind(&input.password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, password_hash, registered_events, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Look up by username OR email in one query (login accepts either).
    pub async fn get_user_by_login(&self, login: &str) -> Result<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, password_hash, registered_events, created_at
            FROM users
            WHERE username = $1 OR email = $1
            "#,
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Duplicate-identity check used by account creation: matches a user
    /// holding either the username or the email.
    pub async fn get_user_by_identity(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, password_hash, registered_events, created_at
            FROM users
            WHERE username = $1 OR email = $2
            "#,
        )
        .bind(username)
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Append one registration snapshot to the user's list.
    ///
    /// A single-row UPDATE, so concurrent appends to the same user serialize
    /// inside the store and neither is lost. Returns false when no user row
    /// matched.
    pub async fn append_registration(
        &self,
        username: &str,
        registration: &Registration,
    ) -> Result<bool> {
        let entry = serde_json::to_value(registration)?;

        let result = sqlx::query(
            r#"
            UPDATE users
            SET registered_events = registered_events || $2
            WHERE username = $1
            "#,
        )
        .bind(username)
        .bind(&entry)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    // ============================================
    // Events
    // ============================================

    pub async fn get_event(&self, id: Uuid) -> Result<Option<EventRow>> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, name, category, codename, created_at
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn list_events(&self) -> Result<Vec<EventRow>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, name, category, codename, created_at
            FROM events
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn count_events(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn insert_events(&self, inputs: &[CreateEvent]) -> Result<u64> {
        let mut inserted = 0;
        for input in inputs {
            sqlx::query(
                r#"
                INSERT INTO events (id, name, category, codename)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(Uuid::now_v7())
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.codename)
            .execute(&self.pool)
            .await?;
            inserted += 1;
        }

        Ok(inserted)
    }

    pub async fn delete_all_events(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM events").execute(&self.pool).await?;

        Ok(result.rows_affected())
    }
}

/// True when the error is a Postgres unique-constraint violation.
/// Account creation maps this onto the same Conflict as the pre-insert check.
pub fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .and_then(|db| db.code())
        .map(|code| code == "23505")
        .unwrap_or(false)
}
