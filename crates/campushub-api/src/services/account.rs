// Account service: creation and login

use std::sync::Arc;

use campushub_core::{Result, ServiceError};
use campushub_storage::{is_unique_violation, password, CreateUser, Database};

pub struct AccountService {
    db: Arc<Database>,
}

impl AccountService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Create a new account with an empty registration list.
    ///
    /// The username and email must both be unused; either match is a
    /// Conflict.
    pub async fn create_account(&self, username: &str, email: &str, password: &str) -> Result<()> {
        let existing = self.db.get_user_by_identity(username, email).await?;
        if existing.is_some() {
            return Err(ServiceError::Conflict);
        }

        let password_hash = password::hash_password(password)?;

        let input = CreateUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
        };

        match self.db.create_user(input).await {
            Ok(_) => Ok(()),
            // Two requests can pass the lookup concurrently; the unique
            // indexes turn the loser into the same Conflict
            Err(e) if is_unique_violation(&e) => Err(ServiceError::Conflict),
            Err(e) => Err(ServiceError::Internal(e)),
        }
    }

    /// Verify credentials; `login` may be the username or the email.
    /// Returns the canonical username on success.
    pub async fn login(&self, login: &str, password: &str) -> Result<String> {
        let user = self
            .db
            .get_user_by_login(login)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        if !password::verify_password(password, &user.password_hash) {
            return Err(ServiceError::InvalidCredentials);
        }

        Ok(user.username)
    }
}
