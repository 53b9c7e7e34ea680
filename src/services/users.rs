//! User management service

use sha2::{Digest, Sha256};

use crate::{
    config::SecurityConfig,
    error::AppResult,
    models::{string_field, CreateUser, DeleteOutcome, NewUser, UpdateOutcome, UpdateUser, User},
    repository::{parse_id, Repository},
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
    config: SecurityConfig,
}

impl UsersService {
    pub fn new(repository: Repository, config: SecurityConfig) -> Self {
        if !config.has_pepper() {
            tracing::warn!(
                "security.pepper is empty; passwords are hashed with plain SHA-256 (set SECRETPEPPER)"
            );
        }
        Self { repository, config }
    }

    /// SHA-256 of `value` followed by the configured pepper, as lowercase hex.
    ///
    /// Deterministic: there is no per-user salt, so equal passwords share a digest.
    pub fn hash_string(&self, value: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(value.as_bytes());
        hasher.update(self.config.pepper.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Hash the password and store the user
    pub async fn create_user(&self, user: CreateUser) -> AppResult<()> {
        let password = string_field("password", user.password)?;

        let user = NewUser {
            name: string_field("name", user.name)?,
            password: self.hash_string(&password),
            role: string_field("role", user.role)?,
        };

        let id = self.repository.users.insert(&user).await?;
        tracing::info!(user_id = %id, role = %user.role, "User created");
        Ok(())
    }

    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repository.users.find_all().await
    }

    pub async fn find_users(&self, name: &str) -> AppResult<Vec<User>> {
        self.repository.users.find_by_name(name).await
    }

    /// Apply a partial update; a supplied password is hashed first
    pub async fn update_user(&self, id: &str, mut user: UpdateUser) -> AppResult<UpdateOutcome> {
        let id = parse_id(id)?;
        if let Some(password) = user.password.take() {
            user.password = Some(self.hash_string(&password));
        }
        self.repository.users.update_by_id(id, &user).await
    }

    pub async fn delete_user(&self, id: &str) -> AppResult<DeleteOutcome> {
        let id = parse_id(id)?;
        let outcome = self.repository.users.delete_by_id(id).await?;
        tracing::info!(user_id = %id, deleted = outcome.deleted_count, "User delete processed");
        Ok(outcome)
    }
}
