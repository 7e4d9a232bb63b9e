//! UserRepository - Repository MySQL per la gestione degli utenti

use super::{CredentialStore, StoreError};
use crate::dtos::NewUser;
use crate::entities::User;
use async_trait::async_trait;
use sqlx::MySqlPool;

pub struct UserRepository {
    connection_pool: MySqlPool,
}

impl UserRepository {
    pub fn new(connection_pool: MySqlPool) -> UserRepository {
        Self { connection_pool }
    }
}

#[async_trait]
impl CredentialStore for UserRepository {
    async fn insert(&self, data: &NewUser) -> Result<User, StoreError> {
        // The UNIQUE index on username is the only duplicate check, so two
        // concurrent registrations cannot both succeed.
        let result = sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?)")
            .bind(&data.username)
            .bind(&data.password_hash)
            .execute(&self.connection_pool)
            .await
            .map_err(|err| match err {
                sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                    StoreError::DuplicateUsername
                }
                other => StoreError::Persistence(other),
            })?;

        Ok(User {
            id: result.last_insert_id() as i32,
            username: data.username.clone(),
            password_hash: data.password_hash.clone(),
        })
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(user)
    }
}
