//! Common repository traits - Interfacce comuni dei due store persistenti
//!
//! Ogni trait ha una primitiva di scrittura per backend; i metodi forniti
//! contengono le regole condivise da tutti i backend (hash, validazione).

use crate::core::auth::hash_password;
use crate::dtos::{CreateItemDTO, ItemFilter, NewUser};
use crate::entities::{Item, ItemSummary, User};
use async_trait::async_trait;
use thiserror::Error;
use validator::Validate;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("username already exists")]
    DuplicateUsername,
    #[error("validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("blocking task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error("persistence error: {0}")]
    Persistence(#[from] sqlx::Error),
}

/// Users table: unique usernames and bcrypt hashes.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Inserts a user whose password is already hashed.
    ///
    /// # Returns
    /// * `Ok(User)` - Created user with the generated id
    /// * `Err(StoreError::DuplicateUsername)` - Username taken
    /// * `Err(StoreError::Persistence)` - Error during insertion
    async fn insert(&self, data: &NewUser) -> Result<User, StoreError>;

    /// Finds a user by exact username match.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Hashes `plaintext` with bcrypt at `cost` and stores the new user.
    ///
    /// The plaintext never reaches the backend.
    async fn register(&self, username: &str, plaintext: &str, cost: u32) -> Result<User, StoreError> {
        let plaintext = plaintext.to_owned();
        let password_hash =
            tokio::task::spawn_blocking(move || hash_password(&plaintext, cost)).await??;

        self.insert(&NewUser {
            username: username.to_owned(),
            password_hash,
        })
        .await
    }
}

/// Items table: insert and equality-filtered listing.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Persists an already validated item.
    async fn insert(&self, data: &CreateItemDTO) -> Result<Item, StoreError>;

    /// Lists the items matching every set filter, ordered by id.
    async fn list(&self, filter: &ItemFilter) -> Result<Vec<ItemSummary>, StoreError>;

    /// Validates `data` and persists it. Nothing is written when a required
    /// field is empty.
    async fn create(&self, data: &CreateItemDTO) -> Result<Item, StoreError> {
        data.validate()?;
        self.insert(data).await
    }
}
