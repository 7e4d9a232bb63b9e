//! User entity - Entità utente con metodi per gestione password

use crate::core::auth;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl User {
    /// Verify if target_password matches the stored hashed password.
    ///
    /// A mismatch is `Ok(false)`; only a malformed stored hash is an error.
    pub fn verify_password(&self, target_password: &str) -> Result<bool, bcrypt::BcryptError> {
        auth::verify_password(target_password, &self.password_hash)
    }
}
