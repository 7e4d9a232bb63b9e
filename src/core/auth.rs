use crate::repositories::{CredentialStore, StoreError};
use crate::session::{CacheError, SessionCache};
use bcrypt::{BcryptError, non_truncating_hash, non_truncating_verify};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

/// Durata sia del JWT sia della sua entry nella session cache
pub const SESSION_TTL: Duration = Duration::from_secs(60 * 60);

// struct che codifica il contenuto del token jwt
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // username
    pub iat: usize,  // Issued at time of the token
    pub exp: usize,  // Expiry time of the token
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("password hashing failed: {0}")]
    Hash(#[from] BcryptError),
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
    #[error("blocking task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// Hash a password using bcrypt; the salt is embedded in the returned string.
///
/// bcrypt only reads 72 bytes, NUL terminator included: longer passwords are
/// refused with `BcryptError::Truncation` instead of being cut.
pub fn hash_password(plaintext: &str, cost: u32) -> Result<String, BcryptError> {
    non_truncating_hash(plaintext, cost)
}

/// Verify `plaintext` against a stored bcrypt hash.
///
/// A wrong password is `Ok(false)`; `Err` means the stored hash is malformed.
/// A password too long to have been hashed can never match.
pub fn verify_password(plaintext: &str, password_hash: &str) -> Result<bool, BcryptError> {
    match non_truncating_verify(plaintext, password_hash) {
        Err(BcryptError::Truncation(_)) => Ok(false),
        result => result,
    }
}

#[instrument(skip(secret))]
pub fn encode_jwt(
    username: &str,
    secret: &str,
    ttl: Duration,
) -> Result<String, jsonwebtoken::errors::Error> {
    debug!("Encoding JWT token for user");
    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: username.to_string(),
        iat: now,
        exp: now + ttl.as_secs() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .inspect_err(|e| error!("Failed to encode JWT token: {:?}", e))
}

#[instrument(skip(jwt_token, secret))]
pub fn decode_jwt(
    jwt_token: &str,
    secret: &str,
) -> Result<TokenData<Claims>, jsonwebtoken::errors::Error> {
    debug!("Decoding JWT token");
    decode(
        jwt_token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .inspect_err(|e| warn!("Failed to decode JWT token: {:?}", e))
}

/// Terminal states of a login attempt that did not hit an internal error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    UnknownUser,
    WrongPassword,
    Authenticated { token: String },
}

/// Password checks, token minting and session bookkeeping.
///
/// The signing secret is fixed for the lifetime of the process.
pub struct AuthService {
    jwt_secret: String,
    hash_cost: u32,
    sessions: Arc<dyn SessionCache>,
}

impl AuthService {
    pub fn new(jwt_secret: String, hash_cost: u32, sessions: Arc<dyn SessionCache>) -> Self {
        Self {
            jwt_secret,
            hash_cost,
            sessions,
        }
    }

    /// bcrypt cost used for new password hashes.
    pub fn hash_cost(&self) -> u32 {
        self.hash_cost
    }

    pub fn issue_token(&self, username: &str) -> Result<String, AuthError> {
        Ok(encode_jwt(username, &self.jwt_secret, SESSION_TTL)?)
    }

    pub fn decode_token(&self, token: &str) -> Result<Claims, AuthError> {
        Ok(decode_jwt(token, &self.jwt_secret)?.claims)
    }

    /// Caches `token` as the current session of `username`, replacing any
    /// previous one.
    pub async fn store_session(&self, username: &str, token: &str) -> Result<(), AuthError> {
        self.sessions.store(username, token, SESSION_TTL).await?;
        Ok(())
    }

    pub async fn session_token(&self, username: &str) -> Result<Option<String>, AuthError> {
        Ok(self.sessions.fetch(username).await?)
    }

    /// Runs the login flow: lookup, password check, token issue, session write.
    #[instrument(skip(self, users, password))]
    pub async fn login(
        &self,
        users: &dyn CredentialStore,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome, AuthError> {
        let Some(user) = users.find_by_username(username).await? else {
            warn!("Login attempt for unknown user");
            return Ok(LoginOutcome::UnknownUser);
        };

        let password = password.to_owned();
        let verified =
            tokio::task::spawn_blocking(move || user.verify_password(&password)).await??;
        if !verified {
            warn!("Wrong password");
            return Ok(LoginOutcome::WrongPassword);
        }

        let token = self.issue_token(username)?;
        self.store_session(username, &token).await?;
        info!("User authenticated");

        Ok(LoginOutcome::Authenticated { token })
    }
}
