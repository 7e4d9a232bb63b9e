//! Application State - Stato globale dell'applicazione
//!
//! Costruito una sola volta all'avvio e condiviso (Arc) con tutti gli handler.

use crate::core::auth::AuthService;
use crate::core::config::Config;
use crate::core::error::StartupError;
use crate::repositories::{CredentialStore, ItemRepository, ItemStore, UserRepository};
use crate::session::{RedisSessionCache, SessionCache};
use sqlx::mysql::MySqlPoolOptions;
use std::sync::Arc;
use tracing::info;

pub struct AppState {
    /// Store degli utenti (username univoco + hash bcrypt)
    pub users: Arc<dyn CredentialStore>,

    /// Store degli oggetti
    pub items: Arc<dyn ItemStore>,

    /// Password, token JWT e cache delle sessioni
    pub auth: AuthService,
}

impl AppState {
    pub fn new(
        users: Arc<dyn CredentialStore>,
        items: Arc<dyn ItemStore>,
        sessions: Arc<dyn SessionCache>,
        jwt_secret: String,
        hash_cost: u32,
    ) -> Self {
        Self {
            users,
            items,
            auth: AuthService::new(jwt_secret, hash_cost, sessions),
        }
    }

    /// Connects MySQL and Redis, applies migrations and wires the stores.
    ///
    /// Any failure here is fatal: the server must not start half-connected.
    pub async fn connect(config: &Config) -> Result<Self, StartupError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(config.mysql_options())
            .await?;
        sqlx::query("SELECT 1").execute(&pool).await?;
        info!("Database connection established");

        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Database migrations applied");

        let sessions = RedisSessionCache::connect(&config.redis_url()).await?;
        info!("Redis connection established");

        Ok(Self::new(
            Arc::new(UserRepository::new(pool.clone())),
            Arc::new(ItemRepository::new(pool)),
            Arc::new(sessions),
            config.jwt_secret.clone(),
            config.bcrypt_cost,
        ))
    }
}
