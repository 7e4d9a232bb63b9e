//! Session cache - username -> token corrente, con scadenza
//!
//! Il backend di produzione è Redis (`RedisSessionCache`); `MemorySessionCache`
//! tiene le sessioni in una DashMap ed è usato nei test.

pub mod memory;
pub mod redis_cache;

pub use memory::MemorySessionCache;
pub use redis_cache::RedisSessionCache;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

/// Store chiave-valore con il token di sessione corrente di ogni utente.
///
/// `store` sovrascrive il token precedente dello stesso username. Le scritture
/// concorrenti non sono ordinate: vince l'ultima.
#[async_trait]
pub trait SessionCache: Send + Sync {
    /// Stores `token` for `username`, evicted automatically after `ttl`.
    async fn store(&self, username: &str, token: &str, ttl: Duration) -> Result<(), CacheError>;

    /// Returns the live token for `username`, if any.
    async fn fetch(&self, username: &str) -> Result<Option<String>, CacheError>;
}
