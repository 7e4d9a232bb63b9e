use super::{CacheError, SessionCache};
use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use std::time::Duration;
use tracing::{debug, instrument};

/// Redis-backed sessions: one `SET username token EX ttl` per login.
#[derive(Clone)]
pub struct RedisSessionCache {
    connection: ConnectionManager,
}

impl RedisSessionCache {
    /// Opens a managed connection to `url` and checks it with a `PING`.
    pub async fn connect(url: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(url)?;
        let mut connection = ConnectionManager::new(client).await?;
        let pong: String = redis::cmd("PING").query_async(&mut connection).await?;
        debug!("Redis answered {pong}");
        Ok(Self { connection })
    }
}

#[async_trait]
impl SessionCache for RedisSessionCache {
    #[instrument(skip(self, token))]
    async fn store(&self, username: &str, token: &str, ttl: Duration) -> Result<(), CacheError> {
        // ConnectionManager is a cheap handle over a multiplexed connection
        let mut connection = self.connection.clone();
        let _: () = connection.set_ex(username, token, ttl.as_secs()).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn fetch(&self, username: &str) -> Result<Option<String>, CacheError> {
        let mut connection = self.connection.clone();
        let token: Option<String> = connection.get(username).await?;
        Ok(token)
    }
}
