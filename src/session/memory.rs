use super::{CacheError, SessionCache};
use async_trait::async_trait;
use dashmap::DashMap;
use std::time::{Duration, Instant};

struct Entry {
    token: String,
    expires_at: Instant,
}

/// In-process session cache with per-entry deadlines.
///
/// Expired entries are dropped lazily on lookup.
#[derive(Default)]
pub struct MemorySessionCache {
    entries: DashMap<String, Entry>,
}

impl MemorySessionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl SessionCache for MemorySessionCache {
    async fn store(&self, username: &str, token: &str, ttl: Duration) -> Result<(), CacheError> {
        self.entries.insert(
            username.to_string(),
            Entry {
                token: token.to_string(),
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }

    async fn fetch(&self, username: &str) -> Result<Option<String>, CacheError> {
        let now = Instant::now();
        self.entries
            .remove_if(username, |_, entry| entry.expires_at <= now);
        Ok(self.entries.get(username).map(|entry| entry.token.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_overwrites_previous_token() {
        let cache = MemorySessionCache::new();
        let ttl = Duration::from_secs(60);
        cache.store("alice", "first", ttl).await.unwrap();
        cache.store("alice", "second", ttl).await.unwrap();

        assert_eq!(cache.fetch("alice").await.unwrap().as_deref(), Some("second"));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_entry_expires_after_ttl() {
        let cache = MemorySessionCache::new();
        cache
            .store("alice", "token", Duration::from_millis(20))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(cache.fetch("alice").await.unwrap(), None);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_user_has_no_session() {
        let cache = MemorySessionCache::new();
        assert_eq!(cache.fetch("nobody").await.unwrap(), None);
    }
}
