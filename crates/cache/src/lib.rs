//! Cache layer: a process-wide Redis handle with default-TTL writes.
//!
//! Entries written without an explicit expiry get the configured
//! default TTL; eviction is Redis-native TTL expiry, nothing layered on
//! top. The handle is cheap to clone and safe for concurrent use -- a
//! single multiplexed connection manager sits behind an `Arc`.

use std::sync::Arc;

use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tokio::sync::OnceCell;

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

/// Process-wide cache handle.
#[derive(Clone)]
pub struct Cache {
    client: redis::Client,
    manager: Arc<OnceCell<ConnectionManager>>,
    default_ttl_secs: u64,
}

impl Cache {
    /// Parse the connection string and build the handle.
    ///
    /// Only the URL is validated here; the first command (or an
    /// explicit [`ping`](Self::ping)) establishes the connection.
    pub fn new(url: &str, default_ttl_secs: u64) -> Result<Self, CacheError> {
        let client = redis::Client::open(url)?;
        Ok(Self {
            client,
            manager: Arc::new(OnceCell::new()),
            default_ttl_secs,
        })
    }

    /// Default time-to-live, in seconds, for entries written without an
    /// explicit expiry.
    pub fn default_ttl_secs(&self) -> u64 {
        self.default_ttl_secs
    }

    /// Shared auto-reconnecting connection, established on first use.
    async fn conn(&self) -> Result<ConnectionManager, CacheError> {
        let manager = self
            .manager
            .get_or_try_init(|| async {
                let manager = ConnectionManager::new(self.client.clone()).await?;
                tracing::debug!("Redis connection established");
                Ok::<_, redis::RedisError>(manager)
            })
            .await?;
        Ok(manager.clone())
    }

    /// Liveness probe (`PING`).
    pub async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.conn().await?;
        redis::cmd("PING").query_async::<_, String>(&mut conn).await?;
        Ok(())
    }

    /// Write an entry with the default TTL.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.set_with_ttl(key, value, self.default_ttl_secs).await
    }

    /// Write an entry with an explicit TTL in seconds.
    pub async fn set_with_ttl(
        &self,
        key: &str,
        value: &str,
        ttl_secs: u64,
    ) -> Result<(), CacheError> {
        let mut conn = self.conn().await?;
        let _: () = conn.set_ex(key, value, ttl_secs).await?;
        Ok(())
    }

    /// Read an entry. `None` for a missing or expired key.
    pub async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.conn().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    /// Drop an entry ahead of its TTL. Returns `true` if a key was
    /// removed.
    pub async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        let mut conn = self.conn().await?;
        let removed: i64 = conn.del(key).await?;
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_is_lazy_and_validates_the_url() {
        // No Redis server involved: open() only parses.
        let cache = Cache::new("redis://localhost:6379", 3600).unwrap();
        assert_eq!(cache.default_ttl_secs(), 3600);

        assert!(Cache::new("not-a-redis-url", 3600).is_err());
    }

    #[test]
    fn clones_share_the_connection_cell() {
        let cache = Cache::new("redis://localhost:6379", 60).unwrap();
        let clone = cache.clone();
        assert!(Arc::ptr_eq(&cache.manager, &clone.manager));
    }
}
