use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("moka", MokaCacheWrapper);

/// 缓存值与其存活时间
type Entry = (String, Duration);

/// 按条目过期：创建和覆盖时都以条目自带的 TTL 重新计时
struct EntryTtl;

impl Expiry<String, Entry> for EntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &Entry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.1)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.1)
    }
}

pub struct MokaCacheWrapper {
    inner: Cache<String, Entry>,
    default_ttl: Duration,
}

impl MokaCacheWrapper {
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        Ok(Self::with_settings(
            config.cache.memory.max_capacity,
            config.cache.default_ttl,
        ))
    }

    /// 使用显式容量与默认 TTL 创建（测试与嵌入场景）
    pub fn with_settings(max_capacity: u64, ttl_secs: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(EntryTtl)
            .build();

        debug!(
            "MokaCacheWrapper initialized with max capacity: {}, default TTL: {}s",
            max_capacity, ttl_secs
        );
        Self {
            inner,
            default_ttl: Duration::from_secs(ttl_secs),
        }
    }
}

#[async_trait]
impl ObjectCache for MokaCacheWrapper {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        if let Some((value, _)) = self.inner.get(key).await {
            debug!("Successfully retrieved key: {}", key);
            CacheResult::Found(value)
        } else {
            debug!("Key not found in cache: {}", key);
            CacheResult::NotFound
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        // ttl 为 0 时使用默认 TTL
        let ttl = if ttl == 0 {
            self.default_ttl
        } else {
            Duration::from_secs(ttl)
        };
        self.inner.insert(key, (value, ttl)).await;
    }

    async fn remove(&self, key: &str) {
        self.inner.invalidate(key).await;
    }

    async fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_get_remove() {
        let cache = MokaCacheWrapper::with_settings(16, 60);

        assert_eq!(cache.get_raw("session:a").await, CacheResult::NotFound);

        cache
            .insert_raw("session:a".to_string(), "{}".to_string(), 0)
            .await;
        assert_eq!(
            cache.get_raw("session:a").await,
            CacheResult::Found("{}".to_string())
        );

        cache.remove("session:a").await;
        assert_eq!(cache.get_raw("session:a").await, CacheResult::NotFound);
    }

    #[tokio::test]
    async fn test_per_entry_ttl_overrides_default() {
        let cache = MokaCacheWrapper::with_settings(16, 3600);

        cache
            .insert_raw("session:short".to_string(), "{}".to_string(), 1)
            .await;
        cache
            .insert_raw("session:default".to_string(), "{}".to_string(), 0)
            .await;

        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(cache.get_raw("session:short").await, CacheResult::NotFound);
        assert_eq!(
            cache.get_raw("session:default").await,
            CacheResult::Found("{}".to_string())
        );
    }
}
