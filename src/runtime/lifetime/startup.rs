use crate::cache::ObjectCache;
use crate::cache::register::{
    debug_object_cache_registry, get_object_cache_plugin, register_builtin_object_caches,
};
use crate::config::AppConfig;
use crate::errors::{Result, SimsError};
use crate::runtime::lifetime::seed::{seed_admin, seed_demo_data};
use crate::services::{AuthService, ClassroomService};
use crate::session::SessionStore;
use std::sync::Arc;
use tracing::{debug, warn};

const FALLBACK_CACHE: &str = "moka";

pub struct StartupContext {
    pub sessions: SessionStore,
    pub classrooms: ClassroomService,
    pub auth: AuthService,
}

async fn build_cache(name: &str) -> Result<Arc<dyn ObjectCache>> {
    let constructor = get_object_cache_plugin(name)
        .ok_or_else(|| SimsError::cache_plugin_not_found(name))?;
    Ok(Arc::from(constructor().await?))
}

/// 创建缓存实例，配置的后端不可用时回退到内存缓存
async fn create_cache(cache_type: &str) -> Result<Arc<dyn ObjectCache>> {
    warn!("Attempting to create {} cache backend", cache_type);

    match build_cache(cache_type).await {
        Ok(cache) => {
            warn!("Successfully created {} cache backend", cache_type);
            Ok(cache)
        }
        Err(e) if cache_type != FALLBACK_CACHE => {
            warn!(
                "Failed to create {} cache: {}, falling back to memory cache",
                cache_type, e
            );
            build_cache(FALLBACK_CACHE).await
        }
        Err(e) => Err(e),
    }
}

/// 准备服务器启动的上下文：存储、初始数据、缓存、会话与服务
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let config = AppConfig::get();

    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    register_builtin_object_caches();
    if cfg!(debug_assertions) {
        debug_object_cache_registry();
        debug!("Debug mode: Cache registry is enabled");
    }

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    seed_admin(storage.as_ref(), &config.seed.admin_username).await;
    if config.seed.demo_data {
        seed_demo_data(storage.as_ref()).await?;
    }

    let cache = create_cache(&config.cache.cache_type).await?;
    warn!("Cache backend initialized");

    let sessions = SessionStore::new(
        cache,
        config.session.cookie_name.clone(),
        config.session.ttl,
        config.is_production(),
    );

    Ok(StartupContext {
        classrooms: ClassroomService::new(storage.clone()),
        auth: AuthService::new(storage, sessions.clone(), config.app.system_name.clone()),
        sessions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_cache_falls_back_to_memory() {
        register_builtin_object_caches();
        let cache = create_cache("memcached").await.unwrap();
        cache.insert_raw("k".to_string(), "v".to_string(), 60).await;
        assert_eq!(
            cache.get_raw("k").await,
            crate::cache::CacheResult::Found("v".to_string())
        );
    }
}
