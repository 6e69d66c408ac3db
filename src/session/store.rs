use actix_web::cookie::{Cookie, SameSite};
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

use super::SessionState;
use crate::cache::{CacheResult, ObjectCache};
use crate::errors::Result;

/// 会话存储，数据以 JSON 形式放在对象缓存的 `session:{id}` 键下
#[derive(Clone)]
pub struct SessionStore {
    cache: Arc<dyn ObjectCache>,
    cookie_name: String,
    ttl: u64,
    secure: bool,
}

impl SessionStore {
    pub fn new(
        cache: Arc<dyn ObjectCache>,
        cookie_name: impl Into<String>,
        ttl: u64,
        secure: bool,
    ) -> Self {
        Self {
            cache,
            cookie_name: cookie_name.into(),
            ttl,
            secure,
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub fn ttl(&self) -> u64 {
        self.ttl
    }

    pub fn new_session_id() -> String {
        Uuid::new_v4().simple().to_string()
    }

    fn cache_key(session_id: &str) -> Option<String> {
        // 只接受本服务签发的 ID 格式
        Uuid::try_parse(session_id)
            .ok()
            .map(|id| format!("session:{}", id.simple()))
    }

    /// 读取会话，不存在或已过期时返回 None
    pub async fn load(&self, session_id: &str) -> Option<SessionState> {
        let key = Self::cache_key(session_id)?;
        match self.cache.get_raw(&key).await {
            CacheResult::Found(json) => match serde_json::from_str::<SessionState>(&json) {
                Ok(state) => Some(state),
                Err(e) => {
                    warn!("Dropping undecodable session {}: {}", session_id, e);
                    self.cache.remove(&key).await;
                    None
                }
            },
            _ => {
                debug!("Session not found: {}", session_id);
                None
            }
        }
    }

    pub async fn save(&self, session_id: &str, state: &SessionState) -> Result<()> {
        let key = Self::cache_key(session_id).ok_or_else(|| {
            crate::errors::SimsError::session(format!("Invalid session id: {session_id}"))
        })?;
        let json = serde_json::to_string(state).map_err(|e| {
            crate::errors::SimsError::session(format!("Failed to encode session: {e}"))
        })?;
        self.cache.insert_raw(key, json, self.ttl).await;
        Ok(())
    }

    pub async fn destroy(&self, session_id: &str) {
        if let Some(key) = Self::cache_key(session_id) {
            self.cache.remove(&key).await;
        }
    }

    /// 会话 Cookie
    pub fn session_cookie(&self, session_id: &str) -> Cookie<'static> {
        Cookie::build(self.cookie_name.clone(), session_id.to_string())
            .path("/")
            .max_age(actix_web::cookie::time::Duration::seconds(self.ttl as i64))
            .same_site(SameSite::Lax)
            .http_only(true)
            .secure(self.secure)
            .finish()
    }

    /// 过期 Cookie（用于登出）
    pub fn expired_cookie(&self) -> Cookie<'static> {
        Cookie::build(self.cookie_name.clone(), "")
            .path("/")
            .max_age(actix_web::cookie::time::Duration::seconds(0))
            .same_site(SameSite::Lax)
            .http_only(true)
            .secure(self.secure)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::object_cache::moka::MokaCacheWrapper;
    use crate::session::{IdentityLookup, USER_ID_KEY};

    fn store() -> SessionStore {
        SessionStore::new(
            Arc::new(MokaCacheWrapper::with_settings(64, 60)),
            "sims_session",
            60,
            false,
        )
    }

    #[tokio::test]
    async fn test_save_load_destroy() {
        let store = store();
        let id = SessionStore::new_session_id();

        let mut state = SessionState::default();
        state.sign_in(7);
        store.save(&id, &state).await.unwrap();

        let loaded = store.load(&id).await.expect("session should be stored");
        assert_eq!(loaded.try_get(USER_ID_KEY), Some(b"7".to_vec()));

        store.destroy(&id).await;
        assert!(store.load(&id).await.is_none());
    }

    #[tokio::test]
    async fn test_foreign_session_ids_are_rejected() {
        let store = store();
        assert!(store.load("../../etc/passwd").await.is_none());
        assert!(store.save("not-a-uuid", &SessionState::default()).await.is_err());
    }

    #[tokio::test]
    async fn test_session_expires_with_cookie_max_age() {
        // 缓存默认 TTL 远大于会话 TTL，会话仍按自身 TTL 过期
        let store = SessionStore::new(
            Arc::new(MokaCacheWrapper::with_settings(64, 3600)),
            "sims_session",
            1,
            false,
        );
        let id = SessionStore::new_session_id();
        assert_eq!(
            store.session_cookie(&id).max_age(),
            Some(actix_web::cookie::time::Duration::seconds(1))
        );

        let mut state = SessionState::default();
        state.sign_in(7);
        store.save(&id, &state).await.unwrap();
        assert!(store.load(&id).await.is_some());

        tokio::time::sleep(std::time::Duration::from_millis(1500)).await;
        assert!(store.load(&id).await.is_none());
    }

    #[test]
    fn test_cookies() {
        let store = store();
        let cookie = store.session_cookie("abc");
        assert_eq!(cookie.name(), "sims_session");
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.http_only(), Some(true));

        let expired = store.expired_cookie();
        assert_eq!(expired.value(), "");
        assert_eq!(
            expired.max_age(),
            Some(actix_web::cookie::time::Duration::seconds(0))
        );
    }
}
