pub mod login;
pub mod logout;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::auth::{LoginPrompt, LoginRequest};
use crate::session::SessionStore;
use crate::storage::Storage;

pub use login::LoginResult;

pub const LOGIN_TITLE: &str = "Log In";

/// 登录与登出
#[derive(Clone)]
pub struct AuthService {
    storage: Arc<dyn Storage>,
    sessions: SessionStore,
    system_name: String,
}

impl AuthService {
    pub fn new(
        storage: Arc<dyn Storage>,
        sessions: SessionStore,
        system_name: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            sessions,
            system_name: system_name.into(),
        }
    }

    pub(crate) fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    // 登录入口（未登录时的重定向目标）
    pub fn login_entry(&self) -> LoginPrompt {
        LoginPrompt {
            title: LOGIN_TITLE.to_string(),
            system_name: self.system_name.clone(),
        }
    }

    // 登录验证，成功后签发新会话
    pub async fn login(
        &self,
        request: LoginRequest,
        previous_session: Option<&str>,
    ) -> Result<LoginResult> {
        login::handle_login(self, request, previous_session).await
    }

    pub async fn logout(&self, session_id: Option<&str>) {
        logout::handle_logout(self, session_id).await
    }
}
