use tracing::{info, warn};

use super::AuthService;
use crate::errors::Result;
use crate::models::auth::{LoginRequest, LoginResponse};
use crate::session::{SessionState, SessionStore};
use crate::utils::password::verify_password;
use crate::utils::validate::validate_username;

pub const BAD_CREDENTIALS: &str = "Username or password is incorrect";

#[derive(Debug)]
pub enum LoginResult {
    SignedIn {
        session_id: String,
        response: LoginResponse,
    },
    /// 输入格式不合法
    Invalid(String),
    /// 用户名或密码错误
    Rejected,
}

pub async fn handle_login(
    service: &AuthService,
    request: LoginRequest,
    previous_session: Option<&str>,
) -> Result<LoginResult> {
    let username = request.username.trim();
    if let Err(msg) = validate_username(username) {
        return Ok(LoginResult::Invalid(msg.to_string()));
    }
    if request.password.is_empty() {
        return Ok(LoginResult::Invalid("Password is required".to_string()));
    }

    let Some(account) = service.storage().get_account_by_username(username).await? else {
        warn!("Login failed: unknown username {}", username);
        return Ok(LoginResult::Rejected);
    };

    if !verify_password(&request.password, &account.password_hash) {
        warn!("Login failed: wrong password for {}", username);
        return Ok(LoginResult::Rejected);
    }

    // 登录时总是换发新会话ID
    if let Some(previous) = previous_session {
        service.sessions().destroy(previous).await;
    }

    let session_id = SessionStore::new_session_id();
    let mut state = SessionState::default();
    state.sign_in(account.id);
    service.sessions().save(&session_id, &state).await?;

    info!("Account {} ({}) logged in", account.username, account.id);

    Ok(LoginResult::SignedIn {
        session_id,
        response: LoginResponse {
            account,
            expires_in: service.sessions().ttl(),
        },
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cache::object_cache::moka::MokaCacheWrapper;
    use crate::models::accounts::entities::{AccountRole, CreateAccountRequest};
    use crate::session::{GateDecision, Identity, SessionGate};
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use crate::utils::password::hash_password_with;

    async fn service() -> AuthService {
        let storage = SeaOrmStorage::in_memory().await.unwrap();
        storage
            .create_account(CreateAccountRequest {
                username: "teacher1".to_string(),
                password_hash: hash_password_with("Classroom2025", 1024, 1, 1).unwrap(),
                role: AccountRole::Teacher,
                email: None,
                phone: None,
                address: None,
            })
            .await
            .unwrap();

        let sessions = SessionStore::new(
            Arc::new(MokaCacheWrapper::with_settings(64, 60)),
            "sims_session",
            60,
            false,
        );
        AuthService::new(Arc::new(storage), sessions, "SIMS")
    }

    fn request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_writes_identity_into_new_session() {
        let service = service().await;

        let LoginResult::SignedIn {
            session_id,
            response,
        } = service
            .login(request("teacher1", "Classroom2025"), None)
            .await
            .unwrap()
        else {
            panic!("login should succeed");
        };

        assert_eq!(response.account.username, "teacher1");
        assert_eq!(response.expires_in, 60);

        let state = service.sessions().load(&session_id).await.unwrap();
        assert_eq!(
            SessionGate::check(&state),
            GateDecision::Authenticated(Identity {
                account_id: response.account.id
            })
        );
    }

    #[tokio::test]
    async fn test_wrong_credentials_are_rejected() {
        let service = service().await;

        assert!(matches!(
            service.login(request("teacher1", "wrong"), None).await.unwrap(),
            LoginResult::Rejected
        ));
        assert!(matches!(
            service.login(request("nobody", "Classroom2025"), None).await.unwrap(),
            LoginResult::Rejected
        ));
    }

    #[tokio::test]
    async fn test_malformed_input_is_invalid() {
        let service = service().await;

        assert!(matches!(
            service.login(request("a b", "x"), None).await.unwrap(),
            LoginResult::Invalid(_)
        ));
        assert!(matches!(
            service.login(request("teacher1", ""), None).await.unwrap(),
            LoginResult::Invalid(_)
        ));
    }

    #[tokio::test]
    async fn test_login_replaces_previous_session() {
        let service = service().await;

        let LoginResult::SignedIn { session_id: first, .. } = service
            .login(request("teacher1", "Classroom2025"), None)
            .await
            .unwrap()
        else {
            panic!("login should succeed");
        };
        let LoginResult::SignedIn { session_id: second, .. } = service
            .login(request("teacher1", "Classroom2025"), Some(&first))
            .await
            .unwrap()
        else {
            panic!("login should succeed");
        };

        assert_ne!(first, second);
        assert!(service.sessions().load(&first).await.is_none());
        assert!(service.sessions().load(&second).await.is_some());
    }
}
