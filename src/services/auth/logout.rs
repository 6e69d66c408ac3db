use tracing::info;

use super::AuthService;

pub async fn handle_logout(service: &AuthService, session_id: Option<&str>) {
    if let Some(id) = session_id {
        service.sessions().destroy(id).await;
        info!("Session {} destroyed", id);
    }
}
