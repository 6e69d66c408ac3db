use tokio::signal;
use tracing::{error, warn};

/// 等待 Ctrl+C
pub async fn listen_for_shutdown() {
    match signal::ctrl_c().await {
        Ok(()) => warn!("Shutdown signal received, stopping server..."),
        Err(e) => {
            error!("Failed to listen for shutdown signal: {}", e);
            // 无法监听信号时不主动退出
            std::future::pending::<()>().await;
        }
    }
}
