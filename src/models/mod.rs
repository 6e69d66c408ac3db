//! 业务数据模型
//!
//! 与 `entity` 中的数据库实体分离，用于服务层与展示层之间的数据交换。

pub mod accounts;
pub mod auth;
pub mod classrooms;
pub mod common;
pub mod courses;
pub mod students;
pub mod teachers;

pub use common::error_code::ErrorCode;
pub use common::response::ApiResponse;
pub use common::status::RecordStatus;

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
