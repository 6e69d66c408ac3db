use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::RecordStatus;

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Course {
    // 课程ID
    pub id: i64,
    // 课程名称
    pub name: String,
    pub status: RecordStatus,
    // 有效期
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    // 投票数
    pub vote: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
    #[serde(default)]
    pub status: RecordStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
