use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::RecordStatus;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct Classroom {
    // 班级ID
    pub id: i64,
    // 班级名称（唯一）
    pub class_name: String,
    pub course_id: i64,
    pub teacher_id: i64,
    // 上课周期
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    // 课表与地点，自由文本
    pub schedule: Option<String>,
    pub location: Option<String>,
    pub status: RecordStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 班级展示模型（列表与详情）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct ClassroomView {
    pub id: i64,
    pub class_name: String,
    pub course_id: i64,
    pub teacher_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub schedule: String,
    pub location: String,
    pub status: RecordStatus,
}

impl From<Classroom> for ClassroomView {
    fn from(classroom: Classroom) -> Self {
        Self {
            id: classroom.id,
            class_name: classroom.class_name,
            course_id: classroom.course_id,
            teacher_id: classroom.teacher_id,
            start_date: classroom.start_date,
            end_date: classroom.end_date,
            schedule: classroom.schedule.unwrap_or_default(),
            location: classroom.location.unwrap_or_default(),
            status: classroom.status,
        }
    }
}
