use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Classroom;
use crate::models::RecordStatus;
use crate::models::common::field_errors::FieldErrors;

// 班级表单（创建/编辑页的输入与回显）
//
// 字段全部可选：空表单用于创建页，校验失败时原样回显提交内容。
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct ClassroomForm {
    pub id: Option<i64>,
    pub class_name: Option<String>,
    pub course_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub schedule: Option<String>,
    pub location: Option<String>,
    pub status: Option<RecordStatus>,
}

impl ClassroomForm {
    /// 必填项检查，通过后转换为存储层请求
    pub fn to_save_request(&self) -> Result<SaveClassroomRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        let class_name = self
            .class_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty());
        if class_name.is_none() {
            errors.add("class_name", "Class name is required.");
        }
        if self.course_id.is_none() {
            errors.add("course_id", "Course is required.");
        }
        if self.teacher_id.is_none() {
            errors.add("teacher_id", "Teacher is required.");
        }
        if self.start_date.is_none() {
            errors.add("start_date", "Start date is required.");
        }
        if self.end_date.is_none() {
            errors.add("end_date", "End date is required.");
        }

        match (
            class_name,
            self.course_id,
            self.teacher_id,
            self.start_date,
            self.end_date,
        ) {
            (Some(class_name), Some(course_id), Some(teacher_id), Some(start_date), Some(end_date)) => {
                Ok(SaveClassroomRequest {
                    class_name: class_name.to_string(),
                    course_id,
                    teacher_id,
                    start_date,
                    end_date,
                    schedule: non_blank(&self.schedule),
                    location: non_blank(&self.location),
                    status: self.status.unwrap_or_default(),
                })
            }
            _ => Err(errors),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl From<Classroom> for ClassroomForm {
    fn from(classroom: Classroom) -> Self {
        Self {
            id: Some(classroom.id),
            class_name: Some(classroom.class_name),
            course_id: Some(classroom.course_id),
            teacher_id: Some(classroom.teacher_id),
            start_date: Some(classroom.start_date),
            end_date: Some(classroom.end_date),
            schedule: classroom.schedule,
            location: classroom.location,
            status: Some(classroom.status),
        }
    }
}

// 创建/更新班级（存储层）
#[derive(Debug, Clone)]
pub struct SaveClassroomRequest {
    pub class_name: String,
    pub course_id: i64,
    pub teacher_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub schedule: Option<String>,
    pub location: Option<String>,
    pub status: RecordStatus,
}

// 分配学生请求，提交后班级成员替换为该集合
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct AssignStudentsRequest {
    #[serde(default)]
    pub student_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_form_reports_required_fields() {
        let errors = ClassroomForm::default().to_save_request().unwrap_err();
        assert_eq!(errors.errors_for("class_name"), ["Class name is required."]);
        assert_eq!(errors.errors_for("course_id"), ["Course is required."]);
        assert_eq!(errors.errors_for("teacher_id"), ["Teacher is required."]);
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_blank_name_is_missing() {
        let form = ClassroomForm {
            class_name: Some("   ".to_string()),
            course_id: Some(1),
            teacher_id: Some(1),
            start_date: Some(date(2025, 3, 1)),
            end_date: Some(date(2025, 3, 31)),
            ..Default::default()
        };
        let errors = form.to_save_request().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors_for("class_name").len(), 1);
    }

    #[test]
    fn test_valid_form_trims_and_defaults_status() {
        let form = ClassroomForm {
            class_name: Some("  Chemistry Class ".to_string()),
            course_id: Some(2),
            teacher_id: Some(1),
            start_date: Some(date(2025, 3, 1)),
            end_date: Some(date(2025, 3, 31)),
            schedule: Some("Mon 8:00-10:00".to_string()),
            location: Some("".to_string()),
            ..Default::default()
        };
        let req = form.to_save_request().unwrap();
        assert_eq!(req.class_name, "Chemistry Class");
        assert_eq!(req.schedule.as_deref(), Some("Mon 8:00-10:00"));
        assert_eq!(req.location, None);
        assert_eq!(req.status, RecordStatus::Active);
    }
}
