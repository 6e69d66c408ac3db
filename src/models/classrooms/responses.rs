use serde::Serialize;
use ts_rs::TS;

use super::entities::ClassroomView;
use super::requests::ClassroomForm;
use crate::models::common::field_errors::FieldErrors;
use crate::models::courses::entities::Course;
use crate::models::students::entities::StudentView;
use crate::models::teachers::entities::Teacher;

pub const LIST_TITLE: &str = "Class Rooms";
pub const CREATE_TITLE: &str = "Create Class Room";
pub const EDIT_TITLE: &str = "Edit Class Room";
pub const DETAILS_TITLE: &str = "Class Room Details";
pub const ASSIGN_TITLE: &str = "Assign Students";

// 班级列表页
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct ClassroomListPage {
    pub title: String,
    pub classrooms: Vec<ClassroomView>,
}

// 创建/编辑页：表单 + 课程、教师下拉数据 + 字段错误
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct ClassroomFormPage {
    pub title: String,
    pub classroom: ClassroomForm,
    pub courses: Vec<Course>,
    pub teachers: Vec<Teacher>,
    pub errors: FieldErrors,
}

// 班级详情页
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct ClassroomDetailsPage {
    pub title: String,
    pub classroom: ClassroomView,
    pub students: Vec<StudentView>,
    pub course_name: Option<String>,
    pub teacher_name: Option<String>,
}

// 分配学生页中的一行
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct StudentSelection {
    pub student_id: i64,
    pub full_name: String,
    pub email: Option<String>,
    pub is_selected: bool,
}

// 分配学生页
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct AssignStudentsPage {
    pub title: String,
    pub classroom_id: i64,
    pub classroom_name: String,
    pub students: Vec<StudentSelection>,
    pub errors: FieldErrors,
}
