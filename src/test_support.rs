//! 测试夹具：内存数据库 + 演示数据

use chrono::{Duration, NaiveDate, Utc};

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::RecordStatus;
use crate::models::accounts::entities::{Account, CreateAccountRequest};
use crate::models::classrooms::entities::Classroom;
use crate::models::classrooms::requests::SaveClassroomRequest;
use crate::models::courses::entities::{Course, CreateCourseRequest};
use crate::models::students::entities::{CreateStudentRequest, Student};
use crate::models::teachers::entities::{CreateTeacherRequest, Teacher};
use crate::runtime::lifetime::seed::seed_demo_data;
use crate::session::{SessionState, USER_ID_KEY};
use crate::storage::{Dataset, Storage};
use crate::storage::sea_orm_storage::SeaOrmStorage;

pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub(crate) fn classroom_request(name: &str, course_id: i64, teacher_id: i64) -> SaveClassroomRequest {
    SaveClassroomRequest {
        class_name: name.to_string(),
        course_id,
        teacher_id,
        start_date: today(),
        end_date: today() + Duration::days(30),
        schedule: Some("Mon-Wed 9:00-11:00".to_string()),
        location: Some("Room 104".to_string()),
        status: RecordStatus::Active,
    }
}

/// 课程 Math/Physics，教师 John Doe/Jane Smith，学生两名，班级 Math Class/Physics Class
pub(crate) async fn seeded_storage() -> SeaOrmStorage {
    let storage = SeaOrmStorage::in_memory()
        .await
        .expect("in-memory storage should start");
    seed_demo_data(&storage).await.expect("seed demo data");
    storage
}

/// 已登录会话
pub(crate) fn signed_in(user_id: &str) -> SessionState {
    let mut session = SessionState::default();
    session.insert(USER_ID_KEY, user_id.as_bytes().to_vec());
    session
}

/// 任何访问都会 panic 的存储，用于断言未登录请求不触达数据层
pub(crate) struct UntouchableStorage;

#[async_trait]
impl Storage for UntouchableStorage {
    async fn create_account(&self, _: CreateAccountRequest) -> Result<Account> {
        unreachable!("storage accessed")
    }
    async fn get_account_by_username(&self, _: &str) -> Result<Option<Account>> {
        unreachable!("storage accessed")
    }
    async fn count_accounts(&self) -> Result<u64> {
        unreachable!("storage accessed")
    }
    async fn create_course(&self, _: CreateCourseRequest) -> Result<Course> {
        unreachable!("storage accessed")
    }
    async fn get_course_by_id(&self, _: i64) -> Result<Option<Course>> {
        unreachable!("storage accessed")
    }
    async fn list_courses(&self) -> Result<Vec<Course>> {
        unreachable!("storage accessed")
    }
    async fn create_teacher(&self, _: CreateTeacherRequest) -> Result<Teacher> {
        unreachable!("storage accessed")
    }
    async fn get_teacher_by_id(&self, _: i64) -> Result<Option<Teacher>> {
        unreachable!("storage accessed")
    }
    async fn list_teachers(&self) -> Result<Vec<Teacher>> {
        unreachable!("storage accessed")
    }
    async fn create_student(&self, _: CreateStudentRequest) -> Result<Student> {
        unreachable!("storage accessed")
    }
    async fn list_students(&self) -> Result<Vec<Student>> {
        unreachable!("storage accessed")
    }
    async fn create_classroom(&self, _: SaveClassroomRequest) -> Result<Classroom> {
        unreachable!("storage accessed")
    }
    async fn get_classroom_by_id(&self, _: i64) -> Result<Option<Classroom>> {
        unreachable!("storage accessed")
    }
    async fn list_classrooms(&self) -> Result<Vec<Classroom>> {
        unreachable!("storage accessed")
    }
    async fn count_classrooms(&self) -> Result<u64> {
        unreachable!("storage accessed")
    }
    async fn classroom_name_exists(&self, _: &str, _: Option<i64>) -> Result<bool> {
        unreachable!("storage accessed")
    }
    async fn update_classroom(
        &self,
        _: i64,
        _: SaveClassroomRequest,
    ) -> Result<Option<Classroom>> {
        unreachable!("storage accessed")
    }
    async fn list_classroom_students(&self, _: i64) -> Result<Vec<Student>> {
        unreachable!("storage accessed")
    }
    async fn replace_classroom_students(&self, _: i64, _: &[i64]) -> Result<()> {
        unreachable!("storage accessed")
    }
    async fn import_dataset(&self, _: Dataset) -> Result<()> {
        unreachable!("storage accessed")
    }
}
