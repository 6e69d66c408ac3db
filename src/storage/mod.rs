use std::sync::Arc;

use crate::models::{
    accounts::entities::{Account, CreateAccountRequest},
    classrooms::{entities::Classroom, requests::SaveClassroomRequest},
    courses::entities::{Course, CreateCourseRequest},
    students::entities::{CreateStudentRequest, Student},
    teachers::entities::{CreateTeacherRequest, Teacher},
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 一次性整体写入的初始数据
///
/// 记录之间的引用使用数据集内的下标：教师和学生的 `account_id` 指向
/// `accounts`，班级的 `course_id` 指向 `courses`，`teacher_id` 指向 `teachers`。
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub accounts: Vec<CreateAccountRequest>,
    pub courses: Vec<CreateCourseRequest>,
    pub teachers: Vec<CreateTeacherRequest>,
    pub students: Vec<CreateStudentRequest>,
    pub classrooms: Vec<SaveClassroomRequest>,
}

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 账号管理方法
    // 创建账号
    async fn create_account(&self, account: CreateAccountRequest) -> Result<Account>;
    // 通过用户名获取账号
    async fn get_account_by_username(&self, username: &str) -> Result<Option<Account>>;
    // 统计账号数量
    async fn count_accounts(&self) -> Result<u64>;

    /// 课程方法
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    // 列出全部课程（按ID升序）
    async fn list_courses(&self) -> Result<Vec<Course>>;

    /// 教师方法
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher>;
    async fn get_teacher_by_id(&self, teacher_id: i64) -> Result<Option<Teacher>>;
    // 列出全部教师（按ID升序）
    async fn list_teachers(&self) -> Result<Vec<Teacher>>;

    /// 学生方法
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 列出全部学生（按ID升序）
    async fn list_students(&self) -> Result<Vec<Student>>;

    /// 班级管理方法
    // 创建班级，名称冲突返回 Conflict
    async fn create_classroom(&self, classroom: SaveClassroomRequest) -> Result<Classroom>;
    // 通过ID获取班级
    async fn get_classroom_by_id(&self, classroom_id: i64) -> Result<Option<Classroom>>;
    // 列出全部班级（按插入顺序）
    async fn list_classrooms(&self) -> Result<Vec<Classroom>>;
    // 统计班级数量
    async fn count_classrooms(&self) -> Result<u64>;
    // 班级名称是否已被占用，exclude_id 用于编辑时排除自身
    async fn classroom_name_exists(&self, class_name: &str, exclude_id: Option<i64>)
    -> Result<bool>;
    // 更新班级，不存在时返回 None
    async fn update_classroom(
        &self,
        classroom_id: i64,
        update: SaveClassroomRequest,
    ) -> Result<Option<Classroom>>;

    /// 班级学生方法
    // 列出班级内学生
    async fn list_classroom_students(&self, classroom_id: i64) -> Result<Vec<Student>>;
    // 用给定集合替换班级学生（单事务）
    async fn replace_classroom_students(&self, classroom_id: i64, student_ids: &[i64])
    -> Result<()>;

    /// 初始数据
    // 在单个事务中写入数据集，任一记录失败则全部回滚
    async fn import_dataset(&self, dataset: Dataset) -> Result<()>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
