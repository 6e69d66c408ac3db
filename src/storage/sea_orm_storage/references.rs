//! 课程、教师、学生存储操作
//!
//! 这三类记录在班级工作流中只作为下拉数据和显示名称来源。

use super::{SeaOrmStorage, read_error, write_error};
use crate::entity::prelude::{
    CourseActiveModel, Courses, StudentActiveModel, Students, TeacherActiveModel, Teachers,
};
use crate::entity::{courses, format_date, students, teachers};
use crate::errors::Result;
use crate::models::{
    courses::entities::{Course, CreateCourseRequest},
    students::entities::{CreateStudentRequest, Student},
    teachers::entities::{CreateTeacherRequest, Teacher},
};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set};

/// 写入课程
pub(super) async fn insert_course<C: ConnectionTrait>(
    conn: &C,
    req: CreateCourseRequest,
) -> Result<Course> {
    let model = CourseActiveModel {
        name: Set(req.name),
        status: Set(req.status.to_string()),
        start_date: Set(format_date(req.start_date)),
        end_date: Set(format_date(req.end_date)),
        vote: Set(0),
        created_at: Set(chrono::Utc::now().timestamp()),
        ..Default::default()
    };

    let result = model
        .insert(conn)
        .await
        .map_err(|e| write_error("创建课程失败", e))?;
    Ok(result.into_course())
}

/// 写入教师
pub(super) async fn insert_teacher<C: ConnectionTrait>(
    conn: &C,
    req: CreateTeacherRequest,
) -> Result<Teacher> {
    let model = TeacherActiveModel {
        account_id: Set(req.account_id),
        full_name: Set(req.full_name),
        email: Set(req.email),
        phone: Set(req.phone),
        address: Set(req.address),
        status: Set(req.status.to_string()),
        created_at: Set(chrono::Utc::now().timestamp()),
        ..Default::default()
    };

    let result = model
        .insert(conn)
        .await
        .map_err(|e| write_error("创建教师失败", e))?;
    Ok(result.into_teacher())
}

/// 写入学生
pub(super) async fn insert_student<C: ConnectionTrait>(
    conn: &C,
    req: CreateStudentRequest,
) -> Result<Student> {
    let model = StudentActiveModel {
        account_id: Set(req.account_id),
        full_name: Set(req.full_name),
        email: Set(req.email),
        phone: Set(req.phone),
        address: Set(req.address),
        status: Set(req.status.to_string()),
        created_at: Set(chrono::Utc::now().timestamp()),
        ..Default::default()
    };

    let result = model
        .insert(conn)
        .await
        .map_err(|e| write_error("创建学生失败", e))?;
    Ok(result.into_student())
}

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        insert_course(&self.db, req).await
    }

    pub async fn get_course_by_id_impl(&self, course_id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| read_error("查询课程失败", e))?;
        Ok(result.map(|m| m.into_course()))
    }

    pub async fn list_courses_impl(&self) -> Result<Vec<Course>> {
        let result = Courses::find()
            .order_by_asc(courses::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| read_error("查询课程列表失败", e))?;
        Ok(result.into_iter().map(|m| m.into_course()).collect())
    }

    /// 创建教师
    pub async fn create_teacher_impl(&self, req: CreateTeacherRequest) -> Result<Teacher> {
        insert_teacher(&self.db, req).await
    }

    pub async fn get_teacher_by_id_impl(&self, teacher_id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(teacher_id)
            .one(&self.db)
            .await
            .map_err(|e| read_error("查询教师失败", e))?;
        Ok(result.map(|m| m.into_teacher()))
    }

    pub async fn list_teachers_impl(&self) -> Result<Vec<Teacher>> {
        let result = Teachers::find()
            .order_by_asc(teachers::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| read_error("查询教师列表失败", e))?;
        Ok(result.into_iter().map(|m| m.into_teacher()).collect())
    }

    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        insert_student(&self.db, req).await
    }

    pub async fn list_students_impl(&self) -> Result<Vec<Student>> {
        let result = Students::find()
            .order_by_asc(students::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| read_error("查询学生列表失败", e))?;
        Ok(result.into_iter().map(|m| m.into_student()).collect())
    }
}
