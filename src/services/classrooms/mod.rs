pub mod assign;
pub mod create;
pub mod details;
pub mod edit;
pub mod list;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::classrooms::requests::{
    AssignStudentsRequest, ClassroomForm, SaveClassroomRequest,
};
use crate::models::classrooms::responses::{
    AssignStudentsPage, ClassroomDetailsPage, ClassroomFormPage, ClassroomListPage,
};
use crate::models::common::field_errors::FieldErrors;
use crate::services::outcome::Outcome;
use crate::session::IdentityLookup;
use crate::storage::Storage;

pub const DUPLICATE_NAME_MESSAGE: &str = "Class name already exists.";

/// 班级工作流，每个操作都先经过会话检查
#[derive(Clone)]
pub struct ClassroomService {
    storage: Arc<dyn Storage>,
}

impl ClassroomService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    // 班级列表
    pub async fn list_classrooms(
        &self,
        session: &dyn IdentityLookup,
    ) -> Result<Outcome<ClassroomListPage>> {
        list::list_classrooms(self, session).await
    }

    // 创建页（空表单）
    pub async fn prepare_create(
        &self,
        session: &dyn IdentityLookup,
    ) -> Result<Outcome<ClassroomFormPage>> {
        create::prepare_create(self, session).await
    }

    pub async fn create(
        &self,
        session: &dyn IdentityLookup,
        form: ClassroomForm,
    ) -> Result<Outcome<ClassroomFormPage>> {
        create::create(self, session, form).await
    }

    // 编辑页（回填已有数据）
    pub async fn prepare_edit(
        &self,
        session: &dyn IdentityLookup,
        classroom_id: i64,
    ) -> Result<Outcome<ClassroomFormPage>> {
        edit::prepare_edit(self, session, classroom_id).await
    }

    pub async fn edit(
        &self,
        session: &dyn IdentityLookup,
        classroom_id: i64,
        form: ClassroomForm,
    ) -> Result<Outcome<ClassroomFormPage>> {
        edit::edit(self, session, classroom_id, form).await
    }

    pub async fn get_details(
        &self,
        session: &dyn IdentityLookup,
        classroom_id: i64,
    ) -> Result<Outcome<ClassroomDetailsPage>> {
        details::get_details(self, session, classroom_id).await
    }

    // 分配学生页
    pub async fn prepare_assign_students(
        &self,
        session: &dyn IdentityLookup,
        classroom_id: i64,
    ) -> Result<Outcome<AssignStudentsPage>> {
        assign::prepare_assign_students(self, session, classroom_id).await
    }

    pub async fn assign_students(
        &self,
        session: &dyn IdentityLookup,
        classroom_id: i64,
        request: AssignStudentsRequest,
    ) -> Result<Outcome<AssignStudentsPage>> {
        assign::assign_students(self, session, classroom_id, request).await
    }

    /// 组装创建/编辑页，附带课程与教师下拉数据
    pub(crate) async fn form_page(
        &self,
        title: &str,
        classroom: ClassroomForm,
        errors: FieldErrors,
    ) -> Result<ClassroomFormPage> {
        Ok(ClassroomFormPage {
            title: title.to_string(),
            classroom,
            courses: self.storage.list_courses().await?,
            teachers: self.storage.list_teachers().await?,
            errors,
        })
    }

    /// 提交内容的校验：必填项、引用存在、日期顺序、名称唯一
    pub(crate) async fn validate_form(
        &self,
        form: &ClassroomForm,
        exclude_id: Option<i64>,
    ) -> Result<std::result::Result<SaveClassroomRequest, FieldErrors>> {
        let request = match form.to_save_request() {
            Ok(request) => request,
            Err(errors) => return Ok(Err(errors)),
        };

        let mut errors = FieldErrors::new();
        if self.storage.get_course_by_id(request.course_id).await?.is_none() {
            errors.add("course_id", "Selected course does not exist.");
        }
        if self
            .storage
            .get_teacher_by_id(request.teacher_id)
            .await?
            .is_none()
        {
            errors.add("teacher_id", "Selected teacher does not exist.");
        }
        if request.end_date < request.start_date {
            errors.add("end_date", "End date must not be earlier than start date.");
        }
        if self
            .storage
            .classroom_name_exists(&request.class_name, exclude_id)
            .await?
        {
            errors.add("class_name", DUPLICATE_NAME_MESSAGE);
        }

        if errors.is_valid() {
            Ok(Ok(request))
        } else {
            Ok(Err(errors))
        }
    }
}
