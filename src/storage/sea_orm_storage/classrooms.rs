//! 班级存储操作

use super::{SeaOrmStorage, read_error, write_error};
use crate::entity::classrooms::{ActiveModel, Column, Entity as Classrooms};
use crate::entity::format_date;
use crate::errors::Result;
use crate::models::classrooms::{entities::Classroom, requests::SaveClassroomRequest};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

/// 写入班级，可在事务内调用
pub(super) async fn insert_classroom<C: ConnectionTrait>(
    conn: &C,
    req: SaveClassroomRequest,
) -> Result<Classroom> {
    let model = ActiveModel {
        class_name: Set(req.class_name),
        course_id: Set(req.course_id),
        teacher_id: Set(req.teacher_id),
        start_date: Set(format_date(req.start_date)),
        end_date: Set(format_date(req.end_date)),
        schedule: Set(req.schedule),
        location: Set(req.location),
        status: Set(req.status.to_string()),
        created_at: Set(chrono::Utc::now().timestamp()),
        ..Default::default()
    };

    let result = model
        .insert(conn)
        .await
        .map_err(|e| write_error("创建班级失败", e))?;

    Ok(result.into_classroom())
}

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_classroom_impl(&self, req: SaveClassroomRequest) -> Result<Classroom> {
        insert_classroom(&self.db, req).await
    }

    /// 通过 ID 获取班级
    pub async fn get_classroom_by_id_impl(&self, classroom_id: i64) -> Result<Option<Classroom>> {
        let result = Classrooms::find_by_id(classroom_id)
            .one(&self.db)
            .await
            .map_err(|e| read_error("查询班级失败", e))?;

        Ok(result.map(|m| m.into_classroom()))
    }

    /// 列出全部班级，自增ID即插入顺序
    pub async fn list_classrooms_impl(&self) -> Result<Vec<Classroom>> {
        let result = Classrooms::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| read_error("查询班级列表失败", e))?;

        Ok(result.into_iter().map(|m| m.into_classroom()).collect())
    }

    pub async fn count_classrooms_impl(&self) -> Result<u64> {
        Classrooms::find()
            .count(&self.db)
            .await
            .map_err(|e| read_error("统计班级失败", e))
    }

    /// 检查班级名称是否已存在
    pub async fn classroom_name_exists_impl(
        &self,
        class_name: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool> {
        let mut select = Classrooms::find().filter(Column::ClassName.eq(class_name));
        if let Some(id) = exclude_id {
            select = select.filter(Column::Id.ne(id));
        }

        let count = select
            .count(&self.db)
            .await
            .map_err(|e| read_error("查询班级名称失败", e))?;
        Ok(count > 0)
    }

    /// 更新班级信息
    pub async fn update_classroom_impl(
        &self,
        classroom_id: i64,
        update: SaveClassroomRequest,
    ) -> Result<Option<Classroom>> {
        // 先检查班级是否存在
        let Some(existing) = Classrooms::find_by_id(classroom_id)
            .one(&self.db)
            .await
            .map_err(|e| read_error("查询班级失败", e))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.class_name = Set(update.class_name);
        model.course_id = Set(update.course_id);
        model.teacher_id = Set(update.teacher_id);
        model.start_date = Set(format_date(update.start_date));
        model.end_date = Set(format_date(update.end_date));
        model.schedule = Set(update.schedule);
        model.location = Set(update.location);
        model.status = Set(update.status.to_string());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| write_error("更新班级失败", e))?;

        Ok(Some(result.into_classroom()))
    }
}
