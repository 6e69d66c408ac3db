//! 班级实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classrooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub class_name: String,
    pub course_id: i64,
    pub teacher_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub schedule: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::teachers::Entity",
        from = "Column::TeacherId",
        to = "super::teachers::Column::Id"
    )]
    Teacher,
    #[sea_orm(has_many = "super::classroom_students::Entity")]
    ClassroomStudents,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::classroom_students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassroomStudents.def()
    }
}

// 经由关联表取得班级学生
impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        super::classroom_students::Relation::Student.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::classroom_students::Relation::Classroom.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_classroom(self) -> crate::models::classrooms::entities::Classroom {
        crate::models::classrooms::entities::Classroom {
            id: self.id,
            class_name: self.class_name,
            course_id: self.course_id,
            teacher_id: self.teacher_id,
            start_date: super::parse_date(&self.start_date),
            end_date: super::parse_date(&self.end_date),
            schedule: self.schedule,
            location: self.location,
            status: super::parse_status(&self.status),
            created_at: super::from_timestamp(self.created_at),
        }
    }
}
