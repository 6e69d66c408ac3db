//! 班级学生关联存储操作

use super::{SeaOrmStorage, read_error, write_error};
use crate::entity::classroom_students::{self, ActiveModel, Entity as ClassroomStudents};
use crate::entity::students::{self, Entity as Students};
use crate::errors::Result;
use crate::models::students::entities::Student;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Set, TransactionTrait,
};
use sea_orm::sea_query::JoinType;

impl SeaOrmStorage {
    /// 列出班级内学生（按学生ID升序）
    pub async fn list_classroom_students_impl(&self, classroom_id: i64) -> Result<Vec<Student>> {
        let result = Students::find()
            .join(
                JoinType::InnerJoin,
                students::Relation::ClassroomStudents.def(),
            )
            .filter(classroom_students::Column::ClassroomId.eq(classroom_id))
            .order_by_asc(students::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| read_error("查询班级学生失败", e))?;

        Ok(result.into_iter().map(|m| m.into_student()).collect())
    }

    /// 替换班级学生
    pub async fn replace_classroom_students_impl(
        &self,
        classroom_id: i64,
        student_ids: &[i64],
    ) -> Result<()> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| write_error("开启事务失败", e))?;

        ClassroomStudents::delete_many()
            .filter(classroom_students::Column::ClassroomId.eq(classroom_id))
            .exec(&txn)
            .await
            .map_err(|e| write_error("清除班级学生失败", e))?;

        let now = chrono::Utc::now().timestamp();
        let mut seen = std::collections::HashSet::new();
        for &student_id in student_ids.iter().filter(|id| seen.insert(**id)) {
            ActiveModel {
                classroom_id: Set(classroom_id),
                student_id: Set(student_id),
                joined_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| write_error("添加班级学生失败", e))?;
        }

        txn.commit()
            .await
            .map_err(|e| write_error("提交事务失败", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[tokio::test]
    async fn test_fresh_classroom_has_no_students() {
        let storage = test_support::seeded_storage().await;
        assert!(storage.list_classroom_students_impl(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_replace_sets_membership_and_dedups() {
        let storage = test_support::seeded_storage().await;

        storage
            .replace_classroom_students_impl(1, &[2, 1, 2])
            .await
            .unwrap();
        let names: Vec<_> = storage
            .list_classroom_students_impl(1)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.full_name)
            .collect();
        assert_eq!(names, ["Nguyen Van A", "Tran Thi B"]);

        storage.replace_classroom_students_impl(1, &[2]).await.unwrap();
        let remaining = storage.list_classroom_students_impl(1).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);

        // 其它班级不受影响
        assert!(storage.list_classroom_students_impl(2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_student_rolls_back() {
        let storage = test_support::seeded_storage().await;
        storage.replace_classroom_students_impl(1, &[1]).await.unwrap();

        assert!(
            storage
                .replace_classroom_students_impl(1, &[2, 999])
                .await
                .is_err()
        );
        let students = storage.list_classroom_students_impl(1).await.unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].id, 1);
    }
}
