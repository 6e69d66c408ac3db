//! 初始数据整体写入

use super::accounts::insert_account;
use super::classrooms::insert_classroom;
use super::references::{insert_course, insert_student, insert_teacher};
use super::{SeaOrmStorage, write_error};
use crate::errors::{Result, SimsError};
use crate::storage::Dataset;
use sea_orm::TransactionTrait;

/// 把数据集内下标换成已写入记录的ID
fn resolve(ids: &[i64], index: i64, what: &str) -> Result<i64> {
    usize::try_from(index)
        .ok()
        .and_then(|i| ids.get(i).copied())
        .ok_or_else(|| SimsError::validation(format!("Dataset references unknown {what} #{index}")))
}

impl SeaOrmStorage {
    pub async fn import_dataset_impl(&self, dataset: Dataset) -> Result<()> {
        // 未提交的事务在 drop 时回滚
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| write_error("开启事务失败", e))?;

        let mut account_ids = Vec::with_capacity(dataset.accounts.len());
        for account in dataset.accounts {
            account_ids.push(insert_account(&txn, account).await?.id);
        }

        let mut course_ids = Vec::with_capacity(dataset.courses.len());
        for course in dataset.courses {
            course_ids.push(insert_course(&txn, course).await?.id);
        }

        let mut teacher_ids = Vec::with_capacity(dataset.teachers.len());
        for mut teacher in dataset.teachers {
            teacher.account_id = resolve(&account_ids, teacher.account_id, "account")?;
            teacher_ids.push(insert_teacher(&txn, teacher).await?.id);
        }

        for mut student in dataset.students {
            student.account_id = resolve(&account_ids, student.account_id, "account")?;
            insert_student(&txn, student).await?;
        }

        for mut classroom in dataset.classrooms {
            classroom.course_id = resolve(&course_ids, classroom.course_id, "course")?;
            classroom.teacher_id = resolve(&teacher_ids, classroom.teacher_id, "teacher")?;
            insert_classroom(&txn, classroom).await?;
        }

        txn.commit()
            .await
            .map_err(|e| write_error("提交事务失败", e))?;
        Ok(())
    }
}
