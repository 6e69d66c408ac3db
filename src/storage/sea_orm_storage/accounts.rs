//! 账号存储操作

use super::{SeaOrmStorage, read_error, write_error};
use crate::entity::accounts::{ActiveModel, Column, Entity as Accounts};
use crate::errors::Result;
use crate::models::accounts::entities::{Account, CreateAccountRequest};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
};

/// 写入账号，可在事务内调用
pub(super) async fn insert_account<C: ConnectionTrait>(
    conn: &C,
    req: CreateAccountRequest,
) -> Result<Account> {
    let model = ActiveModel {
        username: Set(req.username),
        password_hash: Set(req.password_hash),
        role: Set(req.role.to_string()),
        email: Set(req.email),
        phone: Set(req.phone),
        address: Set(req.address),
        created_at: Set(chrono::Utc::now().timestamp()),
        ..Default::default()
    };

    let result = model
        .insert(conn)
        .await
        .map_err(|e| write_error("创建账号失败", e))?;

    Ok(result.into_account())
}

impl SeaOrmStorage {
    /// 创建账号
    pub async fn create_account_impl(&self, req: CreateAccountRequest) -> Result<Account> {
        insert_account(&self.db, req).await
    }

    /// 通过用户名获取账号
    pub async fn get_account_by_username_impl(&self, username: &str) -> Result<Option<Account>> {
        let result = Accounts::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| read_error("查询账号失败", e))?;

        Ok(result.map(|m| m.into_account()))
    }

    /// 统计账号数量
    pub async fn count_accounts_impl(&self) -> Result<u64> {
        Accounts::find()
            .count(&self.db)
            .await
            .map_err(|e| read_error("统计账号失败", e))
    }
}
