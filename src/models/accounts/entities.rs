use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 账号角色
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/account.ts")]
pub enum AccountRole {
    Admin,   // 管理员
    Teacher, // 教师
    Student, // 学生
}

impl AccountRole {
    pub const ADMIN: &'static str = "admin";
    pub const TEACHER: &'static str = "teacher";
    pub const STUDENT: &'static str = "student";
}

impl std::fmt::Display for AccountRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountRole::Admin => write!(f, "{}", AccountRole::ADMIN),
            AccountRole::Teacher => write!(f, "{}", AccountRole::TEACHER),
            AccountRole::Student => write!(f, "{}", AccountRole::STUDENT),
        }
    }
}

impl std::str::FromStr for AccountRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            AccountRole::ADMIN => Ok(AccountRole::Admin),
            AccountRole::TEACHER => Ok(AccountRole::Teacher),
            AccountRole::STUDENT => Ok(AccountRole::Student),
            _ => Err(format!("Invalid account role: {s}")),
        }
    }
}

// 登录账号，教师与学生各自关联一个账号
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/account.ts")]
pub struct Account {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    #[ts(skip)]
    pub password_hash: String,
    pub role: AccountRole,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 创建账号请求（密码已哈希）
#[derive(Debug, Clone)]
pub struct CreateAccountRequest {
    pub username: String,
    pub password_hash: String,
    pub role: AccountRole,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}
