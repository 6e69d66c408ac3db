use crate::models::accounts::entities::Account;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginResponse {
    pub account: Account,
    // 会话过期时间 (秒)
    pub expires_in: u64,
}

// 登录入口页
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginPrompt {
    pub title: String,
    pub system_name: String,
}
