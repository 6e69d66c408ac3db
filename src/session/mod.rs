//! 会话
//!
//! - `IdentityLookup`: 按键读取会话中的原始字节
//! - `SessionGate`: 检查登录标识是否存在且格式正确
//! - `SessionStore`: 基于对象缓存的会话持久化与 Cookie 处理

pub mod gate;
pub mod store;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use gate::{GateDecision, Identity, SessionGate};
pub use store::SessionStore;

/// 登录标识在会话中的键
pub const USER_ID_KEY: &str = "UserId";

/// 按键读取会话数据
pub trait IdentityLookup {
    fn try_get(&self, key: &str) -> Option<Vec<u8>>;
}

/// 单个请求的会话数据
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    values: HashMap<String, Vec<u8>>,
}

impl SessionState {
    pub fn insert(&mut self, key: impl Into<String>, value: Vec<u8>) {
        self.values.insert(key.into(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<Vec<u8>> {
        self.values.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 写入登录标识
    pub fn sign_in(&mut self, account_id: i64) {
        self.insert(USER_ID_KEY, account_id.to_string().into_bytes());
    }
}

impl IdentityLookup for SessionState {
    fn try_get(&self, key: &str) -> Option<Vec<u8>> {
        self.values.get(key).cloned()
    }
}
