use tracing::debug;

use super::{IdentityLookup, USER_ID_KEY};

/// 已认证的调用方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub account_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Authenticated(Identity),
    Unauthenticated,
}

impl GateDecision {
    pub fn identity(self) -> Option<Identity> {
        match self {
            GateDecision::Authenticated(identity) => Some(identity),
            GateDecision::Unauthenticated => None,
        }
    }
}

pub struct SessionGate;

impl SessionGate {
    /// 会话中 `UserId` 必须是 UTF-8 编码的整数账号ID
    pub fn check(lookup: &dyn IdentityLookup) -> GateDecision {
        let Some(raw) = lookup.try_get(USER_ID_KEY) else {
            debug!("Session gate: no {} in session", USER_ID_KEY);
            return GateDecision::Unauthenticated;
        };

        match std::str::from_utf8(&raw)
            .ok()
            .and_then(|text| text.trim().parse::<i64>().ok())
        {
            Some(account_id) => GateDecision::Authenticated(Identity { account_id }),
            None => {
                debug!("Session gate: malformed {} value", USER_ID_KEY);
                GateDecision::Unauthenticated
            }
        }
    }
}
