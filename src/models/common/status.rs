use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 记录状态（课程、教师、学生、班级共用）
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/common.ts")]
pub enum RecordStatus {
    #[default]
    Active,
    Inactive,
}

impl RecordStatus {
    pub const ACTIVE: &'static str = "Active";
    pub const INACTIVE: &'static str = "Inactive";
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordStatus::Active => write!(f, "{}", RecordStatus::ACTIVE),
            RecordStatus::Inactive => write!(f, "{}", RecordStatus::INACTIVE),
        }
    }
}

impl std::str::FromStr for RecordStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            RecordStatus::ACTIVE => Ok(RecordStatus::Active),
            RecordStatus::INACTIVE => Ok(RecordStatus::Inactive),
            _ => Err(format!("Invalid record status: {s}")),
        }
    }
}
