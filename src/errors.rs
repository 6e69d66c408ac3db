//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_sims_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SimsError {
            $($variant(String),)*
        }

        impl SimsError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SimsError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SimsError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SimsError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SimsError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SimsError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_sims_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    Validation("E006", "Validation Error"),
    Conflict("E007", "Resource Conflict"),
    Session("E008", "Session Error"),
}

impl SimsError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SimsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SimsError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for SimsError {
    fn from(err: sea_orm::DbErr) -> Self {
        // 唯一约束冲突单独归类，服务层据此回退为字段级校验错误
        if let Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
            return SimsError::Conflict(detail);
        }
        SimsError::DatabaseOperation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SimsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SimsError::cache_connection("test").code(), "E001");
        assert_eq!(SimsError::database_config("test").code(), "E003");
        assert_eq!(SimsError::validation("test").code(), "E006");
        assert_eq!(SimsError::session("test").code(), "E008");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SimsError::cache_connection("test").error_type(),
            "Cache Connection Error"
        );
        assert_eq!(
            SimsError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = SimsError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_conflict_constructor() {
        let err = SimsError::conflict("classrooms.class_name");
        assert_eq!(err.code(), "E007");
        assert_eq!(err.error_type(), "Resource Conflict");
        assert!(matches!(err, SimsError::Conflict(_)));
    }

    #[test]
    fn test_format_simple() {
        let err = SimsError::validation("Invalid URL");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid URL"));
    }
}
