//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 数据库约束冲突（唯一、外键）会被识别为独立的错误类型。

use std::fmt;

use sea_orm::{DbErr, SqlErr};

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - with_context() 方法 - 为错误详情添加上下文前缀
/// - 便捷构造函数
macro_rules! define_crm_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum CrmError {
            $($variant(String),)*
        }

        impl CrmError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(CrmError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(CrmError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(CrmError::$variant(msg) => msg,)*
                }
            }

            /// 保留错误类型，在详情前加上上下文
            pub fn with_context(self, context: &str) -> Self {
                match self {
                    $(CrmError::$variant(msg) => CrmError::$variant(format!("{context}: {msg}")),)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl CrmError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        CrmError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_crm_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    UniqueViolation("E004", "Unique Constraint Violation"),
    ForeignKeyViolation("E005", "Foreign Key Constraint Violation"),
    Validation("E006", "Validation Error"),
    InvalidChoice("E007", "Invalid Choice Value"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
}

impl CrmError {
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

    pub fn is_unique_violation(&self) -> bool {
        matches!(self, CrmError::UniqueViolation(_))
    }
}

impl fmt::Display for CrmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CrmError {}

// 数据库错误按约束类型分类
impl From<DbErr> for CrmError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => CrmError::UniqueViolation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => CrmError::ForeignKeyViolation(msg),
            _ => CrmError::DatabaseOperation(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for CrmError {
    fn from(err: serde_json::Error) -> Self {
        CrmError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CrmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CrmError::database_config("test").code(), "E001");
        assert_eq!(CrmError::unique_violation("test").code(), "E004");
        assert_eq!(CrmError::validation("test").code(), "E006");
        assert_eq!(CrmError::invalid_choice("test").code(), "E007");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            CrmError::foreign_key_violation("test").error_type(),
            "Foreign Key Constraint Violation"
        );
        assert_eq!(CrmError::validation("test").error_type(), "Validation Error");
    }

    #[test]
    fn test_with_context_keeps_variant() {
        let err = CrmError::unique_violation("customers.qq").with_context("创建客户失败");
        assert!(err.is_unique_violation());
        assert_eq!(err.message(), "创建客户失败: customers.qq");
    }

    #[test]
    fn test_unclassified_db_error() {
        let err = CrmError::from(DbErr::Custom("boom".to_string()));
        assert_eq!(err.code(), "E003");
        assert!(err.message().contains("boom"));
    }

    #[test]
    fn test_format_simple() {
        let err = CrmError::validation("qq 不能为空");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("qq 不能为空"));
    }
}
