//! 应用层错误定义
//!
//! 统一的命令/查询错误类型。
//! "不存在" 不是错误：查询与更新以 `Option::None` 表达。

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::EmployeeError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 邮箱已被其他员工占用
    #[error("Email already exists: {email}")]
    DuplicateEmail { email: String },

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 仓储错误，原样透传
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建邮箱冲突错误
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
        }
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<EmployeeError> for ApplicationError {
    fn from(err: EmployeeError) -> Self {
        match err {
            EmployeeError::InvalidField { .. } | EmployeeError::InvalidId(_) => {
                Self::ValidationError(err.to_string())
            }
            EmployeeError::IdAlreadyAssigned(_) => Self::InternalError(err.to_string()),
        }
    }
}
