//! Employee Context - Value Objects

use serde::{Deserialize, Serialize};

use super::EmployeeError;

/// 字段最大长度（字符数）
const MAX_FIELD_CHARS: usize = 255;

/// 员工唯一标识
///
/// 由 Record Store 在首次保存时分配，始终为正整数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EmployeeId(i64);

impl EmployeeId {
    pub fn new(value: i64) -> Result<Self, EmployeeError> {
        if value <= 0 {
            return Err(EmployeeError::InvalidId(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 姓名（firstName / lastName 共用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName(String);

impl PersonName {
    pub fn new(name: impl Into<String>) -> Result<Self, &'static str> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("must not be empty");
        }
        if name.chars().count() > MAX_FIELD_CHARS {
            return Err("must be at most 255 characters");
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 邮箱
///
/// 不做大小写归一化：唯一性按字节比较
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    pub fn new(email: impl Into<String>) -> Result<Self, &'static str> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err("must not be empty");
        }
        if email.chars().count() > MAX_FIELD_CHARS {
            return Err("must be at most 255 characters");
        }
        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
