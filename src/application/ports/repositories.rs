//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite / 内存）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Email, Employee, EmployeeId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// 唯一约束冲突（email 索引）
    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupted record: {0}")]
    CorruptedRecord(String),
}

/// Employee Repository Port
///
/// 约定:
/// - `save` 对无 id 的记录分配新 id，对已有 id 的记录整体覆盖
/// - `delete_by_id` 对不存在的 id 静默成功
/// - email 在存储层唯一，冲突时返回 `RepositoryError::Duplicate`
#[async_trait]
pub trait EmployeeRepositoryPort: Send + Sync {
    /// 根据邮箱查找员工（字节级比较）
    async fn find_by_email(&self, email: &Email) -> Result<Option<Employee>, RepositoryError>;

    /// 根据 ID 查找员工
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError>;

    /// 获取所有员工（按 id 升序，即插入顺序）
    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError>;

    /// 保存员工，返回带 id 的存储结果
    async fn save(&self, employee: Employee) -> Result<Employee, RepositoryError>;

    /// 删除员工
    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), RepositoryError>;
}
