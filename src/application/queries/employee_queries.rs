//! Employee Queries

use crate::domain::EmployeeId;

/// 获取员工详情查询
#[derive(Debug, Clone)]
pub struct GetEmployee {
    pub employee_id: EmployeeId,
}

/// 列出所有员工查询
#[derive(Debug, Clone)]
pub struct ListEmployees;
