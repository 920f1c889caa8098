//! Employee Commands

use crate::domain::EmployeeId;

/// 创建员工命令
#[derive(Debug, Clone)]
pub struct CreateEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// 更新员工命令（整体覆盖姓名和邮箱）
#[derive(Debug, Clone)]
pub struct UpdateEmployee {
    pub employee_id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// 删除员工命令
#[derive(Debug, Clone)]
pub struct DeleteEmployee {
    pub employee_id: EmployeeId,
}
