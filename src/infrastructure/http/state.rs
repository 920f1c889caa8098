//! Application State
//!
//! 由 main 显式构造并注入，不使用全局单例

use std::sync::Arc;

use crate::application::{EmployeeRepositoryPort, EmployeeService};

/// 应用状态
pub struct AppState {
    pub employee_service: EmployeeService,
}

impl AppState {
    /// 创建应用状态
    pub fn new(employee_repo: Arc<dyn EmployeeRepositoryPort>) -> Self {
        Self {
            employee_service: EmployeeService::new(employee_repo),
        }
    }
}
