//! Employee Service
//!
//! 把员工相关的命令/查询处理器组合成一个面向用例的入口，
//! HTTP 层只依赖这一个对象。

use std::sync::Arc;

use crate::application::commands::handlers::{
    CreateEmployeeHandler, DeleteEmployeeHandler, UpdateEmployeeHandler,
};
use crate::application::commands::{CreateEmployee, DeleteEmployee, UpdateEmployee};
use crate::application::error::ApplicationError;
use crate::application::ports::EmployeeRepositoryPort;
use crate::application::queries::handlers::{EmployeeView, GetEmployeeHandler, ListEmployeesHandler};
use crate::application::queries::{GetEmployee, ListEmployees};
use crate::domain::EmployeeId;

/// 员工服务
///
/// 不缓存任何记录，每次调用都重新读取存储
pub struct EmployeeService {
    create_handler: CreateEmployeeHandler,
    update_handler: UpdateEmployeeHandler,
    delete_handler: DeleteEmployeeHandler,
    get_handler: GetEmployeeHandler,
    list_handler: ListEmployeesHandler,
}

impl EmployeeService {
    pub fn new(employee_repo: Arc<dyn EmployeeRepositoryPort>) -> Self {
        Self {
            create_handler: CreateEmployeeHandler::new(employee_repo.clone()),
            update_handler: UpdateEmployeeHandler::new(employee_repo.clone()),
            delete_handler: DeleteEmployeeHandler::new(employee_repo.clone()),
            get_handler: GetEmployeeHandler::new(employee_repo.clone()),
            list_handler: ListEmployeesHandler::new(employee_repo),
        }
    }

    pub async fn create(&self, command: CreateEmployee) -> Result<EmployeeView, ApplicationError> {
        self.create_handler.handle(command).await
    }

    pub async fn list_all(&self) -> Result<Vec<EmployeeView>, ApplicationError> {
        self.list_handler.handle(ListEmployees).await
    }

    pub async fn get_by_id(&self, employee_id: EmployeeId) -> Result<Option<EmployeeView>, ApplicationError> {
        self.get_handler.handle(GetEmployee { employee_id }).await
    }

    pub async fn update(&self, command: UpdateEmployee) -> Result<Option<EmployeeView>, ApplicationError> {
        self.update_handler.handle(command).await
    }

    pub async fn delete(&self, employee_id: EmployeeId) -> Result<(), ApplicationError> {
        self.delete_handler.handle(DeleteEmployee { employee_id }).await
    }
}
