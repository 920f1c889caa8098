//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（EmployeeRepository）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - service: 组合处理器的 EmployeeService
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod service;

// Re-exports
pub use commands::{
    handlers::{CreateEmployeeHandler, DeleteEmployeeHandler, UpdateEmployeeHandler},
    CreateEmployee, DeleteEmployee, UpdateEmployee,
};

pub use error::ApplicationError;

pub use ports::{EmployeeRepositoryPort, RepositoryError};

pub use queries::{
    handlers::{EmployeeView, GetEmployeeHandler, ListEmployeesHandler},
    GetEmployee, ListEmployees,
};

pub use service::EmployeeService;
