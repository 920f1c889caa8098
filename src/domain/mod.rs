//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Employee Context: 员工记录

pub mod employee;

pub use employee::{Email, Employee, EmployeeError, EmployeeId, PersonName};
