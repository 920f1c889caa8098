//! emphub - 员工记录管理服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Employee Context: 员工实体与字段校验
//!
//! 应用层 (application/):
//! - Ports: EmployeeRepositoryPort
//! - Commands / Queries: CQRS 处理器
//! - EmployeeService: 面向用例的组合入口
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: SQLite 存储
//! - Memory: 内存存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
