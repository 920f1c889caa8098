//! In-Memory Implementations - 内存实现
//!
//! 进程内存储，重启即丢失；用于测试和 `database.backend = "memory"`

mod employee_repo;

pub use employee_repo::InMemoryEmployeeRepository;
