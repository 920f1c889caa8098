//! Employee Context - 员工限界上下文
//!
//! 职责:
//! - 员工身份（store 分配的 id）
//! - 姓名与邮箱的基本校验
//! - 就地更新的生命周期规则

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::Employee;
pub use errors::EmployeeError;
pub use value_objects::{Email, EmployeeId, PersonName};
