//! Employee Context - Errors

use thiserror::Error;

use super::EmployeeId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmployeeError {
    #[error("invalid {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },

    #[error("employee id already assigned: {0}")]
    IdAlreadyAssigned(EmployeeId),

    #[error("invalid employee id: {0}")]
    InvalidId(i64),
}
