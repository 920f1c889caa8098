//! Employee Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateEmployee, DeleteEmployee, UpdateEmployee};
use crate::application::error::ApplicationError;
use crate::application::ports::{EmployeeRepositoryPort, RepositoryError};
use crate::application::queries::handlers::EmployeeView;
use crate::domain::Employee;

/// 保存员工；存储层的 email 唯一约束冲突转换为 DuplicateEmail
async fn save_checked(
    employee_repo: &dyn EmployeeRepositoryPort,
    employee: Employee,
) -> Result<Employee, ApplicationError> {
    let email = employee.email().as_str().to_string();
    match employee_repo.save(employee).await {
        Ok(stored) => Ok(stored),
        Err(RepositoryError::Duplicate(detail)) => {
            tracing::warn!(email = %email, detail = %detail, "Store rejected duplicate email");
            Err(ApplicationError::duplicate_email(email))
        }
        Err(e) => Err(e.into()),
    }
}

// ============================================================================
// CreateEmployee
// ============================================================================

/// CreateEmployee Handler
pub struct CreateEmployeeHandler {
    employee_repo: Arc<dyn EmployeeRepositoryPort>,
}

impl CreateEmployeeHandler {
    pub fn new(employee_repo: Arc<dyn EmployeeRepositoryPort>) -> Self {
        Self { employee_repo }
    }

    pub async fn handle(&self, command: CreateEmployee) -> Result<EmployeeView, ApplicationError> {
        let candidate = Employee::new(command.first_name, command.last_name, command.email)?;

        // 先按邮箱查重，冲突时不写入
        if let Some(existing) = self.employee_repo.find_by_email(candidate.email()).await? {
            tracing::warn!(
                email = %candidate.email(),
                existing_id = ?existing.id().map(|id| id.value()),
                "Duplicate email rejected"
            );
            return Err(ApplicationError::duplicate_email(candidate.email().as_str()));
        }

        let stored = save_checked(self.employee_repo.as_ref(), candidate).await?;
        let view = EmployeeView::try_from(stored)?;

        tracing::info!(
            employee_id = %view.id,
            email = %view.email,
            "Employee created"
        );

        Ok(view)
    }
}

// ============================================================================
// UpdateEmployee
// ============================================================================

/// UpdateEmployee Handler
///
/// 不预先检查邮箱是否被其他员工占用，只依赖存储层唯一约束
pub struct UpdateEmployeeHandler {
    employee_repo: Arc<dyn EmployeeRepositoryPort>,
}

impl UpdateEmployeeHandler {
    pub fn new(employee_repo: Arc<dyn EmployeeRepositoryPort>) -> Self {
        Self { employee_repo }
    }

    /// 不存在时返回 `Ok(None)` 且不写入
    pub async fn handle(
        &self,
        command: UpdateEmployee,
    ) -> Result<Option<EmployeeView>, ApplicationError> {
        let employee_id = command.employee_id;

        let Some(mut employee) = self.employee_repo.find_by_id(employee_id).await? else {
            tracing::debug!(employee_id = %employee_id, "Update skipped, employee not found");
            return Ok(None);
        };

        employee.update_details(command.first_name, command.last_name, command.email)?;

        let stored = save_checked(self.employee_repo.as_ref(), employee).await?;
        let view = EmployeeView::try_from(stored)?;

        tracing::info!(
            employee_id = %view.id,
            email = %view.email,
            "Employee updated"
        );

        Ok(Some(view))
    }
}

// ============================================================================
// DeleteEmployee
// ============================================================================

/// DeleteEmployee Handler
///
/// 语义为 "确保不存在"：删除不存在的 id 同样成功
pub struct DeleteEmployeeHandler {
    employee_repo: Arc<dyn EmployeeRepositoryPort>,
}

impl DeleteEmployeeHandler {
    pub fn new(employee_repo: Arc<dyn EmployeeRepositoryPort>) -> Self {
        Self { employee_repo }
    }

    pub async fn handle(&self, command: DeleteEmployee) -> Result<(), ApplicationError> {
        self.employee_repo.delete_by_id(command.employee_id).await?;

        tracing::info!(employee_id = %command.employee_id, "Employee deleted");

        Ok(())
    }
}
