//! Employee Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::EmployeeRepositoryPort;
use crate::application::queries::{GetEmployee, ListEmployees};
use crate::domain::{Employee, EmployeeId};

// ============================================================================
// Response DTOs
// ============================================================================

/// 已持久化员工的只读视图
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeView {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl TryFrom<Employee> for EmployeeView {
    type Error = ApplicationError;

    fn try_from(employee: Employee) -> Result<Self, Self::Error> {
        let id = employee
            .id()
            .ok_or_else(|| ApplicationError::internal("stored employee has no id"))?;

        Ok(Self {
            id,
            first_name: employee.first_name().as_str().to_string(),
            last_name: employee.last_name().as_str().to_string(),
            email: employee.email().as_str().to_string(),
        })
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetEmployee Handler
pub struct GetEmployeeHandler {
    employee_repo: Arc<dyn EmployeeRepositoryPort>,
}

impl GetEmployeeHandler {
    pub fn new(employee_repo: Arc<dyn EmployeeRepositoryPort>) -> Self {
        Self { employee_repo }
    }

    /// 不存在时返回 `Ok(None)`
    pub async fn handle(&self, query: GetEmployee) -> Result<Option<EmployeeView>, ApplicationError> {
        match self.employee_repo.find_by_id(query.employee_id).await? {
            Some(employee) => Ok(Some(EmployeeView::try_from(employee)?)),
            None => {
                tracing::debug!(employee_id = %query.employee_id, "Employee not found");
                Ok(None)
            }
        }
    }
}

/// ListEmployees Handler
pub struct ListEmployeesHandler {
    employee_repo: Arc<dyn EmployeeRepositoryPort>,
}

impl ListEmployeesHandler {
    pub fn new(employee_repo: Arc<dyn EmployeeRepositoryPort>) -> Self {
        Self { employee_repo }
    }

    pub async fn handle(&self, _query: ListEmployees) -> Result<Vec<EmployeeView>, ApplicationError> {
        let employees = self.employee_repo.find_all().await?;
        employees.into_iter().map(EmployeeView::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryEmployeeRepository;

    async fn seeded_repo() -> Arc<InMemoryEmployeeRepository> {
        let repo = Arc::new(InMemoryEmployeeRepository::new());
        for (first, last, email) in [
            ("Dowlath", "Basha", "dowlath@mail.com"),
            ("Ariz", "Dowlath", "ariz@mail.com"),
            ("Arsh", "Dowlath", "arsh@mail.com"),
        ] {
            repo.save(Employee::new(first, last, email).unwrap())
                .await
                .unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn test_list_returns_insertion_order() {
        let handler = ListEmployeesHandler::new(seeded_repo().await);

        let employees = handler.handle(ListEmployees).await.unwrap();

        let emails: Vec<&str> = employees.iter().map(|e| e.email.as_str()).collect();
        assert_eq!(emails, ["dowlath@mail.com", "ariz@mail.com", "arsh@mail.com"]);
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let handler = ListEmployeesHandler::new(Arc::new(InMemoryEmployeeRepository::new()));
        assert!(handler.handle(ListEmployees).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_existing_and_missing() {
        let handler = GetEmployeeHandler::new(seeded_repo().await);

        let found = handler
            .handle(GetEmployee {
                employee_id: EmployeeId::new(2).unwrap(),
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.first_name, "Ariz");

        let missing = handler
            .handle(GetEmployee {
                employee_id: EmployeeId::new(99).unwrap(),
            })
            .await
            .unwrap();
        assert!(missing.is_none());
    }
}
