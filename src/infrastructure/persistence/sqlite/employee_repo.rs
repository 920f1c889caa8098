//! SQLite Employee Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{EmployeeRepositoryPort, RepositoryError};
use crate::domain::{Email, Employee, EmployeeId};

/// SQLite Employee Repository
pub struct SqliteEmployeeRepository {
    pool: DbPool,
}

impl SqliteEmployeeRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct EmployeeRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = RepositoryError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let id = EmployeeId::new(row.id)
            .map_err(|e| RepositoryError::CorruptedRecord(e.to_string()))?;
        Employee::restore(id, row.first_name, row.last_name, row.email)
            .map_err(|e| RepositoryError::CorruptedRecord(format!("employee {}: {}", id, e)))
    }
}

/// email 唯一约束冲突单独映射，其余一律视为数据库错误
fn map_write_error(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RepositoryError::Duplicate(db.message().to_string())
        }
        other => RepositoryError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl EmployeeRepositoryPort for SqliteEmployeeRepository {
    async fn find_by_email(&self, email: &Email) -> Result<Option<Employee>, RepositoryError> {
        let row: Option<EmployeeRow> = sqlx::query_as(
            "SELECT id, first_name, last_name, email FROM employees WHERE email = ?",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(Employee::try_from).transpose()
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        let row: Option<EmployeeRow> = sqlx::query_as(
            "SELECT id, first_name, last_name, email FROM employees WHERE id = ?",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(Employee::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        let rows: Vec<EmployeeRow> = sqlx::query_as(
            "SELECT id, first_name, last_name, email FROM employees ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Employee::try_from).collect()
    }

    async fn save(&self, mut employee: Employee) -> Result<Employee, RepositoryError> {
        match employee.id() {
            Some(id) => {
                sqlx::query(
                    r#"
                    INSERT INTO employees (id, first_name, last_name, email)
                    VALUES (?, ?, ?, ?)
                    ON CONFLICT(id) DO UPDATE SET
                        first_name = excluded.first_name,
                        last_name = excluded.last_name,
                        email = excluded.email
                    "#,
                )
                .bind(id.value())
                .bind(employee.first_name().as_str())
                .bind(employee.last_name().as_str())
                .bind(employee.email().as_str())
                .execute(&self.pool)
                .await
                .map_err(map_write_error)?;
            }
            None => {
                let result = sqlx::query(
                    "INSERT INTO employees (first_name, last_name, email) VALUES (?, ?, ?)",
                )
                .bind(employee.first_name().as_str())
                .bind(employee.last_name().as_str())
                .bind(employee.email().as_str())
                .execute(&self.pool)
                .await
                .map_err(map_write_error)?;

                let id = EmployeeId::new(result.last_insert_rowid())
                    .map_err(|e| RepositoryError::CorruptedRecord(e.to_string()))?;
                employee
                    .assign_id(id)
                    .map_err(|e| RepositoryError::CorruptedRecord(e.to_string()))?;
            }
        }

        Ok(employee)
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        tracing::debug!(
            employee_id = %id,
            rows_affected = result.rows_affected(),
            "Employee delete executed"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};

    async fn repo() -> SqliteEmployeeRepository {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteEmployeeRepository::new(pool)
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = repo().await;

        let first = repo
            .save(Employee::new("Dowlath", "Basha", "dowlath@mail.com").unwrap())
            .await
            .unwrap();
        let second = repo
            .save(Employee::new("Ariz", "Dowlath", "ariz@mail.com").unwrap())
            .await
            .unwrap();

        assert_eq!(first.id().unwrap().value(), 1);
        assert_eq!(second.id().unwrap().value(), 2);

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn test_find_by_email_is_case_sensitive() {
        let repo = repo().await;
        repo.save(Employee::new("Dowlath", "Basha", "dowlath@mail.com").unwrap())
            .await
            .unwrap();

        let exact = Email::new("dowlath@mail.com").unwrap();
        let shouting = Email::new("DOWLATH@mail.com").unwrap();
        assert!(repo.find_by_email(&exact).await.unwrap().is_some());
        assert!(repo.find_by_email(&shouting).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unique_email_violation_maps_to_duplicate() {
        let repo = repo().await;
        repo.save(Employee::new("Dowlath", "Basha", "dowlath@mail.com").unwrap())
            .await
            .unwrap();

        let result = repo
            .save(Employee::new("Other", "Person", "dowlath@mail.com").unwrap())
            .await;

        assert!(matches!(result, Err(RepositoryError::Duplicate(_))));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_existing_overwrites_in_place() {
        let repo = repo().await;
        let mut saved = repo
            .save(Employee::new("Dowlath", "Basha", "dowlath@mail.com").unwrap())
            .await
            .unwrap();
        let id = saved.id().unwrap();

        saved
            .update_details("Arsh", "Dowlath", "arsh@mail.com")
            .unwrap();
        repo.save(saved).await.unwrap();

        let stored = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.first_name().as_str(), "Arsh");
        assert_eq!(stored.email().as_str(), "arsh@mail.com");
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_existing_with_own_email() {
        let repo = repo().await;
        let mut saved = repo
            .save(Employee::new("Dowlath", "Basha", "dowlath@mail.com").unwrap())
            .await
            .unwrap();
        let id = saved.id().unwrap();

        // 邮箱不变，只改姓名
        saved
            .update_details("Arsh", "Dowlath", "dowlath@mail.com")
            .unwrap();
        let written = repo.save(saved.clone()).await.unwrap();
        assert_eq!(written, saved);

        let stored = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.first_name().as_str(), "Arsh");
        assert_eq!(stored.last_name().as_str(), "Dowlath");
        assert_eq!(stored.email().as_str(), "dowlath@mail.com");
        assert_eq!(repo.find_all().await.unwrap(), vec![stored]);
    }

    #[tokio::test]
    async fn test_save_existing_onto_taken_email_is_duplicate() {
        let repo = repo().await;
        repo.save(Employee::new("Dowlath", "Basha", "dowlath@mail.com").unwrap())
            .await
            .unwrap();
        let mut ariz = repo
            .save(Employee::new("Ariz", "Dowlath", "ariz@mail.com").unwrap())
            .await
            .unwrap();
        let before = ariz.clone();

        ariz.update_details("Ariz", "Dowlath", "dowlath@mail.com")
            .unwrap();
        let result = repo.save(ariz).await;

        assert!(matches!(result, Err(RepositoryError::Duplicate(_))));
        let stored = repo.find_by_id(before.id().unwrap()).await.unwrap().unwrap();
        assert_eq!(stored, before);
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_silent() {
        let repo = repo().await;
        let saved = repo
            .save(Employee::new("Dowlath", "Basha", "dowlath@mail.com").unwrap())
            .await
            .unwrap();
        let id = saved.id().unwrap();

        repo.delete_by_id(id).await.unwrap();
        repo.delete_by_id(id).await.unwrap();
        assert!(repo.find_by_id(id).await.unwrap().is_none());

        // AUTOINCREMENT：删除后 id 不复用
        let next = repo
            .save(Employee::new("Dowlath", "Basha", "dowlath@mail.com").unwrap())
            .await
            .unwrap();
        assert_eq!(next.id().unwrap().value(), 2);
    }
}
