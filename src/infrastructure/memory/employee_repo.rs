//! In-Memory Employee Repository Implementation

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::application::ports::{EmployeeRepositoryPort, RepositoryError};
use crate::domain::{Email, Employee, EmployeeId};

/// 内存员工仓储
///
/// 两张表：id -> 记录，email -> id。
/// 加锁顺序固定为先 email 索引再记录表。
pub struct InMemoryEmployeeRepository {
    records: DashMap<EmployeeId, Employee>,
    email_index: DashMap<String, EmployeeId>,
    next_id: AtomicI64,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            email_index: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    fn allocate_id(&self) -> Result<EmployeeId, RepositoryError> {
        let raw = self.next_id.fetch_add(1, Ordering::SeqCst);
        EmployeeId::new(raw).map_err(|e| RepositoryError::CorruptedRecord(e.to_string()))
    }

    fn insert_new(&self, mut employee: Employee) -> Result<Employee, RepositoryError> {
        let email = employee.email().as_str().to_string();
        match self.email_index.entry(email) {
            Entry::Occupied(entry) => Err(RepositoryError::Duplicate(format!(
                "email {} already used by employee {}",
                entry.key(),
                entry.get()
            ))),
            Entry::Vacant(entry) => {
                let id = self.allocate_id()?;
                employee
                    .assign_id(id)
                    .map_err(|e| RepositoryError::CorruptedRecord(e.to_string()))?;
                let _guard = entry.insert(id);
                self.records.insert(id, employee.clone());
                tracing::debug!(employee_id = %id, "Employee inserted");
                Ok(employee)
            }
        }
    }

    fn overwrite(&self, id: EmployeeId, employee: Employee) -> Result<Employee, RepositoryError> {
        let email = employee.email().as_str().to_string();

        // 旧记录取自 insert 的返回值，与替换是同一次原子操作
        let previous = match self.email_index.entry(email.clone()) {
            Entry::Occupied(entry) if *entry.get() != id => {
                return Err(RepositoryError::Duplicate(format!(
                    "email {} already used by employee {}",
                    entry.key(),
                    entry.get()
                )));
            }
            Entry::Occupied(_) => self.records.insert(id, employee.clone()),
            Entry::Vacant(entry) => {
                let _guard = entry.insert(id);
                self.records.insert(id, employee.clone())
            }
        };

        if let Some(previous) = previous {
            let previous_email = previous.email().as_str();
            if previous_email != email {
                self.release_email(id, previous_email);
            }
        }

        tracing::debug!(employee_id = %id, "Employee overwritten");
        Ok(employee)
    }

    /// 释放 id 占用的邮箱索引
    ///
    /// 索引仍指向该 id 且记录当前已不使用该邮箱时才删除
    fn release_email(&self, id: EmployeeId, email: &str) {
        self.email_index.remove_if(email, |_, owner| {
            *owner == id
                && self
                    .records
                    .get(&id)
                    .map_or(true, |record| record.email().as_str() != email)
        });
    }
}

impl Default for InMemoryEmployeeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmployeeRepositoryPort for InMemoryEmployeeRepository {
    async fn find_by_email(&self, email: &Email) -> Result<Option<Employee>, RepositoryError> {
        let Some(id) = self.email_index.get(email.as_str()).map(|entry| *entry) else {
            return Ok(None);
        };
        Ok(self.records.get(&id).map(|r| r.clone()))
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        Ok(self.records.get(&id).map(|r| r.clone()))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        let mut employees: Vec<Employee> = self.records.iter().map(|e| e.value().clone()).collect();
        employees.sort_by_key(|e| e.id());
        Ok(employees)
    }

    async fn save(&self, employee: Employee) -> Result<Employee, RepositoryError> {
        match employee.id() {
            Some(id) => self.overwrite(id, employee),
            None => self.insert_new(employee),
        }
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), RepositoryError> {
        if let Some((_, removed)) = self.records.remove(&id) {
            self.release_email(id, removed.email().as_str());
            tracing::debug!(employee_id = %id, "Employee removed");
        }
        Ok(())
    }
}
