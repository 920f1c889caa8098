//! Employee Context - Aggregate Root

use super::{Email, EmployeeError, EmployeeId, PersonName};

/// Employee 聚合根
///
/// 不变量:
/// - id 只在首次保存时由 Record Store 分配一次，之后不可更改
/// - first_name / last_name / email 均非空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id: Option<EmployeeId>,
    first_name: PersonName,
    last_name: PersonName,
    email: Email,
}

impl Employee {
    /// 创建尚未持久化的员工（无 id）
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, EmployeeError> {
        let (first_name, last_name, email) = parse_fields(first_name, last_name, email)?;
        Ok(Self {
            id: None,
            first_name,
            last_name,
            email,
        })
    }

    /// 从存储中恢复已持久化的员工
    pub fn restore(
        id: EmployeeId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, EmployeeError> {
        let mut employee = Self::new(first_name, last_name, email)?;
        employee.id = Some(id);
        Ok(employee)
    }

    /// 分配 id（仅限 Record Store 在首次保存时调用）
    pub fn assign_id(&mut self, id: EmployeeId) -> Result<(), EmployeeError> {
        if let Some(existing) = self.id {
            return Err(EmployeeError::IdAlreadyAssigned(existing));
        }
        self.id = Some(id);
        Ok(())
    }

    /// 覆盖姓名和邮箱，id 保持不变
    ///
    /// 任一字段无效时不做任何修改
    pub fn update_details(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<(), EmployeeError> {
        let (first_name, last_name, email) = parse_fields(first_name, last_name, email)?;
        self.first_name = first_name;
        self.last_name = last_name;
        self.email = email;
        Ok(())
    }

    // Getters
    pub fn id(&self) -> Option<EmployeeId> {
        self.id
    }

    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    pub fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}

fn parse_fields(
    first_name: impl Into<String>,
    last_name: impl Into<String>,
    email: impl Into<String>,
) -> Result<(PersonName, PersonName, Email), EmployeeError> {
    let first_name = PersonName::new(first_name).map_err(|reason| EmployeeError::InvalidField {
        field: "firstName",
        reason,
    })?;
    let last_name = PersonName::new(last_name).map_err(|reason| EmployeeError::InvalidField {
        field: "lastName",
        reason,
    })?;
    let email = Email::new(email).map_err(|reason| EmployeeError::InvalidField {
        field: "email",
        reason,
    })?;
    Ok((first_name, last_name, email))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_creation() {
        let employee = Employee::new("Dowlath", "Basha", "dowlath@mail.com").unwrap();

        assert!(employee.id().is_none());
        assert_eq!(employee.first_name().as_str(), "Dowlath");
        assert_eq!(employee.last_name().as_str(), "Basha");
        assert_eq!(employee.email().as_str(), "dowlath@mail.com");
    }

    #[test]
    fn test_invalid_field_is_named() {
        let err = Employee::new("Dowlath", "", "dowlath@mail.com").unwrap_err();
        assert_eq!(
            err,
            EmployeeError::InvalidField {
                field: "lastName",
                reason: "must not be empty",
            }
        );
    }

    #[test]
    fn test_id_assigned_once() {
        let mut employee = Employee::new("Dowlath", "Basha", "dowlath@mail.com").unwrap();
        let first = EmployeeId::new(1).unwrap();
        let second = EmployeeId::new(2).unwrap();

        employee.assign_id(first).unwrap();
        assert_eq!(
            employee.assign_id(second),
            Err(EmployeeError::IdAlreadyAssigned(first))
        );
        assert_eq!(employee.id(), Some(first));
    }

    #[test]
    fn test_update_details_keeps_id() {
        let id = EmployeeId::new(42).unwrap();
        let mut employee = Employee::restore(id, "Dowlath", "Basha", "dowlath@mail.com").unwrap();

        employee
            .update_details("Arsh", "Dowlath", "arsh@mail.com")
            .unwrap();

        assert_eq!(employee.id(), Some(id));
        assert_eq!(employee.first_name().as_str(), "Arsh");
        assert_eq!(employee.email().as_str(), "arsh@mail.com");
    }

    #[test]
    fn test_rejected_update_leaves_record_untouched() {
        let id = EmployeeId::new(3).unwrap();
        let mut employee = Employee::restore(id, "Dowlath", "Basha", "dowlath@mail.com").unwrap();
        let before = employee.clone();

        assert!(employee.update_details("Arsh", "Dowlath", " ").is_err());
        assert_eq!(employee, before);
    }
}
