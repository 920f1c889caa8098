//! Data Transfer Objects
//!
//! JSON 字段统一使用 camelCase

use serde::{Deserialize, Serialize};

use crate::application::EmployeeView;

// ============================================================================
// Employee DTOs
// ============================================================================

/// 创建 / 更新员工请求体
///
/// 缺失字段按空串处理，由领域校验给出具体字段错误；
/// 请求体中的 `id` 被忽略
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

/// 员工响应体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<EmployeeView> for EmployeeResponse {
    fn from(view: EmployeeView) -> Self {
        Self {
            id: view.id.value(),
            first_name: view.first_name,
            last_name: view.last_name,
            email: view.email,
        }
    }
}

/// 删除成功的确认文本
pub const EMPLOYEE_DELETED_MESSAGE: &str = "Employee deleted successfully";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_camel_case_and_ignores_id() {
        let req: EmployeeRequest = serde_json::from_str(
            r#"{"id": 5, "firstName": "Dowlath", "lastName": "Basha", "email": "dowlath@mail.com"}"#,
        )
        .unwrap();

        assert_eq!(req.first_name, "Dowlath");
        assert_eq!(req.last_name, "Basha");
        assert_eq!(req.email, "dowlath@mail.com");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let req: EmployeeRequest = serde_json::from_str(r#"{"firstName": "Dowlath"}"#).unwrap();
        assert!(req.last_name.is_empty());
        assert!(req.email.is_empty());
    }

    #[test]
    fn test_response_shape() {
        let response = EmployeeResponse {
            id: 1,
            first_name: "Dowlath".to_string(),
            last_name: "Basha".to_string(),
            email: "dowlath@mail.com".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "firstName": "Dowlath",
                "lastName": "Basha",
                "email": "dowlath@mail.com"
            })
        );
    }
}
