//! Employee HTTP Handlers
//!
//! 路径参数和 JSON 解析失败统一转换为 400

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{CreateEmployee, UpdateEmployee};
use crate::domain::EmployeeId;
use crate::infrastructure::http::dto::{
    EmployeeRequest, EmployeeResponse, EMPLOYEE_DELETED_MESSAGE,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

fn parse_body(payload: Result<Json<EmployeeRequest>, JsonRejection>) -> Result<EmployeeRequest, ApiError> {
    payload
        .map(|Json(req)| req)
        .map_err(|e| ApiError::BadRequest(format!("Invalid request body: {}", e.body_text())))
}

fn parse_id(path: Result<Path<i64>, PathRejection>) -> Result<EmployeeId, ApiError> {
    let Path(raw) =
        path.map_err(|e| ApiError::BadRequest(format!("Invalid employee id: {}", e.body_text())))?;
    EmployeeId::new(raw).map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// 创建员工
pub async fn create_employee(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EmployeeResponse>), ApiError> {
    let req = parse_body(payload)?;

    let command = CreateEmployee {
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
    };
    let created = state.employee_service.create(command).await?;

    Ok((StatusCode::CREATED, Json(EmployeeResponse::from(created))))
}

/// 获取员工列表
pub async fn list_employees(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    let employees = state.employee_service.list_all().await?;

    Ok(Json(
        employees.into_iter().map(EmployeeResponse::from).collect(),
    ))
}

/// 获取员工详情
pub async fn get_employee(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee_id = parse_id(path)?;

    state
        .employee_service
        .get_by_id(employee_id)
        .await?
        .map(|view| Json(EmployeeResponse::from(view)))
        .ok_or(ApiError::NotFound)
}

/// 更新员工
pub async fn update_employee(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee_id = parse_id(path)?;
    let req = parse_body(payload)?;

    let command = UpdateEmployee {
        employee_id,
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
    };

    state
        .employee_service
        .update(command)
        .await?
        .map(|view| Json(EmployeeResponse::from(view)))
        .ok_or(ApiError::NotFound)
}

/// 删除员工（不存在也返回成功）
pub async fn delete_employee(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let employee_id = parse_id(path)?;

    state.employee_service.delete(employee_id).await?;

    Ok((StatusCode::OK, EMPLOYEE_DELETED_MESSAGE))
}
