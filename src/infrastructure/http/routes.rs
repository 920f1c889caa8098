//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping              GET     健康检查
//! - /api/employees         POST    创建员工
//! - /api/employees         GET     列出所有员工
//! - /api/employees/{id}    GET     获取员工详情
//! - /api/employees/{id}    PUT     更新员工
//! - /api/employees/{id}    DELETE  删除员工

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/employees", employee_routes())
}

/// Employee 路由
fn employee_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(handlers::list_employees).post(handlers::create_employee),
        )
        .route(
            "/:id",
            get(handlers::get_employee)
                .put(handlers::update_employee)
                .delete(handlers::delete_employee),
        )
}
