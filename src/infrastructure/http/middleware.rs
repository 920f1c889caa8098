//! HTTP Middleware
//!
//! HTTP 状态码错误日志中间件

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// HTTP 状态码错误日志中间件
///
/// 4xx 记 warn，5xx 记 error，附带耗时。
/// 业务错误的详细信息在 ApiError::into_response() 中记录
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP client error"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::{delete, get},
        Router,
    };
    use tower::util::ServiceExt;

    async fn deleted() -> &'static str {
        "Employee deleted successfully"
    }

    async fn missing() -> StatusCode {
        StatusCode::NOT_FOUND
    }

    async fn store_down() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn create_test_router() -> Router {
        Router::new()
            .route("/employees/1", delete(deleted))
            .route("/employees/404", get(missing))
            .route("/employees/500", get(store_down))
            .layer(axum::middleware::from_fn(error_logging_middleware))
    }

    async fn status_of(method: &str, uri: &str) -> StatusCode {
        let request = HttpRequest::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        create_test_router().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_passes_success_through() {
        assert_eq!(status_of("DELETE", "/employees/1").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_passes_client_error_through() {
        assert_eq!(status_of("GET", "/employees/404").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_passes_server_error_through() {
        assert_eq!(
            status_of("GET", "/employees/500").await,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_unrouted_method_is_client_error() {
        assert_eq!(
            status_of("POST", "/employees/1").await,
            StatusCode::METHOD_NOT_ALLOWED
        );
    }
}
