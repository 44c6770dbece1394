//! HTTP Middleware
//!
//! 请求/响应日志中间件

use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};

/// 请求/响应日志中间件
///
/// 进入时记录 method 与 uri；返回时附带状态码，
/// 4xx 记为 warn，5xx 记为 error，其余为 info
/// 注意：业务错误详情在 ApiError::into_response() 中记录
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    tracing::info!(method = %method, uri = %uri, "➡️ request");

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "⬅️ HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "⬅️ HTTP client error"
        );
    } else {
        tracing::info!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "⬅️ response"
        );
    }

    response
}
