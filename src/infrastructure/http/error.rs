//! HTTP Error Handling

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::{ApplicationError, FieldError};

/// 统一错误响应格式：`{"detail": ...}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse<T: Serialize> {
    pub detail: T,
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 404，detail 为固定消息
    NotFound(String),
    /// 422，detail 为字段级错误列表
    Validation(Vec<FieldError>),
    /// 500
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Resource not found");
                (StatusCode::NOT_FOUND, Json(ErrorResponse { detail: msg })).into_response()
            }
            ApiError::Validation(errors) => {
                tracing::warn!(errors = ?errors, "Validation failed");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ErrorResponse { detail: errors }),
                )
                    .into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse { detail: msg }),
                )
                    .into_response()
            }
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { resource_type, .. } => {
                ApiError::NotFound(format!("{} not found", resource_type))
            }
            ApplicationError::ValidationError(errors) => ApiError::Validation(errors),
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
        }
    }
}

// 所有请求解析失败均作为 422 校验错误返回

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match &rejection {
            JsonRejection::JsonSyntaxError(_) => "json_invalid",
            JsonRejection::MissingJsonContentType(_) => "content_type",
            _ => "value_error",
        };
        ApiError::Validation(vec![FieldError::new(["body"], rejection.body_text(), kind)])
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(vec![FieldError::new(
            ["query"],
            rejection.body_text(),
            "value_error",
        )])
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(vec![FieldError::new(
            ["path"],
            rejection.body_text(),
            "value_error",
        )])
    }
}
