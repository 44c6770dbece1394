//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use serde::Serialize;
use thiserror::Error;

/// 字段级校验错误
///
/// `loc` 形如 `["body", "product_id"]` 或 `["query", "quantity"]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(
        loc: impl IntoIterator<Item = impl Into<String>>,
        msg: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            loc: loc.into_iter().map(Into::into).collect(),
            msg: msg.into(),
            kind: kind.into(),
        }
    }

    /// 必填字段缺失
    pub fn missing(location: &str, field: &str) -> Self {
        Self::new([location, field], "Field required", "missing")
    }

    /// 期望整数（包括显式 null）
    pub fn int_type(location: &str, field: &str) -> Self {
        Self::new([location, field], "Input should be a valid integer", "int_type")
    }

    /// 期望字符串（包括显式 null）
    pub fn string_type(location: &str, field: &str) -> Self {
        Self::new([location, field], "Input should be a valid string", "string_type")
    }

    /// 数量低于下限
    pub fn below_minimum(location: &str, field: &str, minimum: i64) -> Self {
        Self::new(
            [location, field],
            format!("Input should be greater than or equal to {}", minimum),
            "greater_than_equal",
        )
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.loc.join("."), self.msg)
    }
}

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 验证错误
    #[error("Validation error: {}", join_field_errors(.0))]
    ValidationError(Vec<FieldError>),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }

    /// 创建验证错误
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::ValidationError(errors)
    }
}

impl From<crate::application::ports::RepositoryError> for ApplicationError {
    fn from(err: crate::application::ports::RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_serializes_type_key() {
        let err = FieldError::missing("body", "product_id");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "missing");
        assert_eq!(json["loc"], serde_json::json!(["body", "product_id"]));
        assert_eq!(json["msg"], "Field required");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ApplicationError::validation(vec![
            FieldError::missing("body", "customer_email"),
            FieldError::below_minimum("body", "quantity", 1),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation error: body.customer_email: Field required; \
             body.quantity: Input should be greater than or equal to 1"
        );
    }

    #[test]
    fn test_invalid_type_kinds() {
        let int = FieldError::int_type("body", "quantity");
        assert_eq!(int.kind, "int_type");
        assert_eq!(int.msg, "Input should be a valid integer");

        let string = FieldError::string_type("query", "product_id");
        assert_eq!(string.kind, "string_type");
        assert_eq!(string.loc, vec!["query", "product_id"]);
    }
}
