//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::{CreateChannel, CreateOrder, InputField};
use crate::domain::order::Order;

// ============================================================================
// Health DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: String,
    pub version: String,
}

// ============================================================================
// Order DTOs
// ============================================================================

/// `POST /orders` 请求体
///
/// 反序列化层面只区分缺失/null/有值，具体校验由 CreateOrderHandler 逐字段报告
#[derive(Debug, Default, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub customer_email: InputField<String>,
    #[serde(default)]
    pub product_id: InputField<String>,
    #[serde(default)]
    pub quantity: InputField<i64>,
}

impl CreateOrderRequest {
    pub fn into_command(self, channel: CreateChannel) -> CreateOrder {
        CreateOrder {
            customer_email: self.customer_email,
            product_id: self.product_id,
            quantity: self.quantity,
            channel,
        }
    }
}

/// `GET /orders/create` 查询参数，字段与请求体一致
pub type CreateOrderQuery = CreateOrderRequest;

/// 订单记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: String,
    pub status: String,
    pub created_at: String,
    pub customer_email: String,
    pub product_id: String,
    pub quantity: i64,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id().to_string(),
            status: order.status().as_str().to_string(),
            created_at: order
                .created_at()
                .to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
            customer_email: order.customer_email().to_string(),
            product_id: order.product_id().to_string(),
            quantity: order.quantity().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::Quantity;

    #[test]
    fn test_order_response_shape() {
        let order = Order::new("a@b.com", "sku_1", Quantity::new(2).unwrap());
        let response = OrderResponse::from(order.clone());

        assert_eq!(response.id, order.id().as_str());
        assert_eq!(response.status, "created");
        assert_eq!(response.quantity, 2);
        assert!(response.created_at.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&response.created_at).is_ok());

        let json = serde_json::to_value(&response).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            ["created_at", "customer_email", "id", "product_id", "quantity", "status"]
        );
    }

    #[test]
    fn test_request_distinguishes_missing_and_null() {
        let request: CreateOrderRequest =
            serde_json::from_str(r#"{"customer_email":"a@b.com","quantity":null}"#).unwrap();
        assert_eq!(
            request.customer_email,
            InputField::Present("a@b.com".to_string())
        );
        assert_eq!(request.product_id, InputField::Missing);
        assert_eq!(request.quantity, InputField::Null);
    }
}
