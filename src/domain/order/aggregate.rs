//! Order Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{OrderId, OrderStatus, Quantity};

/// Order 聚合根
///
/// 不变量:
/// - id 在进程生命周期内唯一且不可变
/// - status 创建时为 `created`，之后不再变化
/// - 创建后不提供任何修改或删除操作
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    status: OrderStatus,
    created_at: DateTime<Utc>,
    customer_email: String,
    product_id: String,
    quantity: Quantity,
}

impl Order {
    /// 创建新订单，分配新 ID 和当前 UTC 时间
    pub fn new(
        customer_email: impl Into<String>,
        product_id: impl Into<String>,
        quantity: Quantity,
    ) -> Self {
        Self {
            id: OrderId::new(),
            status: OrderStatus::Created,
            created_at: Utc::now(),
            customer_email: customer_email.into(),
            product_id: product_id.into(),
            quantity,
        }
    }

    // Getters
    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn customer_email(&self) -> &str {
        &self.customer_email
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }
}
