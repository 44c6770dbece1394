//! Order Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::OrderRepositoryPort;
use crate::application::queries::GetOrder;
use crate::domain::order::Order;

/// GetOrder Handler
pub struct GetOrderHandler {
    order_repo: Arc<dyn OrderRepositoryPort>,
}

impl GetOrderHandler {
    pub fn new(order_repo: Arc<dyn OrderRepositoryPort>) -> Self {
        Self { order_repo }
    }

    pub async fn handle(&self, query: GetOrder) -> Result<Order, ApplicationError> {
        tracing::info!(order_id = %query.order_id, "Fetching order");

        match self.order_repo.find_by_id(&query.order_id).await? {
            Some(order) => {
                tracing::info!(order = ?order, "Order found");
                Ok(order)
            }
            None => {
                tracing::warn!(order_id = %query.order_id, "Order not found");
                Err(ApplicationError::not_found("Order", query.order_id.as_str()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{OrderId, Quantity};
    use crate::infrastructure::memory::InMemoryOrderRepository;

    #[tokio::test]
    async fn test_get_existing_order() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let order = Order::new("a@b.com", "sku_1", Quantity::new(3).unwrap());
        repo.save(&order).await.unwrap();

        let handler = GetOrderHandler::new(repo);
        let found = handler
            .handle(GetOrder {
                order_id: order.id().clone(),
            })
            .await
            .unwrap();
        assert_eq!(found, order);
    }

    #[tokio::test]
    async fn test_get_unknown_order_is_not_found() {
        let handler = GetOrderHandler::new(Arc::new(InMemoryOrderRepository::new()));

        let random = OrderId::new().to_string();
        for id in ["does-not-exist", "", random.as_str()] {
            let err = handler
                .handle(GetOrder {
                    order_id: OrderId::from_string(id),
                })
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                ApplicationError::NotFound { resource_type: "Order", .. }
            ));
        }
    }
}
