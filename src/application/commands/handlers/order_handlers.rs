//! Order Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateOrder, InputField};
use crate::application::error::{ApplicationError, FieldError};
use crate::application::ports::OrderRepositoryPort;
use crate::domain::order::{Order, OrderError, Quantity};

// ============================================================================
// CreateOrder
// ============================================================================

/// CreateOrder Handler - 校验输入，分配 ID 与时间戳，写入存储
pub struct CreateOrderHandler {
    order_repo: Arc<dyn OrderRepositoryPort>,
}

impl CreateOrderHandler {
    pub fn new(order_repo: Arc<dyn OrderRepositoryPort>) -> Self {
        Self { order_repo }
    }

    pub async fn handle(&self, command: CreateOrder) -> Result<Order, ApplicationError> {
        let location = command.channel.input_location();
        let mut errors = Vec::new();

        let customer_email =
            required_string(command.customer_email, location, "customer_email", &mut errors);
        let product_id = required_string(command.product_id, location, "product_id", &mut errors);
        let quantity = match command.quantity {
            InputField::Missing => Some(Quantity::default()),
            InputField::Null => {
                errors.push(FieldError::int_type(location, "quantity"));
                None
            }
            InputField::Present(raw) => match Quantity::new(raw) {
                Ok(quantity) => Some(quantity),
                Err(OrderError::InvalidQuantity(_)) => {
                    errors.push(FieldError::below_minimum(location, "quantity", Quantity::MIN));
                    None
                }
            },
        };

        let (Some(customer_email), Some(product_id), Some(quantity), true) = (
            customer_email,
            product_id,
            quantity,
            errors.is_empty(),
        ) else {
            tracing::warn!(
                channel = command.channel.as_str(),
                errors = errors.len(),
                "Order rejected by validation"
            );
            return Err(ApplicationError::validation(errors));
        };

        let order = Order::new(customer_email, product_id, quantity);
        self.order_repo.save(&order).await?;

        tracing::info!(
            channel = command.channel.as_str(),
            order = ?order,
            "Order created"
        );

        Ok(order)
    }
}

/// 必填字符串字段：缺失报 missing，显式 null 报 string_type
fn required_string(
    field: InputField<String>,
    location: &str,
    name: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match field {
        InputField::Present(value) => Some(value),
        InputField::Missing => {
            errors.push(FieldError::missing(location, name));
            None
        }
        InputField::Null => {
            errors.push(FieldError::string_type(location, name));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::CreateChannel;
    use crate::domain::order::OrderStatus;
    use crate::infrastructure::memory::InMemoryOrderRepository;

    fn command(quantity: InputField<i64>) -> CreateOrder {
        CreateOrder {
            customer_email: InputField::present("a@b.com".to_string()),
            product_id: InputField::present("sku_1".to_string()),
            quantity,
            channel: CreateChannel::Post,
        }
    }

    #[tokio::test]
    async fn test_create_order_stores_record() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let handler = CreateOrderHandler::new(repo.clone());

        let order = handler.handle(command(InputField::Present(2))).await.unwrap();
        assert_eq!(order.status(), OrderStatus::Created);
        assert_eq!(order.quantity().value(), 2);

        let stored = repo.find_by_id(order.id()).await.unwrap();
        assert_eq!(stored, Some(order));
    }

    #[tokio::test]
    async fn test_quantity_defaults_to_one() {
        let handler = CreateOrderHandler::new(Arc::new(InMemoryOrderRepository::new()));
        let order = handler.handle(command(InputField::Missing)).await.unwrap();
        assert_eq!(order.quantity().value(), 1);
    }

    #[tokio::test]
    async fn test_non_positive_quantity_is_rejected_before_storing() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let handler = CreateOrderHandler::new(repo.clone());

        for raw in [0, -1, -100] {
            let err = handler.handle(command(InputField::Present(raw))).await.unwrap_err();
            match err {
                ApplicationError::ValidationError(errors) => {
                    assert_eq!(errors, vec![FieldError::below_minimum("body", "quantity", 1)]);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_missing_fields_are_all_reported() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let handler = CreateOrderHandler::new(repo.clone());

        let err = handler
            .handle(CreateOrder {
                customer_email: InputField::Missing,
                product_id: InputField::Missing,
                quantity: InputField::Present(0),
                channel: CreateChannel::Get,
            })
            .await
            .unwrap_err();

        let ApplicationError::ValidationError(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(
            errors,
            vec![
                FieldError::missing("query", "customer_email"),
                FieldError::missing("query", "product_id"),
                FieldError::below_minimum("query", "quantity", 1),
            ]
        );
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_null_fields_are_type_errors() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let handler = CreateOrderHandler::new(repo.clone());

        let err = handler
            .handle(CreateOrder {
                customer_email: InputField::Null,
                product_id: InputField::present("sku_1".to_string()),
                quantity: InputField::Null,
                channel: CreateChannel::Post,
            })
            .await
            .unwrap_err();

        let ApplicationError::ValidationError(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(
            errors,
            vec![
                FieldError::string_type("body", "customer_email"),
                FieldError::int_type("body", "quantity"),
            ]
        );
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_large_quantity_is_kept_exactly() {
        let handler = CreateOrderHandler::new(Arc::new(InMemoryOrderRepository::new()));

        for raw in [5_000_000_000, i64::MAX] {
            let order = handler.handle(command(InputField::Present(raw))).await.unwrap();
            assert_eq!(order.quantity().value(), raw);
        }
    }
}
