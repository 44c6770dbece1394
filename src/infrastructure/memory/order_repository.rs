//! In-Memory Order Repository Implementation

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

use crate::application::ports::{OrderRepositoryPort, RepositoryError};
use crate::domain::order::{Order, OrderId};

/// 内存订单仓储
///
/// 数据仅在进程生命周期内有效，没有容量上限和淘汰策略
pub struct InMemoryOrderRepository {
    orders: DashMap<OrderId, Order>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self {
            orders: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepositoryPort for InMemoryOrderRepository {
    async fn save(&self, order: &Order) -> Result<(), RepositoryError> {
        match self.orders.entry(order.id().clone()) {
            Entry::Occupied(_) => Err(RepositoryError::Duplicate(order.id().to_string())),
            Entry::Vacant(slot) => {
                slot.insert(order.clone());
                tracing::debug!(order_id = %order.id(), "Order stored");
                Ok(())
            }
        }
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, RepositoryError> {
        Ok(self.orders.get(id).map(|entry| entry.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::Quantity;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_put_then_get() {
        let repo = InMemoryOrderRepository::new();
        let order = Order::new("a@b.com", "sku_1", Quantity::new(2).unwrap());

        repo.save(&order).await.unwrap();
        assert_eq!(repo.len(), 1);

        let found = repo.find_by_id(order.id()).await.unwrap();
        assert_eq!(found, Some(order));
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let repo = InMemoryOrderRepository::new();
        let found = repo
            .find_by_id(&OrderId::from_string("does-not-exist"))
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_id_is_rejected() {
        let repo = InMemoryOrderRepository::new();
        let order = Order::new("a@b.com", "sku_1", Quantity::default());

        repo.save(&order).await.unwrap();
        let result = repo.save(&order).await;
        assert!(matches!(result, Err(RepositoryError::Duplicate(_))));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_saves() {
        let repo = InMemoryOrderRepository::new().arc();

        let tasks: Vec<_> = (0..64)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    let order = Order::new(format!("user{}@example.com", i), "sku_1", Quantity::default());
                    repo.save(&order).await.unwrap();
                    order.id().clone()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for task in tasks {
            ids.insert(task.await.unwrap());
        }

        assert_eq!(ids.len(), 64);
        assert_eq!(repo.len(), 64);
        for id in &ids {
            assert!(repo.find_by_id(id).await.unwrap().is_some());
        }
    }
}
