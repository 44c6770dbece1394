//! Repository Ports - 出站端口
//!
//! 定义订单存储的抽象接口
//! 具体实现在 infrastructure 层（当前为进程内内存存储）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::order::{Order, OrderId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Duplicate entity: {0}")]
    Duplicate(String),
}

/// Order Repository Port
///
/// 实现必须保证并发 save/find_by_id 的线程安全
#[async_trait]
pub trait OrderRepositoryPort: Send + Sync {
    /// 保存新订单（以订单 ID 为键）
    async fn save(&self, order: &Order) -> Result<(), RepositoryError>;

    /// 根据 ID 查找订单，不存在时返回 `Ok(None)`
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, RepositoryError>;
}
