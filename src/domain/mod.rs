//! Domain Layer - 领域层
//!
//! 限界上下文:
//! - Order Context: 订单创建与查询

pub mod order;

pub use order::{Order, OrderError, OrderId, OrderStatus, Quantity};
