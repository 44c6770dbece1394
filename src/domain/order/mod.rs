//! Order Context - 订单限界上下文
//!
//! 职责:
//! - 订单创建（分配 ID 与时间戳）
//! - 数量约束校验

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::Order;
pub use errors::OrderError;
pub use value_objects::{OrderId, OrderStatus, Quantity};
