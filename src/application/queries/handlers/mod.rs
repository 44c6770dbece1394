//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod order_handlers;

pub use order_handlers::*;
