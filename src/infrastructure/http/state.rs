//! Application State
//!
//! 持有订单存储与 Command/Query Handlers，通过 axum State 注入到各 handler

use std::sync::Arc;

use crate::application::{CreateOrderHandler, GetOrderHandler, OrderRepositoryPort};
use crate::config::ServiceConfig;

/// 应用状态
pub struct AppState {
    // ========== Service ==========
    pub service: ServiceConfig,

    // ========== Command Handlers ==========
    pub create_order_handler: CreateOrderHandler,

    // ========== Query Handlers ==========
    pub get_order_handler: GetOrderHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(order_repo: Arc<dyn OrderRepositoryPort>, service: ServiceConfig) -> Self {
        Self {
            service,
            create_order_handler: CreateOrderHandler::new(order_repo.clone()),
            get_order_handler: GetOrderHandler::new(order_repo),
        }
    }
}
