//! HTTP Routes
//!
//! API Endpoints:
//! - /                   GET   健康检查
//! - /orders             POST  创建订单
//! - /orders/{order_id}  GET   获取订单
//! - /orders/create      GET   通过查询参数创建订单（需开启 features.enable_get_create）

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes(enable_get_create: bool) -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::health))
        .merge(order_routes(enable_get_create))
}

/// Order 路由
///
/// 静态路径 `/orders/create` 优先于 `/orders/:order_id` 匹配；
/// 未开启时该路径落到 get_order，返回 404
fn order_routes(enable_get_create: bool) -> Router<Arc<AppState>> {
    let router = Router::new()
        .route("/orders", post(handlers::create_order))
        .route("/orders/:order_id", get(handlers::get_order));

    if enable_get_create {
        tracing::warn!("GET /orders/create is enabled (non-RESTful, for manual testing only)");
        router.route("/orders/create", get(handlers::create_order_via_query))
    } else {
        tracing::info!("GET /orders/create is disabled");
        router
    }
}
