//! Order HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use std::sync::Arc;

use crate::application::{CreateChannel, GetOrder};
use crate::domain::order::OrderId;
use crate::infrastructure::http::dto::{CreateOrderQuery, CreateOrderRequest, OrderResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// `POST /orders` - 创建订单
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<Json<OrderResponse>, ApiError> {
    let Json(request) = payload?;

    let order = state
        .create_order_handler
        .handle(request.into_command(CreateChannel::Post))
        .await?;

    Ok(Json(OrderResponse::from(order)))
}

/// `GET /orders/create` - 通过查询参数创建订单
///
/// 非 REST 规范的便捷入口，仅在 `features.enable_get_create` 开启时挂载，
/// 只用于手工测试/演示
pub async fn create_order_via_query(
    State(state): State<Arc<AppState>>,
    params: Result<Query<CreateOrderQuery>, QueryRejection>,
) -> Result<Json<OrderResponse>, ApiError> {
    let Query(params) = params?;

    let order = state
        .create_order_handler
        .handle(params.into_command(CreateChannel::Get))
        .await?;

    Ok(Json(OrderResponse::from(order)))
}

/// `GET /orders/{order_id}` - 获取订单
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    order_id: Result<Path<String>, PathRejection>,
) -> Result<Json<OrderResponse>, ApiError> {
    let Path(order_id) = order_id?;

    let order = state
        .get_order_handler
        .handle(GetOrder {
            order_id: OrderId::from_string(order_id),
        })
        .await?;

    Ok(Json(OrderResponse::from(order)))
}
