//! Health Handler

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::HealthResponse;
use crate::infrastructure::http::state::AppState;

/// 健康检查，返回固定的服务描述
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    tracing::info!("Health check called");
    Json(HealthResponse {
        ok: true,
        service: state.service.name.clone(),
        version: state.service.version.clone(),
    })
}
