//! 健康检查路由
//!
//! | 路径 | 方法 | 认证 |
//! |------|--------|------|
//! | /health | GET | 无 |

use axum::{Json, Router, routing::get};
use shared::client::HealthResponse;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
