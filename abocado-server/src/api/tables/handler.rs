//! 桌台 API 处理器

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::{DiningTable, DiningTableCreate, DiningTableUpdate};

use crate::core::ServerState;
use crate::db::repository::DiningTableRepository;
use crate::utils::AppResult;
use crate::utils::validation::validate_positive;

/// GET /api/tables - 按桌号排序的全部桌台
pub async fn list(State(state): State<ServerState>) -> Json<Vec<DiningTable>> {
    let repo = DiningTableRepository::new(state.db.clone());
    Json(repo.find_all())
}

/// GET /api/tables/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DiningTable>> {
    let repo = DiningTableRepository::new(state.db.clone());
    Ok(Json(repo.find_by_id(&id)?))
}

/// POST /api/tables
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DiningTableCreate>,
) -> AppResult<Json<DiningTable>> {
    validate_positive(payload.number, "number")?;
    validate_positive(payload.capacity, "capacity")?;

    let repo = DiningTableRepository::new(state.db.clone());
    let table = repo.create(payload)?;
    tracing::info!(table_id = %table.id, number = table.number, "Table created");
    Ok(Json(table))
}

/// PATCH /api/tables/:id - 桌号、容量或预订状态
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DiningTableUpdate>,
) -> AppResult<Json<DiningTable>> {
    if let Some(number) = payload.number {
        validate_positive(number, "number")?;
    }
    if let Some(capacity) = payload.capacity {
        validate_positive(capacity, "capacity")?;
    }

    let repo = DiningTableRepository::new(state.db.clone());
    let table = repo.update(&id, payload)?;
    tracing::info!(table_id = %table.id, status = ?table.status, "Table updated");
    Ok(Json(table))
}

/// DELETE /api/tables/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let repo = DiningTableRepository::new(state.db.clone());
    repo.delete(&id)?;
    tracing::info!(table_id = %id, "Table deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/tables/:id/clear - 清台并关闭其订单
pub async fn clear(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DiningTable>> {
    let table = state.orders.clear_table(&id)?;
    Ok(Json(table))
}
