//! Order API Handlers
//!
//! Mutations go through [`crate::orders::OrdersManager`]; reads use the
//! repository directly.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use shared::models::{
    CreateOrderRequest, Order, OrderQuery, UpdateOrderItemRequest, UpdateOrderRequest,
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::OrderRepository;
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text};
use crate::utils::{AppError, AppResult};

/// GET /api/orders - filter by `status` and `tableId`
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<OrderQuery>,
) -> Json<Vec<Order>> {
    let repo = OrderRepository::new(state.db.clone());
    Json(repo.find_all(&query))
}

/// GET /api/orders/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.db.clone());
    Ok(Json(repo.find_by_id(&id)?))
}

/// POST /api/orders - seat a party and open its order
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<Json<Order>> {
    for item in &payload.items {
        validate_optional_text(&item.notes, "notes", MAX_NOTE_LEN)?;
    }

    let order = state.orders.create_order(payload)?;
    tracing::debug!(order_id = %order.id, by = %user.username, "Order submitted");
    Ok(Json(order))
}

/// PATCH /api/orders/:id - close the order
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateOrderRequest>,
) -> AppResult<Json<Order>> {
    let status = payload
        .status
        .ok_or_else(|| AppError::validation("status is required").with_detail("field", "status"))?;
    Ok(Json(state.orders.update_order_status(&id, status)?))
}

/// PATCH /api/orders/:id/items/:item_id - move an item along the pipeline
pub async fn update_item(
    State(state): State<ServerState>,
    Path((id, item_id)): Path<(String, String)>,
    Json(payload): Json<UpdateOrderItemRequest>,
) -> AppResult<Json<Order>> {
    let status = payload
        .status
        .ok_or_else(|| AppError::validation("status is required").with_detail("field", "status"))?;
    Ok(Json(state.orders.update_item_status(&id, &item_id, status)?))
}

/// DELETE /api/orders/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.orders.delete_order(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
