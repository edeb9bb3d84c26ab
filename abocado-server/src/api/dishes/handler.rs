//! Dish API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use shared::models::{Dish, DishCreate, DishQuery, DishUpdate};

use crate::core::ServerState;
use crate::db::repository::DishRepository;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_URL_LEN, validate_optional_text, validate_positive,
    validate_price, validate_required_text, validate_text_len,
};

/// GET /api/dishes - all dishes, optionally filtered by category
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<DishQuery>,
) -> Json<Vec<Dish>> {
    let repo = DishRepository::new(state.db.clone());
    Json(repo.find_all(&query))
}

/// GET /api/dishes/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Dish>> {
    let repo = DishRepository::new(state.db.clone());
    Ok(Json(repo.find_by_id(&id)?))
}

/// POST /api/dishes
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DishCreate>,
) -> AppResult<Json<Dish>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_text_len(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_text_len(&payload.image, "image", MAX_URL_LEN)?;
    validate_price(payload.price)?;
    validate_positive(payload.prep_time, "prepTime")?;

    let repo = DishRepository::new(state.db.clone());
    let dish = repo.create(payload)?;
    tracing::info!(dish_id = %dish.id, name = %dish.name, "Dish created");
    Ok(Json(dish))
}

/// PATCH /api/dishes/:id - partial update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DishUpdate>,
) -> AppResult<Json<Dish>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.image, "image", MAX_URL_LEN)?;
    if let Some(price) = payload.price {
        validate_price(price)?;
    }
    if let Some(prep_time) = payload.prep_time {
        validate_positive(prep_time, "prepTime")?;
    }

    let repo = DishRepository::new(state.db.clone());
    let dish = repo.update(&id, payload)?;
    tracing::info!(dish_id = %dish.id, "Dish updated");
    Ok(Json(dish))
}

/// DELETE /api/dishes/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let repo = DishRepository::new(state.db.clone());
    repo.delete(&id)?;
    tracing::info!(dish_id = %id, "Dish deleted");
    Ok(StatusCode::NO_CONTENT)
}
