use axum::{
    Json,
    extract::{Query, State},
};
use shared::models::DishQuery;
use shared::views::{MenuSection, public_menu};

use crate::core::ServerState;
use crate::db::repository::DishRepository;

/// GET /api/menu - available dishes grouped by category
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<DishQuery>,
) -> Json<Vec<MenuSection>> {
    let dishes = DishRepository::new(state.db.clone()).find_all(&DishQuery::default());
    Json(public_menu(&dishes, query.category))
}
