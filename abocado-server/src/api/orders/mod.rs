//! Order API
//!
//! | Path | Method | Permission |
//! |------|--------|------------|
//! | /api/orders | GET | orders:read |
//! | /api/orders/{id} | GET | orders:read |
//! | /api/orders | POST | orders:create |
//! | /api/orders/{id} | PATCH | orders:manage |
//! | /api/orders/{id} | DELETE | orders:delete |
//! | /api/orders/{id}/items/{item_id} | PATCH | orders:items |

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};

use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
        .layer(middleware::from_fn(require_permission("orders:read")));

    let create_routes = Router::new()
        .route("/", post(handler::create))
        .layer(middleware::from_fn(require_permission("orders:create")));

    let manage_routes = Router::new()
        .route("/{id}", patch(handler::update))
        .layer(middleware::from_fn(require_permission("orders:manage")));

    let delete_routes = Router::new()
        .route("/{id}", delete(handler::delete))
        .layer(middleware::from_fn(require_permission("orders:delete")));

    let item_routes = Router::new()
        .route("/{id}/items/{item_id}", patch(handler::update_item))
        .layer(middleware::from_fn(require_permission("orders:items")));

    read_routes
        .merge(create_routes)
        .merge(manage_routes)
        .merge(delete_routes)
        .merge(item_routes)
}
