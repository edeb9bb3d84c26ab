//! Dining Table API

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/tables", routes())
}

fn routes() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
        .layer(middleware::from_fn(require_permission("tables:read")));

    let manage_routes = Router::new()
        .route("/", post(handler::create))
        .route(
            "/{id}",
            axum::routing::patch(handler::update).delete(handler::delete),
        )
        .layer(middleware::from_fn(require_permission("tables:manage")));

    let service_routes = Router::new()
        .route("/{id}/clear", post(handler::clear))
        .layer(middleware::from_fn(require_permission("tables:clear")));

    read_routes.merge(manage_routes).merge(service_routes)
}
