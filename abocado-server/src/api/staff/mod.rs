//! Staff API (admin only)

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get},
};

use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/staff", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", delete(handler::delete))
        .layer(middleware::from_fn(require_permission("staff:manage")))
}
