//! Public Menu API (carta digital)
//!
//! No authentication; only available dishes are listed.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/menu", get(handler::list))
}
