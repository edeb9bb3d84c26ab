//! Shared types for Abocado
//!
//! Domain models, the order-item state machine, pricing, pure view
//! derivation and the unified error system. Used by both `abocado-server`
//! and `abocado-client`.

pub mod client;
pub mod error;
pub mod models;
pub mod order;
pub mod views;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{DiningTable, Dish, DishCategory, Order, OrderItem, OrderStatus, Role, TableStatus};
pub use order::{ItemStatus, TimestampPolicy};
