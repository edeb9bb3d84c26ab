//! Order Repository (reads)
//!
//! Order mutations go through [`crate::orders::OrdersManager`], which keeps
//! tables and orders consistent under one write guard.

use std::sync::Arc;

use shared::models::{Order, OrderQuery};
use shared::{AppError, AppResult, ErrorCode};

use crate::db::MemoryDb;

#[derive(Clone)]
pub struct OrderRepository {
    db: Arc<MemoryDb>,
}

pub(crate) fn order_not_found(id: &str) -> AppError {
    AppError::with_message(ErrorCode::OrderNotFound, format!("Order {id} not found"))
}

impl OrderRepository {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }

    /// Orders in creation order, filtered by status and table
    pub fn find_all(&self, query: &OrderQuery) -> Vec<Order> {
        self.db
            .read()
            .orders
            .iter()
            .filter(|o| query.matches(o))
            .cloned()
            .collect()
    }

    pub fn find_by_id(&self, id: &str) -> AppResult<Order> {
        self.db
            .read()
            .order(id)
            .cloned()
            .ok_or_else(|| order_not_found(id))
    }
}
