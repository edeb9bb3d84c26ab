//! Storage layer
//!
//! All collections live behind a single `parking_lot::RwLock`. Mutations
//! spanning several entities (order creation, table clear) take one write
//! guard, so readers never observe a half-applied change.

pub mod models;
pub mod repository;
pub mod seed;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use shared::models::{DiningTable, Dish, Order};

use models::StaffAccount;

/// In-memory collections
#[derive(Debug, Default)]
pub struct Collections {
    pub dishes: Vec<Dish>,
    pub tables: Vec<DiningTable>,
    pub orders: Vec<Order>,
    pub staff: Vec<StaffAccount>,
}

impl Collections {
    pub fn dish(&self, id: &str) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id == id)
    }

    pub fn table(&self, id: &str) -> Option<&DiningTable> {
        self.tables.iter().find(|t| t.id == id)
    }

    pub fn table_mut(&mut self, id: &str) -> Option<&mut DiningTable> {
        self.tables.iter_mut().find(|t| t.id == id)
    }

    pub fn order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn order_mut(&mut self, id: &str) -> Option<&mut Order> {
        self.orders.iter_mut().find(|o| o.id == id)
    }

    /// The active order seated at a table, if any
    pub fn active_order_for_table_mut(&mut self, table_id: &str) -> Option<&mut Order> {
        self.orders
            .iter_mut()
            .find(|o| o.is_active() && o.table_id == table_id)
    }

    /// Case-insensitive username lookup
    pub fn staff_by_username(&self, username: &str) -> Option<&StaffAccount> {
        self.staff
            .iter()
            .find(|s| s.username.eq_ignore_ascii_case(username))
    }
}

/// Process-local store
#[derive(Debug, Default)]
pub struct MemoryDb {
    inner: RwLock<Collections>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.inner.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.inner.write()
    }
}
