//! View derivation
//!
//! Pure functions from a snapshot of dishes, tables and orders to the
//! per-station boards. Only active orders feed the kitchen, ready and
//! service views. All derivations are deterministic in their inputs and
//! preserve the order in which orders and items were fetched.

pub mod dashboard;
pub mod delivery;
pub mod kitchen;
pub mod menu;
pub mod service;

use std::collections::HashMap;

use crate::models::{DiningTable, Dish};

pub use dashboard::{DashboardStats, dashboard_stats};
pub use delivery::{ReadyGroup, ReadyItem, ReadyView, ready_view};
pub use kitchen::{KitchenBoard, KitchenStats, KitchenTicket, kitchen_board};
pub use menu::{MenuSection, public_menu};
pub use service::{ServiceLine, TableCard, TableDetail, service_cards, table_detail};

/// Id-indexed borrow of the catalog and floor plan
pub(crate) struct Lookup<'a> {
    dishes: HashMap<&'a str, &'a Dish>,
    tables: HashMap<&'a str, &'a DiningTable>,
}

impl<'a> Lookup<'a> {
    pub(crate) fn new(dishes: &'a [Dish], tables: &'a [DiningTable]) -> Self {
        Self {
            dishes: dishes.iter().map(|d| (d.id.as_str(), d)).collect(),
            tables: tables.iter().map(|t| (t.id.as_str(), t)).collect(),
        }
    }

    pub(crate) fn dish(&self, id: &str) -> Option<&'a Dish> {
        self.dishes.get(id).copied()
    }

    pub(crate) fn table(&self, id: &str) -> Option<&'a DiningTable> {
        self.tables.get(id).copied()
    }
}
