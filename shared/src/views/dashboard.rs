//! Dashboard aggregate

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DiningTable, Order, OrderStatus, TableStatus};
use crate::order::ItemStatus;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_tables: usize,
    pub occupied_tables: usize,
    pub available_tables: usize,
    pub reserved_tables: usize,
    /// Integer percent of occupied tables
    pub occupancy_rate: u32,
    pub active_orders: usize,
    pub pending_items: usize,
    pub preparing_items: usize,
    pub ready_items: usize,
    /// Sum of completed order totals
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
}

/// `occupied / total` as a whole percent, half away from zero
fn occupancy_rate(occupied: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // Integer form of round(occupied * 100 / total)
    ((occupied * 200 + total) / (total * 2)) as u32
}

pub fn dashboard_stats(tables: &[DiningTable], orders: &[Order]) -> DashboardStats {
    let count = |status: TableStatus| tables.iter().filter(|t| t.status == status).count();
    let occupied = count(TableStatus::Occupied);

    let active: Vec<&Order> = orders.iter().filter(|o| o.is_active()).collect();
    let items = |status: ItemStatus| -> usize {
        active.iter().map(|o| o.count_items(status)).sum()
    };

    DashboardStats {
        total_tables: tables.len(),
        occupied_tables: occupied,
        available_tables: count(TableStatus::Available),
        reserved_tables: count(TableStatus::Reserved),
        occupancy_rate: occupancy_rate(occupied, tables.len()),
        active_orders: active.len(),
        pending_items: items(ItemStatus::Pending),
        preparing_items: items(ItemStatus::Preparing),
        ready_items: items(ItemStatus::Ready),
        revenue: orders
            .iter()
            .filter(|o| o.status == OrderStatus::Completed)
            .fold(Decimal::ZERO, |acc, o| acc.saturating_add(o.total)),
    }
}
