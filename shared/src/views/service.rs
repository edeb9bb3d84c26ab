//! Service view: the floor plan joined with each table's active order

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Lookup;
use crate::models::{DiningTable, Dish, Order, OrderItem};
use crate::order::{ItemStatus, line_subtotal};

/// Summary card for one table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCard {
    pub table: DiningTable,
    pub order: Option<Order>,
    pub party_size: Option<u32>,
    /// Number of order lines
    pub item_count: usize,
    pub ready_count: usize,
    pub preparing_count: usize,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub total: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceLine {
    pub item: OrderItem,
    pub dish: Dish,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
}

/// Line-level detail for a selected table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDetail {
    pub table: DiningTable,
    pub order: Order,
    pub lines: Vec<ServiceLine>,
}

fn active_order<'a>(table: &DiningTable, orders: &'a [Order]) -> Option<&'a Order> {
    orders
        .iter()
        .find(|o| o.is_active() && o.table_id == table.id)
}

pub fn service_cards(tables: &[DiningTable], orders: &[Order]) -> Vec<TableCard> {
    tables
        .iter()
        .map(|table| {
            let order = active_order(table, orders);
            TableCard {
                table: table.clone(),
                party_size: table.party_size,
                item_count: order.map_or(0, |o| o.items.len()),
                ready_count: order.map_or(0, |o| o.count_items(ItemStatus::Ready)),
                preparing_count: order.map_or(0, |o| o.count_items(ItemStatus::Preparing)),
                total: order.map(|o| o.total),
                order: order.cloned(),
            }
        })
        .collect()
}

/// Detail of a table's active order; `None` if the table is unknown or free
///
/// Delivered items stay listed; items whose dish is unknown are skipped.
pub fn table_detail(
    table_id: &str,
    dishes: &[Dish],
    tables: &[DiningTable],
    orders: &[Order],
) -> Option<TableDetail> {
    let lookup = Lookup::new(dishes, tables);
    let table = lookup.table(table_id)?;
    let order = active_order(table, orders)?;

    let lines = order
        .items
        .iter()
        .filter_map(|item| {
            lookup.dish(&item.dish_id).map(|dish| ServiceLine {
                item: item.clone(),
                dish: dish.clone(),
                subtotal: line_subtotal(dish.price, item.quantity).unwrap_or(Decimal::MAX),
            })
        })
        .collect();

    Some(TableDetail {
        table: table.clone(),
        order: order.clone(),
        lines,
    })
}
