//! Ready / delivery view
//!
//! What the floor staff should carry out, grouped by table: everything the
//! kitchen marked ready, plus drinks and desserts still pending since those
//! are served by the front of house directly.

use serde::{Deserialize, Serialize};

use super::Lookup;
use crate::models::{DiningTable, Dish, Order, OrderItem};
use crate::order::ItemStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadyItem {
    pub order_id: String,
    pub item: OrderItem,
    pub dish: Dish,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadyGroup {
    pub table: DiningTable,
    pub items: Vec<ReadyItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadyView {
    pub groups: Vec<ReadyGroup>,
}

impl ReadyView {
    pub fn total_items(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group(&self, table_id: &str) -> Option<&ReadyGroup> {
        self.groups.iter().find(|g| g.table.id == table_id)
    }
}

fn awaits_delivery(item: &OrderItem, dish: &Dish) -> bool {
    match item.status {
        ItemStatus::Ready => true,
        ItemStatus::Pending => !dish.category.is_kitchen(),
        ItemStatus::Preparing | ItemStatus::Delivered => false,
    }
}

pub fn ready_view(dishes: &[Dish], tables: &[DiningTable], orders: &[Order]) -> ReadyView {
    let lookup = Lookup::new(dishes, tables);
    // (table id, items) in order of first appearance
    let mut buckets: Vec<(&str, Vec<ReadyItem>)> = Vec::new();

    for order in orders.iter().filter(|o| o.is_active()) {
        for item in &order.items {
            let Some(dish) = lookup.dish(&item.dish_id) else {
                continue;
            };
            if !awaits_delivery(item, dish) {
                continue;
            }
            let entry = ReadyItem {
                order_id: order.id.clone(),
                item: item.clone(),
                dish: dish.clone(),
            };
            match buckets.iter_mut().find(|(id, _)| *id == order.table_id) {
                Some((_, items)) => items.push(entry),
                None => buckets.push((order.table_id.as_str(), vec![entry])),
            }
        }
    }

    let groups = buckets
        .into_iter()
        .filter_map(|(table_id, items)| {
            lookup.table(table_id).map(|table| ReadyGroup {
                table: table.clone(),
                items,
            })
        })
        .collect();

    ReadyView { groups }
}
