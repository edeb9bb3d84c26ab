//! Kitchen board
//!
//! Main dishes and sides that still need the kitchen, split into
//! pending / preparing / ready columns.

use serde::{Deserialize, Serialize};

use super::Lookup;
use crate::models::{DiningTable, Dish, Order, OrderItem};
use crate::order::ItemStatus;

/// One item on the kitchen board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitchenTicket {
    pub order_id: String,
    pub table_id: String,
    /// Resolved table number; `None` if the table is unknown
    pub table_number: Option<u32>,
    pub item: OrderItem,
    pub dish: Dish,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KitchenBoard {
    pub pending: Vec<KitchenTicket>,
    pub preparing: Vec<KitchenTicket>,
    pub ready: Vec<KitchenTicket>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitchenStats {
    pub pending: usize,
    pub preparing: usize,
    pub ready: usize,
}

impl KitchenBoard {
    pub fn stats(&self) -> KitchenStats {
        KitchenStats {
            pending: self.pending.len(),
            preparing: self.preparing.len(),
            ready: self.ready.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.preparing.is_empty() && self.ready.is_empty()
    }

    /// Column for a status; delivered items never appear on the board
    pub fn column(&self, status: ItemStatus) -> &[KitchenTicket] {
        match status {
            ItemStatus::Pending => self.pending.as_slice(),
            ItemStatus::Preparing => self.preparing.as_slice(),
            ItemStatus::Ready => self.ready.as_slice(),
            ItemStatus::Delivered => &[],
        }
    }

    /// Find a ticket by item id across all columns
    pub fn ticket(&self, item_id: &str) -> Option<&KitchenTicket> {
        self.pending
            .iter()
            .chain(&self.preparing)
            .chain(&self.ready)
            .find(|t| t.item.id == item_id)
    }
}

pub fn kitchen_board(dishes: &[Dish], tables: &[DiningTable], orders: &[Order]) -> KitchenBoard {
    let lookup = Lookup::new(dishes, tables);
    let mut board = KitchenBoard::default();

    for order in orders.iter().filter(|o| o.is_active()) {
        let table_number = lookup.table(&order.table_id).map(|t| t.number);
        for item in &order.items {
            let Some(dish) = lookup.dish(&item.dish_id) else {
                continue;
            };
            if !dish.category.is_kitchen() {
                continue;
            }
            let column = match item.status {
                ItemStatus::Pending => &mut board.pending,
                ItemStatus::Preparing => &mut board.preparing,
                ItemStatus::Ready => &mut board.ready,
                ItemStatus::Delivered => continue,
            };
            column.push(KitchenTicket {
                order_id: order.id.clone(),
                table_id: order.table_id.clone(),
                table_number,
                item: item.clone(),
                dish: dish.clone(),
            });
        }
    }

    board
}
