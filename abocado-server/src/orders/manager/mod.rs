//! OrdersManager - order creation, status changes and table clear
//!
//! Every operation runs under a single write guard on the store: either all
//! of its effects are visible or none are. Validation happens before the
//! first mutation.

mod error;

#[cfg(test)]
mod tests;

pub use error::{ManagerError, ManagerResult};

use std::sync::Arc;

use chrono::Utc;
use shared::models::{CreateOrderRequest, DiningTable, Order, OrderItem, OrderStatus};
use shared::order::{ItemStatus, MAX_QUANTITY, TimestampPolicy, order_total};
use uuid::Uuid;

use super::TableClearPolicy;
use crate::db::MemoryDb;

#[derive(Debug, Clone)]
pub struct OrdersManager {
    db: Arc<MemoryDb>,
    timestamp_policy: TimestampPolicy,
    clear_policy: TableClearPolicy,
}

impl OrdersManager {
    pub fn new(
        db: Arc<MemoryDb>,
        timestamp_policy: TimestampPolicy,
        clear_policy: TableClearPolicy,
    ) -> Self {
        Self {
            db,
            timestamp_policy,
            clear_policy,
        }
    }

    pub fn timestamp_policy(&self) -> TimestampPolicy {
        self.timestamp_policy
    }

    pub fn clear_policy(&self) -> TableClearPolicy {
        self.clear_policy
    }

    /// Create an order and seat it at its table
    ///
    /// The total is computed here from current dish prices with the service
    /// surcharge; nothing the client sends influences it.
    pub fn create_order(&self, req: CreateOrderRequest) -> ManagerResult<Order> {
        if req.items.is_empty() {
            return Err(ManagerError::OrderEmpty);
        }
        if let Some(line) = req
            .items
            .iter()
            .find(|l| l.quantity < 1 || l.quantity as u32 > MAX_QUANTITY)
        {
            return Err(ManagerError::InvalidQuantity {
                dish_id: line.dish_id.clone(),
                quantity: line.quantity,
            });
        }

        let mut data = self.db.write();

        let table = data
            .table(&req.table_id)
            .ok_or_else(|| ManagerError::TableNotFound(req.table_id.clone()))?;
        if !table.is_available() {
            return Err(ManagerError::TableNotAvailable(table.number));
        }
        let party_size = match req.party_size {
            Some(size) if size < 1 || (size as u32) > table.capacity => {
                return Err(ManagerError::InvalidPartySize {
                    party_size: size,
                    capacity: table.capacity,
                });
            }
            Some(size) => Some(size as u32),
            None => None,
        };

        let mut priced = Vec::with_capacity(req.items.len());
        for line in &req.items {
            let dish = data
                .dish(&line.dish_id)
                .ok_or_else(|| ManagerError::DishNotFound(line.dish_id.clone()))?;
            if !dish.available {
                return Err(ManagerError::DishUnavailable(dish.name.clone()));
            }
            priced.push((dish.price, line.quantity as u32));
        }
        let total = order_total(priced).ok_or(ManagerError::TotalOverflow)?;

        let order = Order {
            id: Uuid::new_v4().to_string(),
            table_id: req.table_id.clone(),
            items: req
                .items
                .into_iter()
                .map(|line| OrderItem {
                    id: Uuid::new_v4().to_string(),
                    dish_id: line.dish_id,
                    quantity: line.quantity as u32,
                    notes: line.notes.filter(|n| !n.trim().is_empty()),
                    status: ItemStatus::Pending,
                    started_at: None,
                    completed_at: None,
                })
                .collect(),
            status: OrderStatus::Active,
            created_at: Utc::now(),
            completed_at: None,
            total,
        };

        let table = data
            .table_mut(&req.table_id)
            .ok_or_else(|| ManagerError::TableNotFound(req.table_id.clone()))?;
        table.occupy(order.id.clone(), party_size);
        let table_number = table.number;
        data.orders.push(order.clone());

        tracing::info!(
            order_id = %order.id,
            table = table_number,
            items = order.items.len(),
            total = %order.total,
            "Order created"
        );

        Ok(order)
    }

    /// Close an order as completed or cancelled
    ///
    /// The table stays occupied until it is cleared.
    pub fn update_order_status(&self, order_id: &str, status: OrderStatus) -> ManagerResult<Order> {
        let mut data = self.db.write();
        let order = data
            .order_mut(order_id)
            .ok_or_else(|| ManagerError::OrderNotFound(order_id.to_string()))?;

        match order.status {
            OrderStatus::Completed => {
                return Err(ManagerError::OrderAlreadyCompleted(order_id.to_string()));
            }
            OrderStatus::Cancelled => {
                return Err(ManagerError::OrderAlreadyCancelled(order_id.to_string()));
            }
            OrderStatus::Active => {}
        }

        match status {
            OrderStatus::Active => return Err(ManagerError::InvalidOrderStatus),
            OrderStatus::Completed if !order.all_delivered() => {
                let open = order
                    .items
                    .iter()
                    .filter(|i| i.status != ItemStatus::Delivered)
                    .count();
                return Err(ManagerError::OrderHasOpenItems {
                    id: order_id.to_string(),
                    open,
                });
            }
            OrderStatus::Completed | OrderStatus::Cancelled => {}
        }

        order.status = status;
        order.completed_at = Some(Utc::now());

        tracing::info!(order_id = %order_id, status = ?status, "Order closed");
        Ok(order.clone())
    }

    /// Move one item through the kitchen/service state machine
    pub fn update_item_status(
        &self,
        order_id: &str,
        item_id: &str,
        status: ItemStatus,
    ) -> ManagerResult<Order> {
        let mut data = self.db.write();
        let order = data
            .order_mut(order_id)
            .ok_or_else(|| ManagerError::OrderNotFound(order_id.to_string()))?;
        if !order.is_active() {
            return Err(ManagerError::OrderNotActive(order_id.to_string()));
        }

        let item = order
            .item_mut(item_id)
            .ok_or_else(|| ManagerError::ItemNotFound(item_id.to_string()))?;
        let from = item.status;
        item.apply_status(status, self.timestamp_policy, Utc::now())?;

        tracing::info!(
            order_id = %order_id,
            item_id = %item_id,
            from = %from,
            to = %status,
            "Item status changed"
        );
        Ok(order.clone())
    }

    /// Free a table and close whatever order was seated there
    ///
    /// No check of item progress: the active order, if any, becomes
    /// `completed` when everything was delivered and `cancelled` otherwise.
    pub fn clear_table(&self, table_id: &str) -> ManagerResult<DiningTable> {
        let mut data = self.db.write();
        let table = data
            .table(table_id)
            .ok_or_else(|| ManagerError::TableNotFound(table_id.to_string()))?;

        if !table.is_occupied() && self.clear_policy == TableClearPolicy::RequireOccupied {
            return Err(ManagerError::TableAlreadyEmpty(table.number));
        }

        let now = Utc::now();
        let closed = data.active_order_for_table_mut(table_id).map(|order| {
            order.status = if order.all_delivered() {
                OrderStatus::Completed
            } else {
                OrderStatus::Cancelled
            };
            order.completed_at = Some(now);
            (order.id.clone(), order.status)
        });

        let table = data
            .table_mut(table_id)
            .ok_or_else(|| ManagerError::TableNotFound(table_id.to_string()))?;
        table.release();

        match closed {
            Some((order_id, status)) => tracing::info!(
                table = table.number,
                order_id = %order_id,
                order_status = ?status,
                "Table cleared"
            ),
            None => tracing::info!(table = table.number, "Table cleared"),
        }

        Ok(table.clone())
    }

    /// Remove an order; a table still pointing at it is freed
    pub fn delete_order(&self, order_id: &str) -> ManagerResult<()> {
        let mut data = self.db.write();
        let before = data.orders.len();
        data.orders.retain(|o| o.id != order_id);
        if data.orders.len() == before {
            return Err(ManagerError::OrderNotFound(order_id.to_string()));
        }

        if let Some(table) = data
            .tables
            .iter_mut()
            .find(|t| t.current_order_id.as_deref() == Some(order_id))
        {
            table.release();
            tracing::info!(table = table.number, "Table freed by order deletion");
        }

        tracing::info!(order_id = %order_id, "Order deleted");
        Ok(())
    }
}
