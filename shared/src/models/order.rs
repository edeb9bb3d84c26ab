//! Order Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::order::ItemStatus;

/// Order lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Active,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Completed and cancelled orders accept no further changes
    #[inline]
    pub fn is_closed(&self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// A line of an order, tracked independently through kitchen and service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub dish_id: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: ItemStatus,
    /// Stamped on entering `preparing`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    /// Stamped on entering `ready`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Order aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub table_id: String,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Total including the service surcharge, fixed at creation
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl Order {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == OrderStatus::Active
    }

    pub fn item(&self, item_id: &str) -> Option<&OrderItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    pub fn item_mut(&mut self, item_id: &str) -> Option<&mut OrderItem> {
        self.items.iter_mut().find(|i| i.id == item_id)
    }

    /// Whether every item has reached `delivered`
    pub fn all_delivered(&self) -> bool {
        self.items.iter().all(|i| i.status == ItemStatus::Delivered)
    }

    /// Number of items currently in the given status
    pub fn count_items(&self, status: ItemStatus) -> usize {
        self.items.iter().filter(|i| i.status == status).count()
    }
}

/// Line of a create-order request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderItem {
    pub dish_id: String,
    pub quantity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Create order payload
///
/// The total is always computed by the server; a client-supplied total is
/// not part of the contract and is ignored if present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub table_id: String,
    pub items: Vec<CreateOrderItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_size: Option<i32>,
}

/// Update order payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    pub status: Option<OrderStatus>,
}

/// Update order item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderItemRequest {
    pub status: Option<ItemStatus>,
}

/// Query filter for order listings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderQuery {
    pub status: Option<OrderStatus>,
    pub table_id: Option<String>,
}

impl OrderQuery {
    pub fn matches(&self, order: &Order) -> bool {
        self.status.is_none_or(|s| s == order.status)
            && self
                .table_id
                .as_deref()
                .is_none_or(|t| t == order.table_id)
    }
}
