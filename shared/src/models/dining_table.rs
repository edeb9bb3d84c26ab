//! Dining Table Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Occupancy status of a table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
}

/// Dining table entity (mesa)
///
/// `current_order_id` and `party_size` are only set while the table is
/// occupied; both are owned by order creation and table clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTable {
    pub id: String,
    /// Table number shown on the floor plan (unique)
    pub number: u32,
    pub capacity: u32,
    pub status: TableStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_size: Option<u32>,
    pub created_at: DateTime<Utc>,
}

impl DiningTable {
    #[inline]
    pub fn is_available(&self) -> bool {
        self.status == TableStatus::Available
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.status == TableStatus::Occupied
    }

    /// Seat a party on this table for the given order
    pub fn occupy(&mut self, order_id: impl Into<String>, party_size: Option<u32>) {
        self.status = TableStatus::Occupied;
        self.current_order_id = Some(order_id.into());
        self.party_size = party_size;
    }

    /// Reset the table to available, dropping the order pointer and party size
    pub fn release(&mut self) {
        self.status = TableStatus::Available;
        self.current_order_id = None;
        self.party_size = None;
    }
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTableCreate {
    pub number: u32,
    pub capacity: u32,
    pub status: Option<TableStatus>,
}

/// Update dining table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTableUpdate {
    pub number: Option<u32>,
    pub capacity: Option<u32>,
    pub status: Option<TableStatus>,
}
