//! Order workflows
//!
//! [`OrdersManager`] owns every mutation that touches more than one entity:
//! order creation seats the table, table clear closes the order, item
//! status changes run the state machine.

pub mod manager;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use manager::{ManagerError, ManagerResult, OrdersManager};

/// Precondition for clearing a table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableClearPolicy {
    /// Clearing a table that is not occupied succeeds (still resets it)
    #[default]
    Idempotent,
    /// Clearing a table that is not occupied fails with `TableAlreadyEmpty`
    RequireOccupied,
}

impl FromStr for TableClearPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "idempotent" => Ok(Self::Idempotent),
            "require_occupied" => Ok(Self::RequireOccupied),
            other => Err(format!("unknown table clear policy: {other}")),
        }
    }
}

impl fmt::Display for TableClearPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idempotent => f.write_str("idempotent"),
            Self::RequireOccupied => f.write_str("require_occupied"),
        }
    }
}
