//! Dining Table Repository
//!
//! Occupancy (`occupied`, `currentOrderId`, `partySize`) is owned by order
//! creation and table clear; plain updates cannot touch it.

use std::sync::Arc;

use chrono::Utc;
use shared::models::{DiningTable, DiningTableCreate, DiningTableUpdate, TableStatus};
use shared::{AppError, AppResult, ErrorCode};
use uuid::Uuid;

use crate::db::{Collections, MemoryDb};

#[derive(Clone)]
pub struct DiningTableRepository {
    db: Arc<MemoryDb>,
}

pub(crate) fn table_not_found(id: &str) -> AppError {
    AppError::with_message(ErrorCode::TableNotFound, format!("Table {id} not found"))
}

fn ensure_number_free(data: &Collections, number: u32, except: Option<&str>) -> AppResult<()> {
    let taken = data
        .tables
        .iter()
        .any(|t| t.number == number && Some(t.id.as_str()) != except);
    if taken {
        return Err(AppError::with_message(
            ErrorCode::TableNumberExists,
            format!("Table number {number} already exists"),
        )
        .with_detail("number", number));
    }
    Ok(())
}

fn occupancy_edit() -> AppError {
    AppError::validation("Table occupancy is managed by orders and table clear")
        .with_detail("field", "status")
}

impl DiningTableRepository {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }

    /// All tables ordered by number
    pub fn find_all(&self) -> Vec<DiningTable> {
        let mut tables = self.db.read().tables.clone();
        tables.sort_by_key(|t| t.number);
        tables
    }

    pub fn find_by_id(&self, id: &str) -> AppResult<DiningTable> {
        self.db
            .read()
            .table(id)
            .cloned()
            .ok_or_else(|| table_not_found(id))
    }

    pub fn create(&self, data: DiningTableCreate) -> AppResult<DiningTable> {
        let status = data.status.unwrap_or_default();
        if status == TableStatus::Occupied {
            return Err(occupancy_edit());
        }

        let mut guard = self.db.write();
        ensure_number_free(&guard, data.number, None)?;

        let table = DiningTable {
            id: Uuid::new_v4().to_string(),
            number: data.number,
            capacity: data.capacity,
            status,
            current_order_id: None,
            party_size: None,
            created_at: Utc::now(),
        };
        guard.tables.push(table.clone());
        Ok(table)
    }

    pub fn update(&self, id: &str, data: DiningTableUpdate) -> AppResult<DiningTable> {
        let mut guard = self.db.write();
        let current = guard.table(id).ok_or_else(|| table_not_found(id))?;

        if let Some(status) = data.status {
            let touches_occupancy = status == TableStatus::Occupied || current.is_occupied();
            if touches_occupancy && status != current.status {
                return Err(occupancy_edit());
            }
        }
        if let Some(number) = data.number {
            ensure_number_free(&guard, number, Some(id))?;
        }

        let table = guard.table_mut(id).ok_or_else(|| table_not_found(id))?;
        if let Some(number) = data.number {
            table.number = number;
        }
        if let Some(capacity) = data.capacity {
            table.capacity = capacity;
        }
        if let Some(status) = data.status {
            table.status = status;
        }
        Ok(table.clone())
    }

    pub fn delete(&self, id: &str) -> AppResult<()> {
        let mut guard = self.db.write();
        let table = guard.table(id).ok_or_else(|| table_not_found(id))?;
        if table.is_occupied() {
            return Err(AppError::with_message(
                ErrorCode::TableHasOrders,
                format!("Table {} is occupied", table.number),
            ));
        }
        guard.tables.retain(|t| t.id != id);
        Ok(())
    }
}
