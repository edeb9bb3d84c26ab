//! Repository Module
//!
//! CRUD operations over the in-memory collections. Each repository holds a
//! shared handle to [`MemoryDb`] and takes the lock per call.

pub mod dining_table;
pub mod dish;
pub mod order;
pub mod staff;

// Re-exports
pub use dining_table::DiningTableRepository;
pub use dish::DishRepository;
pub use order::OrderRepository;
pub use staff::StaffRepository;
