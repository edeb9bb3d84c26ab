//! Data models
//!
//! Shared between abocado-server and its clients (via API).
//! All IDs are `String`; JSON uses camelCase field names.

pub mod dining_table;
pub mod dish;
pub mod order;
pub mod staff;

// Re-exports
pub use dining_table::*;
pub use dish::*;
pub use order::*;
pub use staff::*;
