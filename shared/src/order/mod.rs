//! Order domain logic
//!
//! - [`status`]: the order-item status state machine and timestamp policy
//! - [`pricing`]: line subtotals and the surcharged order total

pub mod pricing;
pub mod status;

// Re-exports
pub use pricing::{MAX_PRICE, MAX_QUANTITY, SURCHARGE_MULTIPLIER, line_subtotal, order_total};
pub use status::{InvalidTransition, ItemStatus, TimestampPolicy};
