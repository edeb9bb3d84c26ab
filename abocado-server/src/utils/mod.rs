//! Utilities
//!
//! - [`AppError`] / [`ApiResponse`] - unified error types (from `shared::error`)
//! - [`logger`] - tracing setup
//! - [`validation`] - input validation helpers

pub mod logger;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
