//! API routing modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`auth`] - login and current user
//! - [`menu`] - public digital menu
//! - [`dishes`] - dish catalog management
//! - [`tables`] - table registry and table clear
//! - [`orders`] - orders and item status
//! - [`staff`] - staff accounts

pub mod auth;
pub mod health;
pub mod menu;

// Data models API
pub mod dishes;
pub mod orders;
pub mod staff;
pub mod tables;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
