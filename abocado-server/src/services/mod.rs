//! Services

pub mod https;

pub use https::{HttpsService, build_app};
