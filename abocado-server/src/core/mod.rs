//! 核心模块 - 服务器配置、状态与生命周期
//!
//! - [`Config`] - 服务器配置
//! - [`ServerState`] - 所有处理器共享的状态
//! - [`Server`] - HTTP 服务器
//! - [`ServerError`] - 启动与运行时错误

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::{Config, SeedAccounts};
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
