//! Abocado Server - 餐厅前厅、厨房与服务后端
//!
//! # 模块结构
//!
//! ```text
//! abocado-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT、权限、中间件
//! ├── db/            # 内存存储、初始数据、仓储
//! ├── orders/        # 下单、菜品状态、清台
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 路由组装
//! └── utils/         # 日志、校验
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod orders;
pub mod services;
pub mod utils;

// 重新导出公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use orders::OrdersManager;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// 重新导出日志函数
pub use utils::logger::{init_logger, init_logger_with_file};

// 安全日志宏
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 加载 `.env`、读取配置并初始化全局日志
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    _    _                         _
   / \  | |__   ___   ___ __ _  __| | ___
  / _ \ | '_ \ / _ \ / __/ _` |/ _` |/ _ \
 / ___ \| |_) | (_) | (_| (_| | (_| | (_) |
/_/   \_\_.__/ \___/ \___\__,_|\__,_|\___/
    "#
    );
}
