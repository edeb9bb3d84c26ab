use std::sync::Arc;

use crate::auth::JwtService;
use crate::core::{Config, Result, ServerError};
use crate::db::{MemoryDb, seed};
use crate::orders::OrdersManager;
use crate::services::HttpsService;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 所有字段都是 `Arc` 或小值，克隆开销很小
///
/// | 字段 | 类型 | 说明 |
/// |-------|------|---------|
/// | config | Config | 不可变配置 |
/// | db | Arc<MemoryDb> | 内存存储 |
/// | orders | Arc<OrdersManager> | 订单流程 |
/// | jwt_service | Arc<JwtService> | 令牌签发与验证 |
/// | https | HttpsService | 组装好的路由 |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: Arc<MemoryDb>,
    pub orders: Arc<OrdersManager>,
    pub jwt_service: Arc<JwtService>,
    pub https: HttpsService,
}

impl ServerState {
    /// 创建存储、写入初始数据并装配服务
    ///
    /// 初始化顺序：
    /// 1. 存储 + 初始数据
    /// 2. 服务 (订单, JWT)
    /// 3. 路由 (依赖完整的状态)
    pub fn initialize(config: &Config) -> Result<Self> {
        let db = Arc::new(MemoryDb::new());
        seed::seed(&db, &config.seed_accounts, config.seed_demo_data)
            .map_err(|e| ServerError::Internal(anyhow::anyhow!(e)))?;

        let orders = Arc::new(OrdersManager::new(
            db.clone(),
            config.timestamp_policy,
            config.table_clear_policy,
        ));
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let https = HttpsService::new();

        let state = Self {
            config: config.clone(),
            db,
            orders,
            jwt_service,
            https: https.clone(),
        };

        https.initialize(state.clone());

        tracing::info!(
            timestamp_policy = ?config.timestamp_policy,
            table_clear_policy = %config.table_clear_policy,
            "Server state initialized"
        );

        Ok(state)
    }
}
