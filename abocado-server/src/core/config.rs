use std::str::FromStr;

use shared::order::TimestampPolicy;

use crate::auth::JwtConfig;
use crate::core::{Result, ServerError};
use crate::orders::TableClearPolicy;

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|---------|---------|
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 3000 | HTTP 端口 |
/// | ENVIRONMENT | development | development / production |
/// | LOG_LEVEL | info | 未设置 RUST_LOG 时的日志级别 |
/// | LOG_DIR | - | 按天滚动的日志目录 |
/// | JWT_SECRET | 自动生成 (仅开发) | HS256 密钥，至少 32 字符 |
/// | JWT_EXPIRATION_MINUTES | 720 | 令牌有效期 |
/// | ITEM_TIMESTAMP_POLICY | first_entry | first_entry / every_entry |
/// | TABLE_CLEAR_POLICY | idempotent | idempotent / require_occupied |
/// | SEED_DEMO_DATA | true | 写入演示菜单、桌台和订单 |
/// | ADMIN_PASSWORD | abocado-admin | 初始 `admin` 密码 |
/// | CHEF_PASSWORD | abocado-chef | 初始 `chef` 密码 |
/// | WAITER_PASSWORD | abocado-mozo | 初始 `mozo` 密码 |
/// | AUTH_FIXED_DELAY_MS | 300 | 登录最短响应时间 |
///
/// ```ignore
/// HTTP_PORT=8080 TABLE_CLEAR_POLICY=require_occupied cargo run -p abocado-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_host: String,
    pub http_port: u16,
    /// development | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub jwt: JwtConfig,
    pub timestamp_policy: TimestampPolicy,
    pub table_clear_policy: TableClearPolicy,
    pub seed_demo_data: bool,
    pub seed_accounts: SeedAccounts,
    pub auth_fixed_delay_ms: u64,
}

/// 空库时创建的员工账号密码
#[derive(Debug, Clone)]
pub struct SeedAccounts {
    pub admin_password: String,
    pub chef_password: String,
    pub waiter_password: String,
}

impl Default for SeedAccounts {
    fn default() -> Self {
        Self {
            admin_password: "abocado-admin".into(),
            chef_password: "abocado-chef".into(),
            waiter_password: "abocado-mozo".into(),
        }
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

fn parse_policy<T>(value: Option<String>, name: &str) -> Result<T>
where
    T: FromStr<Err = String> + Default,
{
    match value {
        Some(v) => v
            .parse()
            .map_err(|e| ServerError::Config(format!("{name}: {e}"))),
        None => Ok(T::default()),
    }
}

impl Config {
    /// 从进程环境变量加载配置
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值查找函数加载配置
    ///
    /// 未知的策略名直接报错，不回退到默认值
    pub fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = get("ENVIRONMENT").unwrap_or_else(|| "development".into());
        let production = environment == "production";

        let defaults = SeedAccounts::default();

        Ok(Self {
            http_host: get("HTTP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            http_port: parse_or(get("HTTP_PORT"), 3000),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: get("LOG_DIR").filter(|d| !d.is_empty()),
            jwt: JwtConfig::from_lookup(&get, production)
                .map_err(|e| ServerError::Config(e.to_string()))?,
            timestamp_policy: parse_policy(get("ITEM_TIMESTAMP_POLICY"), "ITEM_TIMESTAMP_POLICY")?,
            table_clear_policy: parse_policy(get("TABLE_CLEAR_POLICY"), "TABLE_CLEAR_POLICY")?,
            seed_demo_data: parse_or(get("SEED_DEMO_DATA"), true),
            seed_accounts: SeedAccounts {
                admin_password: get("ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
                chef_password: get("CHEF_PASSWORD").unwrap_or(defaults.chef_password),
                waiter_password: get("WAITER_PASSWORD").unwrap_or(defaults.waiter_password),
            },
            auth_fixed_delay_ms: parse_or(get("AUTH_FIXED_DELAY_MS"), 300),
            environment,
        })
    }

    /// 测试用配置：固定密钥，无登录延迟
    pub fn for_tests() -> Self {
        Self {
            http_host: "127.0.0.1".into(),
            http_port: 0,
            environment: "test".into(),
            log_level: "warn".into(),
            log_dir: None,
            jwt: JwtConfig {
                secret: "abocado-test-secret-abocado-test-secret".into(),
                ..JwtConfig::default()
            },
            timestamp_policy: TimestampPolicy::default(),
            table_clear_policy: TableClearPolicy::default(),
            seed_demo_data: true,
            seed_accounts: SeedAccounts::default(),
            auth_fixed_delay_ms: 0,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.http_port, 3000);
        assert_eq!(config.http_host, "0.0.0.0");
        assert!(config.is_development());
        assert_eq!(config.timestamp_policy, TimestampPolicy::FirstEntry);
        assert_eq!(config.table_clear_policy, TableClearPolicy::Idempotent);
        assert!(config.seed_demo_data);
        assert_eq!(config.seed_accounts.waiter_password, "abocado-mozo");
        assert_eq!(config.auth_fixed_delay_ms, 300);
        assert_eq!(config.jwt.expiration_minutes, 720);
        assert!(config.jwt.secret.len() >= 32);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("HTTP_PORT", "8080"),
            ("ITEM_TIMESTAMP_POLICY", "every_entry"),
            ("TABLE_CLEAR_POLICY", "require_occupied"),
            ("SEED_DEMO_DATA", "false"),
            ("LOG_DIR", "/tmp/abocado"),
        ]))
        .unwrap();
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.timestamp_policy, TimestampPolicy::EveryEntry);
        assert_eq!(config.table_clear_policy, TableClearPolicy::RequireOccupied);
        assert!(!config.seed_demo_data);
        assert_eq!(config.log_dir.as_deref(), Some("/tmp/abocado"));
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let err = Config::from_lookup(lookup(&[("TABLE_CLEAR_POLICY", "sometimes")])).unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn test_production_requires_secret() {
        let err = Config::from_lookup(lookup(&[("ENVIRONMENT", "production")])).unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));

        let config = Config::from_lookup(lookup(&[
            ("ENVIRONMENT", "production"),
            ("JWT_SECRET", "0123456789abcdef0123456789abcdef"),
        ]))
        .unwrap();
        assert!(config.is_production());
    }
}
