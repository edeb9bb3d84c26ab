//! JWT 令牌服务
//!
//! 签发并验证 HS256 Bearer 令牌

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};
use shared::models::Role;
use thiserror::Error;

use super::permissions;

const MIN_SECRET_LEN: usize = 32;

/// JWT 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// HS256 密钥 (至少 32 字节)
    pub secret: String,
    /// 令牌有效期 (分钟)
    pub expiration_minutes: i64,
    pub issuer: String,
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: generate_secure_printable_jwt_secret(),
            expiration_minutes: 720,
            issuer: "abocado-server".to_string(),
            audience: "abocado-clients".to_string(),
        }
    }
}

impl JwtConfig {
    /// 从 `JWT_SECRET` / `JWT_EXPIRATION_MINUTES` 构建
    ///
    /// 非生产环境缺少密钥时使用随机密钥，重启后令牌失效
    pub fn from_lookup<F>(get: &F, production: bool) -> Result<Self, JwtError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = match get("JWT_SECRET") {
            Some(secret) if secret.len() >= MIN_SECRET_LEN => secret,
            Some(_) => {
                return Err(JwtError::ConfigError(format!(
                    "JWT_SECRET must be at least {MIN_SECRET_LEN} characters long"
                )));
            }
            None if production => {
                return Err(JwtError::ConfigError(
                    "JWT_SECRET environment variable must be set in production".to_string(),
                ));
            }
            None => {
                tracing::warn!("JWT_SECRET not set, generating a temporary development key");
                generate_secure_printable_jwt_secret()
            }
        };

        Ok(Self {
            secret,
            expiration_minutes: get("JWT_EXPIRATION_MINUTES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(720),
            ..Self::default()
        })
    }
}

/// 访问令牌携带的 JWT 声明
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// 员工 ID (subject)
    pub sub: String,
    pub username: String,
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
    pub aud: String,
}

#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// 生成可打印的随机密钥 (64 字符)
pub fn generate_secure_printable_jwt_secret() -> String {
    const ALLOWED: &[u8] =
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-_=+";

    let rng = SystemRandom::new();
    let mut bytes = [0u8; 64];
    if rng.fill(&mut bytes).is_err() {
        return "AbocadoDevelopmentOnlyFallbackSecretKey-0000".to_string();
    }

    bytes
        .iter()
        .map(|b| ALLOWED[*b as usize % ALLOWED.len()] as char)
        .collect()
}

/// JWT 令牌服务
#[derive(Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("issuer", &self.config.issuer)
            .field("audience", &self.config.audience)
            .finish_non_exhaustive()
    }
}

impl JwtService {
    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// 为员工账号签发访问令牌
    pub fn generate_token(
        &self,
        user_id: &str,
        username: &str,
        role: Role,
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.config.expiration_minutes);

        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            role,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// 验证并解码令牌
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss", "aud"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                _ => JwtError::InvalidToken(e.to_string()),
            }
        })?;

        Ok(token_data.claims)
    }

    /// 从 `Authorization` 请求头中提取令牌
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}

/// 当前用户上下文 (来自 JWT claims)
///
/// 由 [`super::require_auth`] 注入请求扩展
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
    pub role: Role,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            username: claims.username,
            role: claims.role,
        }
    }
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        permissions::role_has_permission(self.role, permission)
    }

    pub fn permissions(&self) -> Vec<String> {
        permissions::permissions_for(self.role)
            .iter()
            .map(|p| p.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::with_config(JwtConfig {
            secret: "unit-test-secret-unit-test-secret-123".to_string(),
            ..JwtConfig::default()
        })
    }

    #[test]
    fn test_jwt_generation_and_validation() {
        let service = service();
        let token = service
            .generate_token("staff-1", "mozo", Role::Waiter)
            .expect("Failed to generate test token");

        let claims = service
            .validate_token(&token)
            .expect("Failed to validate test token");

        assert_eq!(claims.sub, "staff-1");
        assert_eq!(claims.username, "mozo");
        assert_eq!(claims.role, Role::Waiter);
        assert_eq!(claims.iss, "abocado-server");
    }

    #[test]
    fn test_expired_token() {
        let service = JwtService::with_config(JwtConfig {
            secret: "unit-test-secret-unit-test-secret-123".to_string(),
            expiration_minutes: -10,
            ..JwtConfig::default()
        });
        let token = service.generate_token("1", "chef", Role::Chef).unwrap();
        assert!(matches!(
            service.validate_token(&token),
            Err(JwtError::ExpiredToken)
        ));
    }

    #[test]
    fn test_foreign_signature_rejected() {
        let other = JwtService::with_config(JwtConfig {
            secret: "another-secret-another-secret-another".to_string(),
            ..JwtConfig::default()
        });
        let token = other.generate_token("1", "admin", Role::Admin).unwrap();
        assert!(matches!(
            service().validate_token(&token),
            Err(JwtError::InvalidSignature)
        ));
        assert!(service().validate_token("not-a-token").is_err());
    }

    #[test]
    fn test_extract_from_header() {
        assert_eq!(JwtService::extract_from_header("Bearer abc"), Some("abc"));
        assert_eq!(JwtService::extract_from_header("Basic abc"), None);
    }

    #[test]
    fn test_printable_secret() {
        let a = generate_secure_printable_jwt_secret();
        let b = generate_secure_printable_jwt_secret();
        assert_eq!(a.len(), 64);
        assert_ne!(a, b);
    }

    #[test]
    fn test_current_user_permissions() {
        let chef = CurrentUser {
            id: "2".to_string(),
            username: "chef".to_string(),
            role: Role::Chef,
        };
        assert!(chef.has_permission("orders:items"));
        assert!(!chef.has_permission("orders:create"));
        assert!(!chef.is_admin());
    }
}
