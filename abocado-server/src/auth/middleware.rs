//! 认证中间件
//!
//! 为 JWT 认证和权限检查提供 Axum 中间件

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::AppError;
use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::security_log;

/// 无需令牌即可访问的 API 路由
const PUBLIC_API_ROUTES: &[&str] = &["/api/auth/login", "/api/menu"];

/// 认证中间件
///
/// 提取并验证 `Authorization: Bearer <token>`，成功后将 [`CurrentUser`]
/// 注入请求扩展。
///
/// # 跳过认证
///
/// - `OPTIONS *` (CORS 预检)
/// - 非 `/api/` 路径 (`/health`，未知路径交给 404)
/// - `/api/auth/login`, `/api/menu`
///
/// | 失败情况 | 错误码 |
/// |---------|------|
/// | 缺少请求头 | NotAuthenticated (401) |
/// | 令牌过期 | TokenExpired (401) |
/// | 格式错误或签发方不符 | TokenInvalid (401) |
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    if !path.starts_with("/api/") || PUBLIC_API_ROUTES.contains(&path) {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            security_log!("WARN", "auth_missing", uri = format!("{:?}", req.uri()));
            return Err(AppError::not_authenticated());
        }
    };

    match state.jwt_service.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::from(claims);
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = format!("{}", e),
                uri = format!("{:?}", req.uri())
            );

            match e {
                JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Invalid token")),
            }
        }
    }
}

/// 权限中间件 - 要求特定权限
///
/// ```ignore
/// use axum::middleware;
/// Router::new()
///     .route("/api/tables", post(handler::create))
///     .layer(middleware::from_fn(require_permission("tables:manage")));
/// ```
///
/// 缺少权限时返回 403 `PermissionDenied`
pub fn require_permission(
    permission: &'static str,
) -> impl Fn(
    Request,
    Next,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, AppError>> + Send>>
+ Clone {
    move |req: Request, next: Next| {
        Box::pin(async move {
            let user = req
                .extensions()
                .get::<CurrentUser>()
                .ok_or_else(AppError::not_authenticated)?;

            if !user.has_permission(permission) {
                security_log!(
                    "WARN",
                    "permission_denied",
                    user_id = user.id.clone(),
                    username = user.username.clone(),
                    role = user.role.as_str(),
                    required_permission = permission
                );
                return Err(AppError::permission_denied(format!(
                    "Permission denied: {}",
                    permission
                )));
            }

            Ok(next.run(req).await)
        })
    }
}
