use std::sync::Arc;

use axum::{Router, middleware};
use parking_lot::RwLock;
use tower::Service;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::core::ServerState;
use crate::utils::AppError;

pub type OneshotResult =
    Result<http::Response<axum::body::Body>, Box<dyn std::error::Error + Send + Sync>>;

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        // Core APIs
        .merge(crate::api::auth::router())
        .merge(crate::api::health::router())
        .merge(crate::api::menu::router())
        // Resource APIs
        .merge(crate::api::dishes::router())
        .merge(crate::api::tables::router())
        .merge(crate::api::orders::router())
        .merge(crate::api::staff::router())
        .fallback(not_found)
}

async fn not_found(uri: http::Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

/// Assembled router, built once the state exists
#[derive(Clone, Debug, Default)]
pub struct HttpsService {
    router: Arc<RwLock<Option<Router>>>,
}

impl HttpsService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize the router with the given server state.
    /// Must be called after ServerState is fully built.
    pub fn initialize(&self, state: ServerState) {
        let app = build_app()
            // 路由级 JWT 认证，require_auth 会跳过公开路由
            .layer(middleware::from_fn_with_state(state.clone(), require_auth))
            .with_state(state)
            .layer(CorsLayer::permissive())
            .layer(CompressionLayer::new())
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(log_request));

        *self.router.write() = Some(app);
    }

    pub fn router(&self) -> Option<Router> {
        self.router.read().clone()
    }

    /// Drive a single request through the full middleware stack in-process
    pub async fn oneshot(&self, request: http::Request<axum::body::Body>) -> OneshotResult {
        let Some(mut router) = self.router() else {
            return Err(AppError::internal("HttpsService not initialized").into());
        };

        match router.call(request).await {
            Ok(response) => Ok(response),
            Err(_) => Err(AppError::internal("Oneshot call failed").into()),
        }
    }
}
