//! Authentication Handlers

use std::time::Duration;

use axum::{Json, extract::State};
use shared::client::{CurrentUserResponse, LoginRequest, LoginResponse, UserInfo};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::StaffRepository;
use crate::security_log;
use crate::utils::validation::{MAX_NAME_LEN, MAX_PASSWORD_LEN};
use crate::utils::{AppError, AppResult};

/// Login handler
///
/// Verifies the credentials against the staff registry and issues a JWT.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let username = req.username.trim().to_string();
    let account = if username.len() > MAX_NAME_LEN || req.password.len() > MAX_PASSWORD_LEN {
        None
    } else {
        StaffRepository::new(state.db.clone()).find_by_username(&username)
    };

    let verified = match &account {
        Some(a) => a
            .verify_password(&req.password)
            .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?,
        None => false,
    };

    // Fixed delay before answering; unknown user and wrong password look the same
    tokio::time::sleep(Duration::from_millis(state.config.auth_fixed_delay_ms)).await;

    let account = match account {
        Some(a) if verified => a,
        _ => {
            security_log!("WARN", "login_failed", username = username.as_str());
            return Err(AppError::invalid_credentials());
        }
    };

    let token = state
        .jwt_service
        .generate_token(&account.id, &account.username, account.role)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(
        user_id = %account.id,
        username = %account.username,
        role = %account.role,
        "User logged in"
    );

    Ok(Json(LoginResponse {
        access_token: token,
        user: UserInfo {
            id: account.id,
            username: account.username,
            role: account.role,
        },
    }))
}

/// Current user handler
pub async fn me(user: CurrentUser) -> Json<CurrentUserResponse> {
    let permissions = user.permissions();
    Json(CurrentUserResponse {
        id: user.id,
        username: user.username,
        role: user.role,
        permissions,
    })
}
