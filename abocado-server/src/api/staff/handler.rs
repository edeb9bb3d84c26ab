//! Staff API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::{StaffCreate, StaffInfo};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::StaffRepository;
use crate::security_log;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NAME_LEN, validate_password, validate_required_text};

/// GET /api/staff
pub async fn list(State(state): State<ServerState>) -> Json<Vec<StaffInfo>> {
    let repo = StaffRepository::new(state.db.clone());
    Json(repo.find_all())
}

/// POST /api/staff
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(mut payload): Json<StaffCreate>,
) -> AppResult<Json<StaffInfo>> {
    payload.username = payload.username.trim().to_string();
    validate_required_text(&payload.username, "username", MAX_NAME_LEN)?;
    validate_password(&payload.password)?;

    let repo = StaffRepository::new(state.db.clone());
    let info = repo.create(payload)?;
    security_log!(
        "INFO",
        "staff_created",
        staff_id = info.id.as_str(),
        role = info.role.as_str(),
        by = user.username.as_str()
    );
    Ok(Json(info))
}

/// DELETE /api/staff/:id
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let repo = StaffRepository::new(state.db.clone());
    repo.delete(&id, &user.id)?;
    security_log!(
        "INFO",
        "staff_deleted",
        staff_id = id.as_str(),
        by = user.username.as_str()
    );
    Ok(StatusCode::NO_CONTENT)
}
