//! Staff Repository

use std::sync::Arc;

use chrono::Utc;
use shared::models::{StaffCreate, StaffInfo};
use shared::{AppError, AppResult, ErrorCode};
use uuid::Uuid;

use crate::db::MemoryDb;
use crate::db::models::StaffAccount;

#[derive(Clone)]
pub struct StaffRepository {
    db: Arc<MemoryDb>,
}

impl StaffRepository {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }

    pub fn find_all(&self) -> Vec<StaffInfo> {
        self.db.read().staff.iter().map(StaffAccount::info).collect()
    }

    pub fn find_by_username(&self, username: &str) -> Option<StaffAccount> {
        self.db.read().staff_by_username(username).cloned()
    }

    /// Create an account; the password is hashed before taking the lock
    pub fn create(&self, data: StaffCreate) -> AppResult<StaffInfo> {
        let hash_pass = StaffAccount::hash_password(&data.password)
            .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;

        let mut guard = self.db.write();
        if guard.staff_by_username(&data.username).is_some() {
            return Err(AppError::with_message(
                ErrorCode::StaffUsernameExists,
                format!("Username {} already exists", data.username),
            ));
        }

        let account = StaffAccount {
            id: Uuid::new_v4().to_string(),
            username: data.username,
            hash_pass,
            role: data.role,
            created_at: Utc::now(),
        };
        let info = account.info();
        guard.staff.push(account);
        Ok(info)
    }

    /// Delete an account; staff cannot delete themselves
    pub fn delete(&self, id: &str, current_user_id: &str) -> AppResult<()> {
        if id == current_user_id {
            return Err(AppError::new(ErrorCode::StaffCannotDeleteSelf));
        }

        let mut guard = self.db.write();
        let before = guard.staff.len();
        guard.staff.retain(|s| s.id != id);
        if guard.staff.len() == before {
            return Err(AppError::with_message(
                ErrorCode::StaffNotFound,
                format!("Staff {id} not found"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Role;

    fn create(repo: &StaffRepository, username: &str) -> AppResult<StaffInfo> {
        repo.create(StaffCreate {
            username: username.to_string(),
            password: "secreto".to_string(),
            role: Role::Waiter,
        })
    }

    #[test]
    fn test_username_unique_case_insensitive() {
        let repo = StaffRepository::new(Arc::new(MemoryDb::new()));
        create(&repo, "lucia").unwrap();
        let err = create(&repo, "Lucia").unwrap_err();
        assert_eq!(err.code, ErrorCode::StaffUsernameExists);
        assert_eq!(repo.find_all().len(), 1);
    }

    #[test]
    fn test_delete_rules() {
        let repo = StaffRepository::new(Arc::new(MemoryDb::new()));
        let a = create(&repo, "a").unwrap();
        let b = create(&repo, "b").unwrap();

        let err = repo.delete(&a.id, &a.id).unwrap_err();
        assert_eq!(err.code, ErrorCode::StaffCannotDeleteSelf);

        repo.delete(&b.id, &a.id).unwrap();
        let err = repo.delete(&b.id, &a.id).unwrap_err();
        assert_eq!(err.code, ErrorCode::StaffNotFound);
    }

    #[test]
    fn test_password_is_hashed() {
        let repo = StaffRepository::new(Arc::new(MemoryDb::new()));
        create(&repo, "carlos").unwrap();
        let account = repo.find_by_username("carlos").unwrap();
        assert_ne!(account.hash_pass, "secreto");
        assert!(account.verify_password("secreto").unwrap());
    }
}
