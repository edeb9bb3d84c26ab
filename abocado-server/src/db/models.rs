//! Stored entities that never leave the server as-is

use chrono::{DateTime, Utc};
use shared::models::{Role, StaffInfo};

/// Staff account with its argon2 password hash
#[derive(Debug, Clone)]
pub struct StaffAccount {
    pub id: String,
    pub username: String,
    pub hash_pass: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl StaffAccount {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.hash_pass)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }

    pub fn info(&self) -> StaffInfo {
        StaffInfo {
            id: self.id.clone(),
            username: self.username.clone(),
            role: self.role,
            created_at: self.created_at,
        }
    }
}
