//! Staff Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Staff role
///
/// Roles are a closed set; capabilities per role are resolved by the
/// server's permission table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Chef,
    Waiter,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Chef, Role::Waiter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Chef => "chef",
            Self::Waiter => "waiter",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "chef" => Ok(Self::Chef),
            "waiter" => Ok(Self::Waiter),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Staff response (without password)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffInfo {
    pub id: String,
    pub username: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Create staff payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffCreate {
    pub username: String,
    pub password: String,
    pub role: Role,
}
