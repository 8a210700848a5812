use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;

use super::list_ops::Keyed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account record as listed in the admin console. The password is write-only
/// on the wire and never echoed back by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uuid: Uuid,
    pub user_name: String,
    pub email: String,
    pub role: Role,
}

impl Keyed for User {
    fn uuid(&self) -> Uuid {
        self.uuid
    }
}

/// Identity payload returned by `GET /me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub uuid: Uuid,
    pub user_name: String,
    pub email: String,
    pub role: Role,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
