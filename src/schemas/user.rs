//! Response schemas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserBase;

/// A user as returned to clients. Never carries a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

impl UserResponse {
    /// Builds the response for a freshly created account: active, not yet
    /// verified, never logged in.
    pub fn new(id: Uuid, base: UserBase, created_at: DateTime<Utc>) -> Self {
        let UserBase { first_name, last_name, email, username } = base;
        Self {
            id,
            first_name,
            last_name,
            email,
            username,
            is_active: true,
            is_verified: false,
            created_at,
            updated_at: created_at,
            last_login: None,
        }
    }
}

/// Access token issued after login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub user: UserResponse,
}

impl Token {
    pub fn bearer(access_token: impl Into<String>, user: UserResponse) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: "bearer".to_string(),
            user,
        }
    }
}
