//! Login and user models

use serde::{Deserialize, Serialize};

/// Body of `POST /v1/auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct AuthLoginRequest {
    pub nickname: String,
}

/// Result of `POST /v1/auth/login`; the user is created when unknown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthLogin {
    pub user_id: String,
}

/// Body of `POST /v1/users`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub login_id: String,
    pub name: String,
}

impl CreateUserRequest {
    /// Nickname-only signup uses the same value for both fields
    pub fn from_nickname(nickname: &str) -> Self {
        let nickname = nickname.trim().to_string();
        Self {
            login_id: nickname.clone(),
            name: nickname,
        }
    }
}

/// Result of `POST /v1/users`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedUser {
    pub id: String,
    pub login_id: String,
    pub name: String,
}
