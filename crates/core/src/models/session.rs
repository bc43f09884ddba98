//! Session model

use serde::{Deserialize, Serialize};

/// The logged-in identity: created at login, cleared at logout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Sent as the identity header on every request
    pub user_id: String,
    /// Display name chosen at login (may be missing for restored sessions)
    #[serde(default)]
    pub nickname: Option<String>,
}

impl Session {
    pub fn new(user_id: impl Into<String>, nickname: Option<String>) -> Self {
        Self {
            user_id: user_id.into(),
            nickname,
        }
    }

    /// Name to greet the user with
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.user_id)
    }
}
