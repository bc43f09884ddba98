//! Nickname login

use crate::VoltupClient;
use tracing::info;
use voltup_core::compat::{self, wire::WireAuthLogin};
use voltup_core::{AuthLogin, AuthLoginRequest, Error, Result};

/// `POST /v1/auth/login` - the user is created on first login
pub async fn login(client: &VoltupClient, nickname: &str) -> Result<AuthLogin> {
    let nickname = nickname.trim();
    if nickname.is_empty() {
        return Err(Error::InvalidData("nickname must not be empty".to_string()));
    }

    let request = AuthLoginRequest {
        nickname: nickname.to_string(),
    };

    info!("Logging in as {}", nickname);
    let body = client.post("/v1/auth/login", Some(&request)).await?;
    compat::decode_object::<WireAuthLogin, AuthLogin>(&body)
}
