//! User creation / lookup

use crate::VoltupClient;
use tracing::debug;
use voltup_core::compat::{self, wire::WireCreatedUser};
use voltup_core::{CreateUserRequest, CreatedUser, Result};

/// `POST /v1/users` - creates the user or returns the existing one
pub async fn create_user(client: &VoltupClient, request: &CreateUserRequest) -> Result<CreatedUser> {
    debug!("Creating user {}", request.login_id);
    let body = client.post("/v1/users", Some(request)).await?;
    compat::decode_object::<WireCreatedUser, CreatedUser>(&body)
}
