//! Daily roulette endpoints

use crate::VoltupClient;
use tracing::{debug, info};
use voltup_core::compat::{self, wire::WireRouletteResult, wire::WireRouletteStatus};
use voltup_core::{Result, RouletteResult, RouletteStatus};

/// `GET /v1/roulette/status`
///
/// Optional on the backend: a 404 means the endpoint is not deployed.
/// Callers decide how to treat failures.
pub async fn fetch_roulette_status(client: &VoltupClient) -> Result<RouletteStatus> {
    let body = client.get("/v1/roulette/status").await?;
    let status = compat::decode_object::<WireRouletteStatus, RouletteStatus>(&body)?;
    debug!("Roulette participated today: {}", status.participated_today);
    Ok(status)
}

/// `POST /v1/roulette/participate` - once per user per day.
/// May be slow: the server serializes participation with a lock.
pub async fn participate(client: &VoltupClient) -> Result<RouletteResult> {
    let body = client.post::<()>("/v1/roulette/participate", None).await?;
    let result = compat::decode_object::<WireRouletteResult, RouletteResult>(&body)?;
    info!("Roulette granted {}", result.granted_point);
    Ok(result)
}
