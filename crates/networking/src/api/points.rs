//! Point balance endpoints

use crate::http::path_segment;
use crate::VoltupClient;
use tracing::debug;
use voltup_core::compat::{self, wire::WirePointsDetail, wire::WirePointsSummary};
use voltup_core::{PointsDetail, PointsSummary, Result};

/// `GET /v1/points/me` - available balance and points expiring within 7 days
pub async fn fetch_points_me(client: &VoltupClient) -> Result<PointsSummary> {
    let body = client.get("/v1/points/me").await?;
    let summary = compat::decode_object::<WirePointsSummary, PointsSummary>(&body)?;
    debug!(
        "Points summary: available {}, expiring {}",
        summary.available_balance, summary.expiring_within_7_days
    );
    Ok(summary)
}

/// `GET /v1/points/me/{userId}` - total balance plus ledger
pub async fn fetch_points_detail(client: &VoltupClient, user_id: &str) -> Result<PointsDetail> {
    let path = format!("/v1/points/me/{}", path_segment(user_id));
    let body = client.get(&path).await?;
    let detail = compat::decode_object::<WirePointsDetail, PointsDetail>(&body)?;
    debug!("Points detail: {} history entries", detail.histories.len());
    Ok(detail)
}
